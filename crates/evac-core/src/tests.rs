//! Unit tests for evac-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(27.0, -82.0);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(51.5074, -0.1278);
        let b = GeoPoint::new(48.8566, 2.3522);
        assert_eq!(a.distance_km(b), b.distance_km(a));
    }

    #[test]
    fn london_paris_reference() {
        // London → Paris is ~343 km great-circle.
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);
        let d = london.distance_km(paris);
        assert!((d - 343.0).abs() < 2.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn try_new_accepts_extremes() {
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(GeoPoint::try_new(90.5, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, -180.5).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display() {
        let p = GeoPoint::new(27.0, -82.0);
        assert_eq!(p.to_string(), "(27.000000, -82.000000)");
    }
}

#[cfg(test)]
mod hazard {
    use crate::{GeoPoint, HazardZone, Severity, ZoneId};

    fn zone(lat: f64, lng: f64, radius_km: f64) -> HazardZone {
        HazardZone {
            id:           ZoneId(0),
            center:       GeoPoint::new(lat, lng),
            radius_km,
            severity:     Severity::Severe,
            report_count: 3,
        }
    }

    #[test]
    fn center_is_inside_own_zone() {
        let hz = zone(27.0, -82.0, 50.0);
        assert!(hz.contains(hz.center));
    }

    #[test]
    fn boundary_is_inclusive() {
        // A point at distance exactly equal to the radius is inside.
        let hz_center = GeoPoint::new(0.0, 0.0);
        let point = GeoPoint::new(0.5, 0.0);
        let hz = zone(0.0, 0.0, hz_center.distance_km(point));
        assert!(hz.contains(point));
    }

    #[test]
    fn far_point_is_outside() {
        let hz = zone(27.0, -82.0, 50.0);
        assert!(!hz.contains(GeoPoint::new(-27.0, 98.0)));
    }

    #[test]
    fn severity_from_color() {
        assert_eq!(Severity::from_color("red"), Severity::Severe);
        assert_eq!(Severity::from_color("orange"), Severity::High);
        assert_eq!(Severity::from_color("yellow"), Severity::Moderate);
        assert_eq!(Severity::from_color(""), Severity::Low);
        assert_eq!(Severity::from_color("chartreuse"), Severity::Low);
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Severe.to_string(), "severe");
        assert_eq!(Severity::Low.to_string(), "low");
    }

    #[test]
    fn zone_id_display() {
        assert_eq!(ZoneId(7).to_string(), "ZoneId(7)");
    }
}

#[cfg(test)]
mod feed {
    use crate::{HazardDataset, Severity, ZoneId, parse_feed};

    const SAMPLE: &str = r#"[
        {"location": {"lat": 27.0, "lng": -82.0}, "radius": 20, "color": "red", "count": 14},
        {"location": {"lat": 29.7, "lng": -85.3}, "radius": 15, "color": "orange", "count": 6},
        {"location": {"lat": 30.4, "lng": -87.2}, "radius": 10, "color": "yellow", "count": 2}
    ]"#;

    #[test]
    fn parses_feed_payload() {
        let entries = parse_feed(SAMPLE).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].location.lat, 27.0);
        assert_eq!(entries[1].color, "orange");
        assert_eq!(entries[2].count, 2);
    }

    #[test]
    fn builds_dataset_with_positional_ids() {
        let entries = parse_feed(SAMPLE).unwrap();
        let dataset = HazardDataset::from_feed(entries, 1, 1_700_000_000).unwrap();
        assert_eq!(dataset.snapshot_id, 1);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.zones[0].id, ZoneId(0));
        assert_eq!(dataset.zones[2].id, ZoneId(2));
        assert_eq!(dataset.zones[0].severity, Severity::Severe);
        assert_eq!(dataset.zone(ZoneId(1)).unwrap().radius_km, 15.0);
        assert!(dataset.zone(ZoneId(3)).is_none());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let body = r#"[{"location": {"lat": 0, "lng": 0}, "radius": 0, "color": "red", "count": 1}]"#;
        let entries = parse_feed(body).unwrap();
        assert!(HazardDataset::from_feed(entries, 1, 0).is_err());
    }

    #[test]
    fn rejects_out_of_range_center() {
        let body = r#"[{"location": {"lat": 95.0, "lng": 0}, "radius": 5, "color": "red", "count": 1}]"#;
        let entries = parse_feed(body).unwrap();
        assert!(HazardDataset::from_feed(entries, 1, 0).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_feed("not json").is_err());
    }
}

#[cfg(test)]
mod store {
    use crate::{DatasetStore, FeedHealth, GeoPoint, HazardZone, Severity, ZoneId};

    fn zones() -> Vec<HazardZone> {
        vec![HazardZone {
            id:           ZoneId(0),
            center:       GeoPoint::new(27.0, -82.0),
            radius_km:    50.0,
            severity:     Severity::Severe,
            report_count: 9,
        }]
    }

    #[test]
    fn starts_empty_and_fresh() {
        let store = DatasetStore::new();
        let snap = store.snapshot();
        assert!(snap.dataset.is_empty());
        assert_eq!(snap.health, FeedHealth::Fresh);
    }

    #[test]
    fn replace_bumps_snapshot_id() {
        let store = DatasetStore::new();
        let first = store.replace(zones(), 100);
        let second = store.replace(zones(), 200);
        assert!(second.snapshot_id > first.snapshot_id);
        assert_eq!(store.snapshot().dataset.snapshot_id, second.snapshot_id);
    }

    #[test]
    fn captured_snapshot_survives_refresh() {
        let store = DatasetStore::new();
        store.replace(zones(), 100);
        let captured = store.snapshot().dataset;

        // Refresh with an empty working set; the captured view is unchanged.
        store.replace(Vec::new(), 200);
        assert_eq!(captured.len(), 1);
        assert_eq!(captured.zones[0].radius_km, 50.0);
        assert!(store.snapshot().dataset.is_empty());
    }

    #[test]
    fn failed_refresh_keeps_last_known_good_and_flags_stale() {
        let store = DatasetStore::new();
        store.replace(zones(), 100);

        assert!(store.ingest_feed("not json", 200).is_err());
        let snap = store.snapshot();
        assert_eq!(snap.health, FeedHealth::Stale);
        assert_eq!(snap.dataset.len(), 1);

        // A later successful refresh clears the flag.
        store.replace(zones(), 300);
        assert_eq!(store.snapshot().health, FeedHealth::Fresh);
    }

    #[test]
    fn ingest_feed_publishes_valid_payload() {
        let store = DatasetStore::new();
        let body = r#"[{"location": {"lat": 27.0, "lng": -82.0}, "radius": 20, "color": "red", "count": 14}]"#;
        let dataset = store.ingest_feed(body, 1_700_000_000).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(store.snapshot().dataset.snapshot_id, dataset.snapshot_id);
    }
}
