//! Wire types for the periodic hazard feed and snapshot ingestion.
//!
//! The feed endpoint returns a JSON array of aggregated report clusters:
//!
//! ```json
//! [{"location": {"lat": 27.0, "lng": -82.0}, "radius": 15, "color": "orange", "count": 12}]
//! ```
//!
//! There is no versioning; each fetch result fully replaces the prior
//! dataset.  Parsing and validation happen here; the atomic swap lives in
//! [`DatasetStore`](crate::DatasetStore).

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, GeoPoint, HazardDataset, HazardZone, Severity, ZoneId};

/// Coordinate pair as the feed serializes it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedLocation {
    pub lat: f64,
    pub lng: f64,
}

/// One aggregated hazard cluster as returned by the feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub location: FeedLocation,
    /// Cluster radius in kilometres.
    pub radius: f64,
    /// Severity color string ("red", "orange", "yellow", or empty).
    pub color: String,
    /// Number of reports aggregated into the cluster.
    pub count: u32,
}

/// Parse a raw feed response body.
pub fn parse_feed(body: &str) -> CoreResult<Vec<FeedEntry>> {
    Ok(serde_json::from_str(body)?)
}

impl HazardDataset {
    /// Build a validated snapshot from feed entries.
    ///
    /// Every entry must carry in-range coordinates and a positive radius;
    /// one malformed entry fails the whole refresh so the store keeps its
    /// last-known-good snapshot instead of publishing a partial one.
    pub fn from_feed(
        entries:            Vec<FeedEntry>,
        snapshot_id:        u64,
        captured_unix_secs: i64,
    ) -> CoreResult<Self> {
        let mut zones = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            let center = GeoPoint::try_new(entry.location.lat, entry.location.lng)?;
            if !(entry.radius.is_finite() && entry.radius > 0.0) {
                return Err(CoreError::InvalidRadius(entry.radius));
            }
            zones.push(HazardZone {
                id:           ZoneId(i as u32),
                center,
                radius_km:    entry.radius,
                severity:     Severity::from_color(&entry.color),
                report_count: entry.count,
            });
        }
        Ok(Self { snapshot_id, captured_unix_secs, zones })
    }
}
