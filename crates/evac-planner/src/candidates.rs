//! Candidate destination generation around a hazard perimeter.

use std::f64::consts::TAU;

use evac_core::GeoPoint;

/// Kilometres per degree of latitude in the flat-earth offset below.
pub const KM_PER_DEGREE_LAT: f64 = 111.111;

/// Generate `count` trial destinations evenly spaced around `center`.
///
/// Bearings step by `2π / count` starting due north; every point is placed
/// `radius_km + margin_km` kilometres out, so all candidates clear the
/// originating zone's own boundary before any other zone is consulted.
///
/// The offset uses an equirectangular (flat-earth) approximation: latitude
/// degrees at a fixed [`KM_PER_DEGREE_LAT`], longitude degrees additionally
/// scaled by `1 / cos(center.lat)`.  Accuracy degrades at high latitude or
/// large radius; candidate placement intentionally keeps this approximation
/// instead of a geodesic destination formula.
pub fn generate(
    center:    GeoPoint,
    radius_km: f64,
    margin_km: f64,
    count:     usize,
) -> Vec<GeoPoint> {
    let offset_km = radius_km + margin_km;
    let km_per_degree_lng = KM_PER_DEGREE_LAT * center.lat.to_radians().cos();

    (0..count)
        .map(|i| {
            let bearing = TAU * i as f64 / count as f64;
            GeoPoint::new(
                center.lat + offset_km * bearing.cos() / KM_PER_DEGREE_LAT,
                center.lng + offset_km * bearing.sin() / km_per_degree_lng,
            )
        })
        .collect()
}
