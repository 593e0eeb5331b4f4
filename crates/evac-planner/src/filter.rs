//! Hotzone avoidance: the safety predicate over a hazard snapshot.

use evac_core::{GeoPoint, HazardZone, ZoneId};

/// `true` when `point` lies outside every zone in `zones`.
///
/// The boundary is inclusive-unsafe: a point at distance exactly equal to a
/// zone's radius is inside that zone.
pub fn is_safe(point: GeoPoint, zones: &[HazardZone]) -> bool {
    zones.iter().all(|hz| !hz.contains(point))
}

/// [`is_safe`] with the originating zone skipped.
///
/// Candidates are generated at `radius + margin` from the origin center, so
/// the origin zone itself can never legitimately reject them; only the
/// *other* zones of the snapshot are evaluated.
pub fn is_safe_excluding(point: GeoPoint, zones: &[HazardZone], origin: ZoneId) -> bool {
    zones
        .iter()
        .filter(|hz| hz.id != origin)
        .all(|hz| !hz.contains(point))
}
