//! Carbon-emission scoring for routed distances.

/// Estimated kg CO₂ for driving `distance_km` at the given emission factor.
///
/// The factor always comes from [`PlannerConfig`](crate::PlannerConfig);
/// it is an input, not a constant of this module.
#[inline]
pub fn estimate(distance_km: f64, factor_kg_per_km: f64) -> f64 {
    distance_km * factor_kg_per_km
}
