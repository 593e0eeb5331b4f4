//! Planner configuration.
//!
//! Two operating points are in active use and ship as named profiles:
//! a cheap five-candidate scan with a 5 km margin, and a dense 36-candidate
//! sweep with a 20 km margin.  Neither is privileged — both are plain
//! configuration, and callers may build any other combination directly.

use std::time::Duration;

/// Default emission factor: kg CO₂ per kilometre driven.
pub const DEFAULT_EMISSION_FACTOR_KG_PER_KM: f64 = 0.12;

/// Default per-request routing timeout.
pub const DEFAULT_ROUTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Tuning knobs for one evacuation plan.
///
/// Typically loaded from the application's settings layer and passed to
/// [`EvacuationPlanner::plan_evacuation`](crate::EvacuationPlanner::plan_evacuation).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlannerConfig {
    /// How many trial destinations to generate around the hazard perimeter.
    pub candidate_count: usize,

    /// Distance in kilometres beyond the hazard radius at which candidates
    /// are placed.
    pub margin_km: f64,

    /// Emission factor used to score routed distances, in kg CO₂ per km.
    pub emission_factor_kg_per_km: f64,

    /// Cap on simultaneous in-flight routing requests.  `None` issues all
    /// surviving candidates at once.
    pub concurrency_limit: Option<usize>,

    /// Per-request timeout.  An elapsed timeout fails that candidate only,
    /// never the plan.
    pub route_timeout: Duration,
}

impl PlannerConfig {
    /// Five candidates at a 5 km margin — the cheap scan profile.
    pub fn quick_scan() -> Self {
        Self {
            candidate_count:           5,
            margin_km:                 5.0,
            emission_factor_kg_per_km: DEFAULT_EMISSION_FACTOR_KG_PER_KM,
            concurrency_limit:         None,
            route_timeout:             DEFAULT_ROUTE_TIMEOUT,
        }
    }

    /// Thirty-six candidates at a 20 km margin — the dense sweep profile.
    pub fn wide_sweep() -> Self {
        Self {
            candidate_count: 36,
            margin_km:       20.0,
            ..Self::quick_scan()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::quick_scan()
    }
}
