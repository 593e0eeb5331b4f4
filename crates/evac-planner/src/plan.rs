//! Plan data model: candidates, plan states, and winner selection.

use evac_core::{GeoPoint, HazardZone};
use evac_route::RoutingError;

// ── Candidate ─────────────────────────────────────────────────────────────────

/// Lifecycle of a single trial destination.
///
/// Every candidate is written at most once after generation: either the
/// safety filter rejects it before routing, or exactly one routing
/// completion settles it as `Succeeded` or `Failed`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CandidateStatus {
    /// Generated, passed the safety filter, routing not yet settled.
    Pending,
    /// Routed; distance and emissions are recorded.
    Succeeded,
    /// Routing settled with the recorded per-candidate error.
    Failed(RoutingError),
    /// Inside another hazard zone of the locked snapshot; never routed.
    RejectedUnsafe,
}

/// A trial destination plus the routing/emission result obtained for it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteCandidate {
    /// Generation order — bearing `2π · index / count`.  Doubles as the
    /// deterministic tie-break key during selection.
    pub index: usize,

    /// The trial destination point.
    pub destination: GeoPoint,

    /// Routed driving distance in kilometres.  `None` until `Succeeded`.
    pub distance_km: Option<f64>,

    /// Estimated emissions for the routed distance.  `None` until `Succeeded`.
    pub emissions_kg_co2: Option<f64>,

    pub status: CandidateStatus,
}

impl RouteCandidate {
    /// A freshly generated candidate awaiting filtering and routing.
    pub fn pending(index: usize, destination: GeoPoint) -> Self {
        Self {
            index,
            destination,
            distance_km:      None,
            emissions_kg_co2: None,
            status:           CandidateStatus::Pending,
        }
    }

    #[inline]
    pub fn is_succeeded(&self) -> bool {
        self.status == CandidateStatus::Succeeded
    }
}

// ── Plan state machine ────────────────────────────────────────────────────────

/// How a resolved plan ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    /// A minimum-emission safe route was selected.
    Chosen,
    /// Every candidate was rejected or failed; there is nothing to present
    /// except an explicit "no safe route" result.
    NoneFound,
}

/// Planner state machine: `Idle → GeneratingCandidates → AwaitingRoutes →
/// Resolved(..)`.
///
/// `Resolved` states are terminal.  An abandoned plan is returned still in
/// `AwaitingRoutes` — abandonment means the caller stopped observing, not a
/// distinct terminal state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum PlanState {
    Idle,
    GeneratingCandidates,
    AwaitingRoutes,
    Resolved(Resolution),
}

// ── EvacuationPlan ────────────────────────────────────────────────────────────

/// The evaluated candidate set for one hazard zone plus the selected
/// minimum-emission safe route, if any.
///
/// Invariant: a set `chosen` is `Succeeded`, carries the minimum
/// `emissions_kg_co2` among all succeeded candidates, and its destination
/// lies outside every zone of the locked snapshot (unsafe candidates are
/// rejected before routing and can never be selected).
///
/// The planner owns the plan exclusively while it is in flight; the resolved
/// plan is handed to the caller as an immutable value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvacuationPlan {
    /// The hazard zone being evacuated.
    pub origin_zone: HazardZone,

    /// Id of the dataset snapshot this plan locked onto.
    pub snapshot_id: u64,

    /// All generated candidates in bearing order, including rejected and
    /// failed ones (the diagnostic detail the UI may surface).
    pub candidates: Vec<RouteCandidate>,

    /// The selected route, or `None` when no candidate succeeded.
    pub chosen: Option<RouteCandidate>,

    pub state: PlanState,
}

impl EvacuationPlan {
    /// A plan shell in `Idle`, before generation begins.
    pub(crate) fn idle(origin_zone: HazardZone, snapshot_id: u64) -> Self {
        Self {
            origin_zone,
            snapshot_id,
            candidates: Vec::new(),
            chosen:     None,
            state:      PlanState::Idle,
        }
    }

    /// `true` once the plan reached a terminal state.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, PlanState::Resolved(_))
    }

    /// `true` when the plan resolved without a single safe, routable
    /// destination.  Callers must branch on this and present an explicit
    /// "no safe route" result — never silently show nothing.
    #[inline]
    pub fn no_safe_route(&self) -> bool {
        self.state == PlanState::Resolved(Resolution::NoneFound)
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Pick the winner among succeeded candidates: minimum emissions, ties
/// broken by smallest index (the earliest-generated bearing wins).
///
/// Order-independent — the result is the same for any completion order of
/// the underlying requests.  Returns the winning candidate's `index`, or
/// `None` when no candidate succeeded.
pub fn select_min_emission(candidates: &[RouteCandidate]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for candidate in candidates {
        if !candidate.is_succeeded() {
            continue;
        }
        let Some(emissions) = candidate.emissions_kg_co2 else {
            continue;
        };
        let better = match best {
            None => true,
            Some((index, min)) => emissions < min || (emissions == min && candidate.index < index),
        };
        if better {
            best = Some((candidate.index, emissions));
        }
    }
    best.map(|(index, _)| index)
}
