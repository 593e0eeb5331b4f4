//! Planner-subsystem error types.

use thiserror::Error;

use evac_core::CoreError;
use evac_route::RoutingError;

/// Errors that prevent a plan from being attempted at all.
///
/// Per-candidate routing failures are not errors at this level — they are
/// recorded on the candidate and the plan continues (local recovery via
/// redundancy).  "No safe route found" is likewise a normal resolved outcome,
/// observed through [`EvacuationPlan::no_safe_route`](crate::EvacuationPlan::no_safe_route).
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("origin hazard zone is malformed: {0}")]
    InvalidOrigin(#[from] CoreError),
}

pub type PlanResult<T> = Result<T, PlanError>;

/// Errors from the direct point-to-point routing flow.
///
/// Both variants are transparent: the caller sees the underlying validation
/// or routing error verbatim, with no local recovery applied.
#[derive(Debug, Error)]
pub enum DirectRoutingError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}
