//! Per-request routing error taxonomy.

use thiserror::Error;

/// Errors returned by a [`RouteClient`](crate::RouteClient) request.
///
/// Each value describes exactly one request; the evacuation planner records
/// these per candidate and never escalates them to a plan-level fault.
#[derive(Clone, Debug, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum RoutingError {
    /// The provider found no route between the two points.
    #[error("no route found")]
    NotFound,

    /// The provider failed internally or returned an unusable response.
    #[error("routing service error: {0}")]
    ServiceError(String),

    /// The provider rejected the request due to rate limiting.
    #[error("routing service rate limited")]
    RateLimited,

    /// The request exceeded the configured per-request timeout.
    #[error("routing request timed out")]
    Timeout,
}

pub type RoutingResult<T> = Result<T, RoutingError>;
