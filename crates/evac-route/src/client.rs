//! Routing client trait and route result types.
//!
//! # Pluggability
//!
//! The planner calls routing via the [`RouteClient`] trait, so applications
//! can swap in any provider binding (a directions HTTP API, a local routing
//! engine, a scripted test double) without touching the engine.  The client
//! is always an injected capability, never a module-level singleton.
//!
//! # Units
//!
//! Providers report leg distances in **metres**; the planner converts to
//! kilometres at the scoring boundary via [`RouteResult::distance_km`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use evac_core::GeoPoint;

use crate::RoutingError;

// ── TravelMode ────────────────────────────────────────────────────────────────

/// The travel mode requested from the routing provider.
///
/// `Display` yields the lowercase strings the provider's wire format uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TravelMode {
    /// Private vehicle (the evacuation planner's objective is a driving route).
    #[default]
    Driving,
    /// On foot.
    Walking,
    /// Bicycle.
    Cycling,
    /// Scheduled public transit.
    Transit,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Route result types ────────────────────────────────────────────────────────

/// One leg of a computed route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Leg length in metres.
    pub distance_m: f64,
    /// Where the leg starts.
    pub start: GeoPoint,
}

/// A single route alternative: an ordered list of legs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// Total length of all legs in metres.
    pub fn distance_m(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance_m).sum()
    }
}

/// A successful routing response.
///
/// Providers return at least one route with at least one leg; [`primary`]
/// returns `None` for a degenerate empty response, which callers treat as a
/// routing failure.
///
/// [`primary`]: RouteResult::primary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub routes: Vec<Route>,
}

impl RouteResult {
    /// The provider's preferred alternative (first in the list).
    pub fn primary(&self) -> Option<&Route> {
        self.routes.first()
    }

    /// Total distance of the primary route in metres.
    pub fn distance_m(&self) -> Option<f64> {
        self.primary().map(Route::distance_m)
    }

    /// Total distance of the primary route in kilometres.
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_m().map(|m| m / 1_000.0)
    }
}

// ── RouteClient trait ─────────────────────────────────────────────────────────

/// Pluggable routing capability.
///
/// Implement this trait to bind the engine to a concrete directions
/// provider.  Requests are independent network calls; the planner issues
/// them concurrently, so implementations must be `Send + Sync` and must not
/// serialize unrelated requests behind shared mutable state.
#[async_trait]
pub trait RouteClient: Send + Sync {
    /// Compute a route from `origin` to `destination` for the given mode.
    ///
    /// Per-request failures are returned as [`RoutingError`]; the caller
    /// decides whether a failure is local (one candidate) or terminal (a
    /// direct routing request).
    async fn compute_route(
        &self,
        origin:      GeoPoint,
        destination: GeoPoint,
        mode:        TravelMode,
    ) -> Result<RouteResult, RoutingError>;
}
