//! Direct point-to-point routing, without optimization.
//!
//! Used for "route me to this zone" requests: a single unoptimized call to
//! the routing capability.  No candidate generation, no emission scoring,
//! and no local recovery — errors reach the caller verbatim.

use std::time::Duration;

use evac_core::GeoPoint;
use evac_route::{RouteClient, RouteResult, RoutingError, TravelMode};

use crate::DirectRoutingError;

/// Thin wrapper binding a [`RouteClient`] to the per-request timeout.
pub struct DirectRoutingFlow<C: RouteClient> {
    /// The routing capability.
    pub client: C,

    /// Applied to every request; elapsed timeouts surface as
    /// [`RoutingError::Timeout`].
    pub route_timeout: Duration,
}

impl<C: RouteClient> DirectRoutingFlow<C> {
    pub fn new(client: C, route_timeout: Duration) -> Self {
        Self { client, route_timeout }
    }

    /// Compute a single driving route from `origin` to `destination`.
    ///
    /// Both endpoints are validated (user locations arrive unchecked); the
    /// routing outcome is then surfaced as-is.
    pub async fn get_directions(
        &self,
        origin:      GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteResult, DirectRoutingError> {
        origin.validate()?;
        destination.validate()?;

        let outcome = tokio::time::timeout(
            self.route_timeout,
            self.client.compute_route(origin, destination, TravelMode::Driving),
        )
        .await;
        match outcome {
            Ok(result) => Ok(result?),
            Err(_elapsed) => Err(RoutingError::Timeout.into()),
        }
    }
}
