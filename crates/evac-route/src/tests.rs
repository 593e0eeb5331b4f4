//! Unit tests for the routing boundary types.

#[cfg(test)]
mod travel_mode {
    use crate::TravelMode;

    #[test]
    fn default_is_driving() {
        assert_eq!(TravelMode::default(), TravelMode::Driving);
    }

    #[test]
    fn display_matches_wire_strings() {
        assert_eq!(TravelMode::Driving.to_string(), "driving");
        assert_eq!(TravelMode::Transit.to_string(), "transit");
    }
}

#[cfg(test)]
mod route_result {
    use evac_core::GeoPoint;

    use crate::{Route, RouteLeg, RouteResult};

    fn leg(distance_m: f64) -> RouteLeg {
        RouteLeg { distance_m, start: GeoPoint::new(27.0, -82.0) }
    }

    #[test]
    fn primary_distance_sums_legs() {
        let result = RouteResult {
            routes: vec![
                Route { legs: vec![leg(40_000.0), leg(30_000.0)] },
                Route { legs: vec![leg(99_000.0)] },
            ],
        };
        assert_eq!(result.distance_m(), Some(70_000.0));
        assert_eq!(result.distance_km(), Some(70.0));
    }

    #[test]
    fn empty_response_has_no_distance() {
        let result = RouteResult { routes: vec![] };
        assert!(result.primary().is_none());
        assert!(result.distance_km().is_none());
    }
}

#[cfg(test)]
mod error {
    use crate::RoutingError;

    #[test]
    fn display() {
        assert_eq!(RoutingError::NotFound.to_string(), "no route found");
        assert_eq!(
            RoutingError::ServiceError("backend 502".into()).to_string(),
            "routing service error: backend 502"
        );
        assert_eq!(RoutingError::Timeout.to_string(), "routing request timed out");
    }
}
