//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Hazard-boundary checks compare
//! a haversine distance against a zone radius with an inclusive boundary, so
//! the coordinate type carries full double precision end to end.

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in degrees.
///
/// Valid values satisfy `-90 ≤ lat ≤ 90` and `-180 ≤ lng ≤ 180`.  `new` does
/// not enforce the invariant (most points come from already-validated
/// datasets); boundary inputs such as user locations go through [`try_new`].
///
/// [`try_new`]: GeoPoint::try_new
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construct a validated point, rejecting non-finite or out-of-range
    /// coordinates.
    pub fn try_new(lat: f64, lng: f64) -> CoreResult<Self> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    /// Check the coordinate-range invariant on an existing value.
    pub fn validate(&self) -> CoreResult<()> {
        let in_range = self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng);
        if in_range {
            Ok(())
        } else {
            Err(CoreError::InvalidCoordinate { lat: self.lat, lng: self.lng })
        }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric, and zero (modulo floating tolerance) iff both points are
    /// equal.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
