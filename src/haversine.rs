//! Straight-line directions fallback (when no routing backend is available).
//!
//! Answers every segment request with the direct two-point segment.
//! Ignores roads but always available and never fails.

use crate::polyline::Polyline;
use crate::traits::{DirectionsError, DirectionsProvider, TransportMode};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Directions provider that connects each pair with a straight segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLineDirections;

impl DirectionsProvider for StraightLineDirections {
    fn route_between(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        _mode: TransportMode,
    ) -> Result<Polyline, DirectionsError> {
        Ok(Polyline::new(vec![from, to]))
    }
}
