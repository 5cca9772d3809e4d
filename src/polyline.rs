//! Polyline representation for overlay geometries.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences. Encoding/decoding happens at the boundary
//! (when receiving from a directions backend or sending to a frontend).

use serde::{Deserialize, Serialize};

use crate::haversine::haversine_km;
use crate::region::BoundingRegion;

/// An overlay path as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
/// Zero- and one-point polylines are valid degenerate values, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding region of the path, `None` when the polyline is empty.
    pub fn extent(&self) -> Option<BoundingRegion> {
        BoundingRegion::from_points(&self.points)
    }

    /// Great-circle path length in kilometers, 0 for degenerate paths.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine_km(pair[0], pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_points() {
        let points = vec![(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.points(), &points[..]);
    }

    #[test]
    fn test_into_points() {
        let points = vec![(38.5, -120.2), (40.7, -120.95)];
        let polyline = Polyline::new(points.clone());
        let owned = polyline.into_points();
        assert_eq!(owned, points);
    }

    #[test]
    fn test_empty_polyline_is_valid() {
        let polyline = Polyline::new(vec![]);
        assert!(polyline.is_empty());
        assert!(polyline.extent().is_none());
    }

    #[test]
    fn test_extent_covers_all_points() {
        let polyline = Polyline::new(vec![(36.1, -115.2), (36.3, -115.1), (36.2, -115.3)]);
        let region = polyline.extent().unwrap();
        assert_eq!(region.min_lat, 36.1);
        assert_eq!(region.max_lat, 36.3);
        assert_eq!(region.min_lng, -115.3);
        assert_eq!(region.max_lng, -115.1);
    }

    #[test]
    fn test_length_of_degenerate_polyline_is_zero() {
        assert_eq!(Polyline::new(vec![]).length_km(), 0.0);
        assert_eq!(Polyline::new(vec![(36.1, -115.1)]).length_km(), 0.0);
    }

    #[test]
    fn test_length_sums_consecutive_segments() {
        // Las Vegas to Los Angeles, ~370 km
        let direct = Polyline::new(vec![(36.17, -115.14), (34.05, -118.24)]);
        assert!(direct.length_km() > 350.0 && direct.length_km() < 400.0);

        // Routing through a detour never shortens the path.
        let via = Polyline::new(vec![(36.17, -115.14), (35.0, -116.5), (34.05, -118.24)]);
        assert!(via.length_km() >= direct.length_km());
    }

    #[test]
    fn test_partial_eq() {
        let p1 = Polyline::new(vec![(1.0, 2.0)]);
        let p2 = Polyline::new(vec![(1.0, 2.0)]);
        let p3 = Polyline::new(vec![(1.0, 2.1)]);
        assert_eq!(p1, p2);
        assert_ne!(p1, p3);
    }
}
