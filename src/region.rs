//! Bounding regions for camera fitting.

/// Geographic min/max box over a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingRegion {
    /// Smallest region containing every point, `None` for an empty set.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut region = Self {
            min_lat: first.0,
            max_lat: first.0,
            min_lng: first.1,
            max_lng: first.1,
        };
        for &(lat, lng) in rest {
            region.min_lat = region.min_lat.min(lat);
            region.max_lat = region.max_lat.max(lat);
            region.min_lng = region.min_lng.min(lng);
            region.max_lng = region.max_lng.max(lng);
        }
        Some(region)
    }

    /// Region grown by `margin` degrees on every edge.
    pub fn padded(self, margin: f64) -> Self {
        Self {
            min_lat: self.min_lat - margin,
            max_lat: self.max_lat + margin,
            min_lng: self.min_lng - margin,
            max_lng: self.max_lng + margin,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    pub fn contains(&self, point: (f64, f64)) -> bool {
        point.0 >= self.min_lat
            && point.0 <= self.max_lat
            && point.1 >= self.min_lng
            && point.1 <= self.max_lng
    }
}
