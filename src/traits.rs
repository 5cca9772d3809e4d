//! Core seams between the planning core and its collaborators.
//!
//! These are intentionally minimal. Concrete apps plug in their own
//! directions backend and rendering surface.

use std::fmt;

use crate::polyline::Polyline;
use crate::region::BoundingRegion;

/// Routing profile requested from the directions backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Driving,
    Cycling,
    Walking,
}

impl TransportMode {
    /// OSRM profile name for this mode.
    pub fn profile(self) -> &'static str {
        match self {
            TransportMode::Driving => "car",
            TransportMode::Cycling => "bike",
            TransportMode::Walking => "foot",
        }
    }
}

/// Failure of a single directions lookup.
///
/// Always local to one segment: logged by the caller and dropped, never
/// aggregated into a build-level failure.
#[derive(Debug)]
pub enum DirectionsError {
    /// The provider answered but produced no usable route.
    NoRoute,
    Http(reqwest::Error),
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::NoRoute => write!(f, "provider returned no route"),
            DirectionsError::Http(err) => write!(f, "request failed: {}", err),
        }
    }
}

impl std::error::Error for DirectionsError {}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err)
    }
}

/// Resolves a routed path between two coordinates.
///
/// One call per segment request. `Sync` so a build can resolve several
/// segments concurrently against a shared provider.
pub trait DirectionsProvider: Sync {
    fn route_between(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        mode: TransportMode,
    ) -> Result<Polyline, DirectionsError>;
}

/// Rendering surface the builder hands overlay geometry to.
///
/// Implementations own all presentation concerns; the core only pushes
/// geometry and view-fit requests through this seam.
pub trait MapSurface {
    fn clear_overlays(&mut self);
    fn add_overlay(&mut self, polyline: Polyline);
    fn fit_view(&mut self, region: BoundingRegion, padding: f64);

    /// Called once per placed waypoint, drives any entrance animation.
    fn present_placement_feedback(&mut self, coordinate: (f64, f64));
}
