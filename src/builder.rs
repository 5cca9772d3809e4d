//! Route builder: turns waypoint snapshots into overlay geometry.
//!
//! Two build modes over a snapshot of the waypoint store: a direct build
//! draws one straight polyline through every waypoint; a routed build
//! resolves one directions request per consecutive pair and hands each
//! segment to the surface as it completes. Every build supersedes the
//! previous one by clearing the surface first.

use std::sync::Mutex;

use rayon::prelude::*;
use tracing::{debug, error};

use crate::polyline::Polyline;
use crate::traits::{DirectionsError, DirectionsProvider, MapSurface, TransportMode};
use crate::waypoints::Waypoint;

/// Padding handed to the surface on camera fits, in presentation units.
const DEFAULT_VIEW_PADDING: f64 = 50.0;

/// One directions query between two consecutive waypoints.
///
/// Derived per build invocation, never stored.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRequest {
    pub start: Waypoint,
    pub end: Waypoint,
}

/// Terminal outcome of a segment request. No retry transition exists.
#[derive(Debug)]
pub enum SegmentOutcome {
    Resolved(Polyline),
    Failed(DirectionsError),
}

#[derive(Debug, Clone)]
pub struct RouteBuilder {
    transport: TransportMode,
    view_padding: f64,
}

impl Default for RouteBuilder {
    fn default() -> Self {
        Self {
            transport: TransportMode::Driving,
            view_padding: DEFAULT_VIEW_PADDING,
        }
    }
}

impl RouteBuilder {
    pub fn new(transport: TransportMode) -> Self {
        Self {
            transport,
            ..Self::default()
        }
    }

    /// One straight polyline visiting every waypoint in store order.
    ///
    /// Zero or one waypoints yield a degenerate polyline, not an error.
    pub fn direct_polyline(waypoints: &[Waypoint]) -> Polyline {
        Polyline::new(waypoints.iter().map(|w| w.coordinate()).collect())
    }

    /// Consecutive-pair requests for a routed build: (0,1), (1,2), ...
    pub fn segment_requests(waypoints: &[Waypoint]) -> Vec<SegmentRequest> {
        waypoints
            .windows(2)
            .map(|pair| SegmentRequest {
                start: pair[0],
                end: pair[1],
            })
            .collect()
    }

    /// Direct build: supersede prior overlays with one straight polyline.
    pub fn build_direct<S: MapSurface>(&self, waypoints: &[Waypoint], surface: &mut S) {
        debug!(waypoints = waypoints.len(), "direct build");
        surface.clear_overlays();
        surface.add_overlay(Self::direct_polyline(waypoints));
    }

    /// Routed build: resolve each consecutive pair through the provider.
    ///
    /// The camera fit is computed from the straight-line polyline before
    /// any segment resolves, so the view bounds the waypoint extent even
    /// when the routed geometry strays outside it. Segments run
    /// concurrently and append in completion order; a failed segment is
    /// logged and dropped, and partial results are final.
    pub fn build_routed<P, S>(&self, waypoints: &[Waypoint], provider: &P, surface: &mut S)
    where
        P: DirectionsProvider,
        S: MapSurface + Send,
    {
        surface.clear_overlays();

        if let Some(region) = Self::direct_polyline(waypoints).extent() {
            surface.fit_view(region, self.view_padding);
        }

        let requests = Self::segment_requests(waypoints);
        debug!(segments = requests.len(), "routed build");

        let shared = Mutex::new(surface);
        requests.into_par_iter().for_each(|request| {
            match Self::resolve(provider, &request, self.transport) {
                SegmentOutcome::Resolved(polyline) => {
                    debug!(segment_km = polyline.length_km(), "segment resolved");
                    let mut surface = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                    surface.add_overlay(polyline);
                }
                SegmentOutcome::Failed(err) => error!("Error: {}", err),
            }
        });
    }

    fn resolve<P: DirectionsProvider>(
        provider: &P,
        request: &SegmentRequest,
        mode: TransportMode,
    ) -> SegmentOutcome {
        match provider.route_between(request.start.coordinate(), request.end.coordinate(), mode) {
            Ok(polyline) => SegmentOutcome::Resolved(polyline),
            Err(err) => SegmentOutcome::Failed(err),
        }
    }
}
