//! Event glue tying the store, builder, provider and surface together.

use tracing::debug;

use crate::builder::RouteBuilder;
use crate::traits::{DirectionsProvider, MapSurface};
use crate::waypoints::WaypointStore;

/// One planning session over a map surface.
///
/// Owns the waypoint store and translates input events (place, build,
/// clear) into store mutations and builder invocations. Builds always
/// operate on a snapshot taken at invocation time.
#[derive(Debug)]
pub struct PlanningSession<P, S> {
    store: WaypointStore,
    builder: RouteBuilder,
    provider: P,
    surface: S,
}

impl<P, S> PlanningSession<P, S>
where
    P: DirectionsProvider,
    S: MapSurface + Send,
{
    pub fn new(provider: P, surface: S) -> Self {
        Self::with_builder(RouteBuilder::default(), provider, surface)
    }

    pub fn with_builder(builder: RouteBuilder, provider: P, surface: S) -> Self {
        Self {
            store: WaypointStore::new(),
            builder,
            provider,
            surface,
        }
    }

    /// "Place waypoint at C": append to the store and feed back placement.
    pub fn place_waypoint(&mut self, coordinate: (f64, f64)) {
        let waypoint = self.store.append(coordinate);
        debug!(sequence = waypoint.sequence(), ?coordinate, "waypoint placed");
        self.surface.present_placement_feedback(coordinate);
    }

    /// "Build direct route": one straight polyline over all waypoints.
    pub fn build_direct(&mut self) {
        let snapshot = self.store.snapshot();
        self.builder.build_direct(&snapshot, &mut self.surface);
    }

    /// "Build routed path": per-pair driving directions.
    pub fn build_routed(&mut self) {
        let snapshot = self.store.snapshot();
        self.builder
            .build_routed(&snapshot, &self.provider, &mut self.surface);
    }

    /// "Clear all": drop every overlay and every waypoint.
    pub fn clear_all(&mut self) {
        self.surface.clear_overlays();
        self.store.clear();
    }

    pub fn store(&self) -> &WaypointStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
