//! route-sketch core
//!
//! An ordered waypoint store plus a route builder that turns waypoint
//! snapshots into renderable overlay geometry, either as one straight
//! polyline over every waypoint or as per-pair driving directions
//! resolved by an external provider.

pub mod traits;
pub mod waypoints;
pub mod polyline;
pub mod region;
pub mod builder;
pub mod session;
pub mod osrm;
pub mod osrm_data;
pub mod haversine;
