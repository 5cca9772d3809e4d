//! Ordered store of user-placed waypoints.

/// A single user-placed geographic point.
///
/// Immutable once created; identity is its position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    coordinate: (f64, f64),
    sequence: usize,
}

impl Waypoint {
    /// Coordinate as a (latitude, longitude) pair.
    pub fn coordinate(&self) -> (f64, f64) {
        self.coordinate
    }

    /// Zero-based placement order within the store.
    pub fn sequence(&self) -> usize {
        self.sequence
    }
}

/// Insertion-ordered collection of waypoints.
///
/// Duplicates are allowed and no upper bound is enforced. Waypoints are
/// only ever removed wholesale via [`clear`](WaypointStore::clear);
/// there is no per-waypoint removal.
#[derive(Debug, Default)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a waypoint at the end of the sequence and returns it.
    pub fn append(&mut self, coordinate: (f64, f64)) -> Waypoint {
        let waypoint = Waypoint {
            coordinate,
            sequence: self.waypoints.len(),
        };
        self.waypoints.push(waypoint);
        waypoint
    }

    /// Removes all waypoints. Idempotent.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Owned copy of the current sequence.
    ///
    /// Later mutations of the store do not affect a taken snapshot.
    pub fn snapshot(&self) -> Vec<Waypoint> {
        self.waypoints.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = WaypointStore::new();
        store.append((0.0, 0.0));
        store.append((1.0, 1.0));
        store.append((2.0, 2.0));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 3);
        let coords: Vec<_> = snapshot.iter().map(|w| w.coordinate()).collect();
        assert_eq!(coords, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let sequences: Vec<_> = snapshot.iter().map(|w| w.sequence()).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut store = WaypointStore::new();
        store.append((36.1, -115.1));
        store.append((36.1, -115.1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_and_is_idempotent() {
        let mut store = WaypointStore::new();
        store.append((1.0, 2.0));
        store.clear();
        assert!(store.snapshot().is_empty());
        store.clear();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let mut store = WaypointStore::new();
        store.append((1.0, 2.0));
        let snapshot = store.snapshot();
        store.append((3.0, 4.0));
        store.clear();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].coordinate(), (1.0, 2.0));
    }
}
