//! Room equivalence classes for spanning-tree checks

use super::{Graph, RoomId};

/// Tracks room connectivity using equivalence classes
#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    /// Each room's equivalence class (rooms in same class are connected)
    classes: Vec<usize>,
}

impl ConnectivityTracker {
    /// Create a new tracker for the given number of rooms
    pub fn new(num_rooms: usize) -> Self {
        // Initially, each room is its own equivalence class
        Self {
            classes: (0..num_rooms).collect(),
        }
    }

    /// Check if two rooms are connected (in same equivalence class)
    pub fn are_connected(&self, a: RoomId, b: RoomId) -> bool {
        if a >= self.classes.len() || b >= self.classes.len() {
            return false;
        }
        self.classes[a] == self.classes[b]
    }

    /// Merge the classes of two rooms
    ///
    /// Returns false when they were already connected (the link closes a
    /// cycle) or either id is out of range.
    pub fn merge(&mut self, a: RoomId, b: RoomId) -> bool {
        if a >= self.classes.len() || b >= self.classes.len() || self.are_connected(a, b) {
            return false;
        }

        let old_class = self.classes[b];
        let new_class = self.classes[a];

        for eq in &mut self.classes {
            if *eq == old_class {
                *eq = new_class;
            }
        }
        true
    }

    /// Check if all rooms are connected
    pub fn all_connected(&self) -> bool {
        match self.classes.first() {
            None => true,
            Some(&first) => self.classes.iter().all(|&c| c == first),
        }
    }
}

/// Check that a graph's edges form a spanning tree over its nodes
///
/// True when there are exactly `nodes - 1` edges, none closes a cycle, and
/// every node ends up in one class.
pub fn is_spanning_tree(graph: &Graph) -> bool {
    let n = graph.node_count();
    if graph.edge_count() != n.saturating_sub(1) {
        return false;
    }

    let mut tracker = ConnectivityTracker::new(n);
    for edge in &graph.edges {
        if !tracker.merge(edge.node1, edge.node2) {
            return false;
        }
    }
    tracker.all_connected()
}
