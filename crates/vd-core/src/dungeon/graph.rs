//! Room adjacency graph
//!
//! Two rooms are adjacent when their partition regions touch across a
//! horizontal or vertical tile boundary. The result approximates the
//! Delaunay dual of the partition without any computational geometry.

use hashbrown::HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{Grid, Position, Room, RoomId};

/// Undirected link between two room seeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub node1: RoomId,
    pub node2: RoomId,
    /// Euclidean distance between the two seeds
    pub weight: f64,
    /// Membership in the spanning tree
    pub selected: bool,
}

impl Edge {
    pub fn new(node1: RoomId, node2: RoomId, weight: f64) -> Self {
        Self {
            node1,
            node2,
            weight,
            selected: false,
        }
    }

    /// Check if this edge touches the given room
    pub fn connects(&self, room: RoomId) -> bool {
        self.node1 == room || self.node2 == room
    }

    /// Unordered endpoint pair, smaller id first
    pub fn key(&self) -> (RoomId, RoomId) {
        (self.node1.min(self.node2), self.node1.max(self.node2))
    }
}

/// Rooms and the edges between them
///
/// `nodes[i]` is the room with id `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Room>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Room>) -> Self {
        Self {
            nodes,
            edges: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Seed position of a room
    pub fn position(&self, room: RoomId) -> Option<Position> {
        self.nodes.get(room).map(|r| r.center)
    }

    /// Check whether an edge between the two rooms exists, in either direction
    pub fn has_edge(&self, a: RoomId, b: RoomId) -> bool {
        let key = (a.min(b), a.max(b));
        self.edges.iter().any(|e| e.key() == key)
    }

    /// Edges currently flagged as spanning-tree members
    pub fn selected_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.selected)
    }

    /// New graph over the same rooms holding only the selected edges
    pub fn selected_subgraph(&self) -> Graph {
        Graph {
            nodes: self.nodes.clone(),
            edges: self.selected_edges().copied().collect(),
        }
    }

    /// Sum of edge weights
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

/// Build the adjacency graph of a partitioned grid
///
/// Scans tiles with x and y from 1 upward, comparing each tile with its west
/// (x-1) then north (y-1) neighbour. The first boundary seen between two
/// groups creates the edge, oriented from the current tile's group to the
/// neighbour's group.
pub fn extract_adjacency(grid: &Grid, rooms: &[Room]) -> Graph {
    let mut graph = Graph::new(rooms.to_vec());
    let mut seen: HashSet<(RoomId, RoomId)> = HashSet::new();
    let size = grid.size();

    for x in 1..size {
        for y in 1..size {
            let current = grid.group(Position::new(x, y));
            let neighbors = [Position::new(x - 1, y), Position::new(x, y - 1)];

            for other_pos in neighbors {
                let other = grid.group(other_pos);
                if other == current {
                    continue;
                }
                let key = (current.min(other), current.max(other));
                if !seen.insert(key) {
                    continue;
                }
                let (Some(a), Some(b)) = (graph.position(current), graph.position(other)) else {
                    continue;
                };
                graph.edges.push(Edge::new(current, other, a.distance(&b)));
            }
        }
    }

    debug!(
        "adjacency graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
