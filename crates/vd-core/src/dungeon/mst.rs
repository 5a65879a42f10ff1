//! Minimum spanning tree over the adjacency graph (randomized Prim)

use log::debug;

use crate::error::GenerationError;
use crate::rng::DungeonRng;

use super::{Graph, RoomId};

/// Pick the tree's starting room
///
/// Draws a uniformly random edge, then a coin flip: heads starts from
/// `node1`, tails from `node2`. Returns `None` for an edgeless graph without
/// consuming any randomness.
pub fn random_start(graph: &Graph, rng: &mut DungeonRng) -> Option<RoomId> {
    let idx = rng.choose_index(graph.edge_count())?;
    let edge = &graph.edges[idx];
    Some(if rng.coin_flip() {
        edge.node1
    } else {
        edge.node2
    })
}

/// Grow a spanning tree from `start`, marking its edges `selected`
///
/// Each step takes the lightest unselected edge with exactly one endpoint in
/// the tree; equal weights go to the earlier edge. Returns the selected
/// subgraph.
pub fn minimum_spanning_tree_from(
    graph: &mut Graph,
    start: RoomId,
) -> Result<Graph, GenerationError> {
    let n = graph.node_count();
    if n == 0 {
        return Ok(graph.selected_subgraph());
    }
    if start >= n {
        return Err(GenerationError::DisconnectedGraph {
            reached: 0,
            total: n,
        });
    }

    let mut in_tree = vec![false; n];
    in_tree[start] = true;
    let mut num_in_tree = 1;

    while num_in_tree < n {
        let mut best: Option<usize> = None;
        let mut best_weight = f64::INFINITY;

        for (idx, edge) in graph.edges.iter().enumerate() {
            if edge.selected {
                continue;
            }
            let (Some(&a), Some(&b)) = (in_tree.get(edge.node1), in_tree.get(edge.node2)) else {
                continue;
            };
            if a != b && edge.weight < best_weight {
                best_weight = edge.weight;
                best = Some(idx);
            }
        }

        let Some(idx) = best else {
            return Err(GenerationError::DisconnectedGraph {
                reached: num_in_tree,
                total: n,
            });
        };

        let edge = &mut graph.edges[idx];
        edge.selected = true;
        let added = if in_tree[edge.node1] {
            edge.node2
        } else {
            edge.node1
        };
        in_tree[added] = true;
        num_in_tree += 1;
    }

    let tree = graph.selected_subgraph();
    debug!(
        "spanning tree from room {start}: {} edges, total weight {:.3}",
        tree.edge_count(),
        tree.total_weight()
    );
    Ok(tree)
}

/// Randomized Prim's algorithm
///
/// A graph with a single room yields an empty tree.
pub fn minimum_spanning_tree(
    graph: &mut Graph,
    rng: &mut DungeonRng,
) -> Result<Graph, GenerationError> {
    if graph.node_count() <= 1 {
        return Ok(graph.selected_subgraph());
    }
    match random_start(graph, rng) {
        Some(start) => minimum_spanning_tree_from(graph, start),
        None => Err(GenerationError::DisconnectedGraph {
            reached: 0,
            total: graph.node_count(),
        }),
    }
}
