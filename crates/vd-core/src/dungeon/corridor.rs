//! Corridor search and carving
//!
//! Each spanning-tree edge is joined by a grid A* over 4-connected moves.
//! The open list is ranked by the step-cost class of the tile (Hallway 1,
//! Empty 5, Room 10) and then by heuristic, so corridors prefer to merge into
//! existing hallways and to skirt rooms. Only Empty tiles on the path become
//! Hallway.

use hashbrown::{HashMap, HashSet};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::PathNotFound;

use super::{Graph, Grid, Position, RoomId, TileType};

/// Distance estimate with 10/14 weighting of axis deltas
///
/// Diagonal-distance form, kept as-is even though moves are orthogonal only.
pub fn heuristic(a: Position, b: Position) -> u32 {
    let dx = a.x.abs_diff(b.x) as u32;
    let dy = a.y.abs_diff(b.y) as u32;
    if dx > dy {
        14 * dy + 10 * (dx - dy)
    } else {
        14 * dx + 10 * (dy - dx)
    }
}

/// Sum of the step costs of the tiles on `path`, as the grid stands now
pub fn path_cost(grid: &Grid, path: &[Position]) -> u32 {
    path.iter().map(|&p| grid.typ(p).step_cost()).sum()
}

/// Search-local bookkeeping for one tile
#[derive(Debug, Clone, Copy)]
struct NodeScratch {
    g_cost: u32,
    h_cost: u32,
    parent: Option<Position>,
}

/// State of a single corridor search
///
/// Costs and parent links live here rather than on the tiles, so every
/// search starts clean.
struct PathSearch<'a> {
    grid: &'a Grid,
    goal: Position,
    /// Insertion-ordered open list
    open: Vec<Position>,
    open_members: HashSet<Position>,
    closed: HashSet<Position>,
    scratch: HashMap<Position, NodeScratch>,
}

impl<'a> PathSearch<'a> {
    fn new(grid: &'a Grid, start: Position, goal: Position) -> Self {
        let mut search = Self {
            grid,
            goal,
            open: Vec::new(),
            open_members: HashSet::new(),
            closed: HashSet::new(),
            scratch: HashMap::new(),
        };
        search.scratch.insert(
            start,
            NodeScratch {
                g_cost: 0,
                h_cost: 0,
                parent: None,
            },
        );
        search.push_open(start);
        search
    }

    fn push_open(&mut self, pos: Position) {
        self.open.push(pos);
        self.open_members.insert(pos);
    }

    fn h_cost(&self, pos: Position) -> u32 {
        self.scratch.get(&pos).map_or(0, |s| s.h_cost)
    }

    /// Index of the open node with the lowest cost class, then lowest `h`
    fn select(&self) -> Option<usize> {
        let mut best = 0;
        let first = *self.open.first()?;
        let mut best_cost = self.grid.typ(first).step_cost();
        let mut best_h = self.h_cost(first);

        for (i, &pos) in self.open.iter().enumerate().skip(1) {
            let cost = self.grid.typ(pos).step_cost();
            let h = self.h_cost(pos);
            if cost < best_cost || (cost == best_cost && h < best_h) {
                best = i;
                best_cost = cost;
                best_h = h;
            }
        }
        Some(best)
    }

    fn run(mut self, start: Position) -> Option<Vec<Position>> {
        while let Some(idx) = self.select() {
            let current = self.open.remove(idx);
            self.open_members.remove(&current);
            self.closed.insert(current);

            if current == self.goal {
                return Some(self.retrace(start));
            }

            let current_g = self.scratch.get(&current).map_or(0, |s| s.g_cost);
            let neighbors: Vec<Position> = self.grid.neighbors(current).collect();
            for neighbor in neighbors {
                if self.closed.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current_g + heuristic(current, neighbor);
                let in_open = self.open_members.contains(&neighbor);
                let cheaper = self
                    .scratch
                    .get(&neighbor)
                    .is_some_and(|s| tentative_g < s.g_cost);

                if cheaper || !in_open {
                    self.scratch.insert(
                        neighbor,
                        NodeScratch {
                            g_cost: tentative_g,
                            h_cost: heuristic(neighbor, self.goal),
                            parent: Some(current),
                        },
                    );
                    if !in_open {
                        self.push_open(neighbor);
                    }
                }
            }
        }
        None
    }

    /// Walk parent links from the goal back to the start
    ///
    /// The returned path excludes the start and ends at the goal.
    fn retrace(&self, start: Position) -> Vec<Position> {
        let mut path = Vec::new();
        let mut node = self.goal;
        while node != start {
            path.push(node);
            match self.scratch.get(&node).and_then(|s| s.parent) {
                Some(parent) => node = parent,
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Find a corridor path from `start` to `goal`
///
/// Returns `None` if the search exhausts the open list.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !grid.in_bounds(start.x, start.y) || !grid.in_bounds(goal.x, goal.y) {
        return None;
    }
    PathSearch::new(grid, start, goal).run(start)
}

/// A carved connection between two rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub from: RoomId,
    pub to: RoomId,
    /// Tiles walked from just after the start seed up to the goal seed
    pub path: Vec<Position>,
    /// Step cost of the path measured before this corridor was carved
    pub cost: u32,
}

/// Outcome of carving every edge of a tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarveReport {
    pub corridors: Vec<Corridor>,
    pub unreachable: Vec<PathNotFound>,
}

/// Turn every Empty tile on `path` into Hallway; returns how many changed
pub fn carve_path(grid: &mut Grid, path: &[Position]) -> usize {
    let mut carved = 0;
    for &pos in path {
        let tile = grid.at_mut(pos);
        if tile.typ == TileType::Empty {
            tile.typ = TileType::Hallway;
            carved += 1;
        }
    }
    carved
}

/// Carve a corridor for each edge of `tree`, in edge order
///
/// Each search sees the hallways carved before it. Edges without a path are
/// skipped and listed in the report.
pub fn carve_corridors(grid: &mut Grid, tree: &Graph) -> CarveReport {
    let mut report = CarveReport::default();

    for edge in &tree.edges {
        let (Some(start), Some(goal)) = (tree.position(edge.node1), tree.position(edge.node2))
        else {
            continue;
        };

        match find_path(grid, start, goal) {
            Some(path) => {
                let cost = path_cost(grid, &path);
                let carved = carve_path(grid, &path);
                debug!(
                    "corridor {} -> {}: {} tiles, cost {}, {} carved",
                    edge.node1,
                    edge.node2,
                    path.len(),
                    cost,
                    carved
                );
                report.corridors.push(Corridor {
                    from: edge.node1,
                    to: edge.node2,
                    path,
                    cost,
                });
            }
            None => {
                let missing = PathNotFound {
                    from: edge.node1,
                    to: edge.node2,
                    start,
                    goal,
                };
                warn!("{missing}; edge left uncarved");
                report.unreachable.push(missing);
            }
        }
    }

    report
}
