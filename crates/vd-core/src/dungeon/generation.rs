//! Dungeon generation pipeline
//!
//! Grid -> room placement -> partition -> adjacency graph -> spanning tree
//! -> corridor carving. Each run builds a fresh grid and graph.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::{GenerationError, PathNotFound};
use crate::rng::DungeonRng;

use super::{
    Corridor, Edge, Graph, Grid, Room, TileType, carve_corridors, extract_adjacency,
    minimum_spanning_tree, partition_grid, place_rooms,
};

/// Finished layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    /// Seed the layout was drawn with
    pub seed: u64,
    pub grid: Grid,
    pub rooms: Vec<Room>,
    /// Every adjacency edge; tree members have `selected` set
    pub graph: Graph,
    /// Corridors in tree-edge order
    pub corridors: Vec<Corridor>,
    /// Tree edges that could not be carved
    pub unreachable: Vec<PathNotFound>,
}

impl Dungeon {
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Spanning-tree edges
    pub fn mst_edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.selected_edges()
    }

    /// The spanning tree as its own graph
    pub fn mst(&self) -> Graph {
        self.graph.selected_subgraph()
    }

    /// Number of Hallway tiles
    pub fn hallway_count(&self) -> usize {
        self.grid.count(TileType::Hallway)
    }
}

/// Generate a dungeon with `room_count` rooms
///
/// Without a seed one is drawn from entropy; it is recorded in the result.
pub fn generate(room_count: usize, seed: Option<u64>) -> Result<Dungeon, GenerationError> {
    let mut config = GeneratorConfig::new(room_count);
    config.seed = seed;
    generate_with_config(&config)
}

/// Generate a dungeon from a full configuration
pub fn generate_with_config(config: &GeneratorConfig) -> Result<Dungeon, GenerationError> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    generate_with_rng(config, &mut rng)
}

/// Generate a dungeon drawing from an explicit RNG
///
/// Randomness is consumed by room placement and by the choice of the
/// spanning tree's starting room, in that order.
pub fn generate_with_rng(
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
) -> Result<Dungeon, GenerationError> {
    config.validate()?;

    let mut grid = Grid::new(config.grid_size());
    let rooms = place_rooms(
        &mut grid,
        config.room_count,
        rng,
        config.max_placement_attempts,
    )?;

    partition_grid(&mut grid, &rooms);

    let mut graph = extract_adjacency(&grid, &rooms);
    let tree = minimum_spanning_tree(&mut graph, rng)?;

    let report = carve_corridors(&mut grid, &tree);

    let dungeon = Dungeon {
        seed: rng.seed(),
        grid,
        rooms,
        graph,
        corridors: report.corridors,
        unreachable: report.unreachable,
    };

    info!(
        "generated {} rooms on a {}x{} grid: {} adjacency edges, {} corridors, {} hallway tiles",
        dungeon.room_count(),
        config.grid_size(),
        config.grid_size(),
        dungeon.graph.edge_count(),
        dungeon.corridors.len(),
        dungeon.hallway_count()
    );

    Ok(dungeon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::is_spanning_tree;

    #[test]
    fn test_single_room() {
        let dungeon = generate(1, Some(42)).unwrap();
        assert_eq!(dungeon.grid.size(), 10);
        assert_eq!(dungeon.room_count(), 1);
        assert_eq!(dungeon.grid.room_centers().count(), 1);
        assert_eq!(dungeon.graph.edge_count(), 0);
        assert_eq!(dungeon.mst_edges().count(), 0);
        assert!(dungeon.corridors.is_empty());
        assert_eq!(dungeon.hallway_count(), 0);
        assert!(dungeon.grid.iter().all(|t| t.partition_group == 0));
    }

    #[test]
    fn test_zero_rooms_rejected() {
        assert!(matches!(
            generate(0, Some(1)),
            Err(GenerationError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_seed_is_recorded() {
        let dungeon = generate(3, Some(777)).unwrap();
        assert_eq!(dungeon.seed, 777);

        let unseeded = generate(3, None).unwrap();
        let replay = generate(3, Some(unseeded.seed)).unwrap();
        assert_eq!(unseeded, replay);
    }

    #[test]
    fn test_five_rooms_structure() {
        let dungeon = generate(5, Some(2024)).unwrap();
        assert_eq!(dungeon.grid.size(), 30);
        assert_eq!(dungeon.grid.count(TileType::Room), 45);
        assert_eq!(dungeon.mst_edges().count(), 4);
        assert!(is_spanning_tree(&dungeon.mst()));
        assert_eq!(dungeon.corridors.len(), 4);
        assert!(dungeon.unreachable.is_empty());
        assert!(dungeon.hallway_count() > 0);
    }
}
