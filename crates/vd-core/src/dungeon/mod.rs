//! Dungeon layout
//!
//! Contains the tile grid, room placement, partitioning, the room graph and
//! its spanning tree, corridor carving, and the pipeline that chains them.

mod connectivity;
mod corridor;
mod generation;
mod graph;
mod grid;
mod mst;
mod openings;
mod partition;
mod room;
mod tile;

pub use connectivity::{ConnectivityTracker, is_spanning_tree};
pub use corridor::{
    CarveReport, Corridor, carve_corridors, carve_path, find_path, heuristic, path_cost,
};
pub use generation::{Dungeon, generate, generate_with_config, generate_with_rng};
pub use graph::{Edge, Graph, extract_adjacency};
pub use grid::Grid;
pub use mst::{minimum_spanning_tree, minimum_spanning_tree_from, random_start};
pub use openings::{Openings, door_openings, openings_at};
pub use partition::{nearest_room, partition_grid};
pub use room::{
    CLEARANCE_RADIUS, ROOM_RADIUS, Room, center_bounds, is_valid_room_position, place_room,
    place_room_at, place_rooms,
};
pub use tile::{Position, RoomId, Tile, TileType};
