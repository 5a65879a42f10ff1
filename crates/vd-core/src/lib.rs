//! vd-core: dungeon layout on a uniform grid
//!
//! Places room seeds, partitions the grid among them, links neighbouring
//! rooms into a graph, reduces it to a minimum spanning tree, and carves
//! corridors along cost-weighted shortest paths.
//!
//! The output is plain data ([`dungeon::Dungeon`]); rendering and scene
//! building are left to callers.

pub mod config;
pub mod dungeon;
pub mod error;

mod rng;

pub use config::GeneratorConfig;
pub use dungeon::{Dungeon, generate, generate_with_config};
pub use error::{ConfigError, GenerationError, PathNotFound};
pub use rng::DungeonRng;
