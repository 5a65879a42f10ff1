//! Grid cell types

use core::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Index of a room, equal to its placement order and its partition group
pub type RoomId = usize;

/// Integer grid coordinate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, exact in integers
    pub fn distance_squared(&self, other: &Position) -> u64 {
        let dx = self.x.abs_diff(other.x) as u64;
        let dy = self.y.abs_diff(other.y) as u64;
        dx * dx + dy * dy
    }

    /// Euclidean distance
    pub fn distance(&self, other: &Position) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tile type
///
/// Transitions are one-way: Empty becomes Room at placement or Hallway
/// during carving; Room and Hallway never change afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Empty = 0,
    Room = 1,
    Hallway = 2,
}

impl TileType {
    /// Step cost used by the corridor search when entering a tile of this type
    pub const fn step_cost(&self) -> u32 {
        match self {
            TileType::Empty => 5,
            TileType::Room => 10,
            TileType::Hallway => 1,
        }
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Empty => '.',
            TileType::Room => '#',
            TileType::Hallway => '+',
        }
    }
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Fixed at creation
    pub position: Position,
    pub typ: TileType,
    /// Nearest room seed
    pub partition_group: RoomId,
    /// Set only on the seed tile of a room
    pub is_room_center: bool,
}

impl Tile {
    /// Create an empty tile at the given position
    pub const fn empty(position: Position) -> Self {
        Self {
            position,
            typ: TileType::Empty,
            partition_group: 0,
            is_room_center: false,
        }
    }

    /// Display character, marking room centres with '@'
    pub const fn symbol(&self) -> char {
        if self.is_room_center {
            '@'
        } else {
            self.typ.symbol()
        }
    }
}
