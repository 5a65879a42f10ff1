//! Door openings for presentation layers
//!
//! A renderer placing room and hallway pieces needs to know which sides of
//! each piece connect to something. This is a read-only view of the grid.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{Grid, Position, TileType};

bitflags! {
    /// Open sides of a room or hallway piece
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Openings: u8 {
        const X_NEG = 0x01;
        const X_POS = 0x02;
        const Y_NEG = 0x04;
        const Y_POS = 0x08;
    }
}

// Manual serde impl for Openings
impl Serialize for Openings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Openings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Openings::from_bits_truncate(bits))
    }
}

const DIRECTIONS: [(Openings, isize, isize); 4] = [
    (Openings::X_NEG, -1, 0),
    (Openings::X_POS, 1, 0),
    (Openings::Y_NEG, 0, -1),
    (Openings::Y_POS, 0, 1),
];

/// Tile type `distance` steps from `pos` along (dx, dy), if inside the grid
fn type_at_offset(
    grid: &Grid,
    pos: Position,
    dx: isize,
    dy: isize,
    distance: usize,
) -> Option<TileType> {
    let x = pos.x.checked_add_signed(dx * distance as isize)?;
    let y = pos.y.checked_add_signed(dy * distance as isize)?;
    grid.tile(x, y).map(|t| t.typ)
}

/// Open sides of the piece at `pos`
///
/// A room centre opens towards a Hallway tile two steps away, just outside
/// its 3x3 footprint. A hallway opens towards any Hallway or Room neighbour.
/// Every other tile has no openings.
pub fn openings_at(grid: &Grid, pos: Position) -> Openings {
    let Some(tile) = grid.tile(pos.x, pos.y) else {
        return Openings::empty();
    };

    let mut open = Openings::empty();
    if tile.is_room_center {
        for (flag, dx, dy) in DIRECTIONS {
            if type_at_offset(grid, pos, dx, dy, 2) == Some(TileType::Hallway) {
                open |= flag;
            }
        }
    } else if tile.typ == TileType::Hallway {
        for (flag, dx, dy) in DIRECTIONS {
            if matches!(
                type_at_offset(grid, pos, dx, dy, 1),
                Some(TileType::Hallway | TileType::Room)
            ) {
                open |= flag;
            }
        }
    }
    open
}

/// Openings of every room centre and hallway tile, x outer, y inner
pub fn door_openings(grid: &Grid) -> Vec<(Position, Openings)> {
    grid.iter()
        .filter(|t| t.is_room_center || t.typ == TileType::Hallway)
        .map(|t| (t.position, openings_at(grid, t.position)))
        .collect()
}
