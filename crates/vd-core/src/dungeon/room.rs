//! Room placement
//!
//! Rooms are 3x3 blocks seeded by rejection sampling: a uniformly random
//! centre is accepted only if no Room tile lies within two cells of it
//! (a 5x5 neighbourhood). Centres therefore end up at least 4 cells apart
//! on some axis, leaving one or more empty cells between footprints.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::rng::DungeonRng;

use super::{Grid, Position, RoomId, TileType};

/// Half-width of a room footprint
pub const ROOM_RADIUS: usize = 1;

/// Half-width of the neighbourhood that must be free of Room tiles
pub const CLEARANCE_RADIUS: usize = 2;

/// A placed room, identified by its placement order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Seed tile at the middle of the footprint
    pub center: Position,
}

impl Room {
    pub const fn new(id: RoomId, center: Position) -> Self {
        Self { id, center }
    }

    /// Tiles covered by the 3x3 footprint
    pub fn footprint(&self) -> impl Iterator<Item = Position> {
        let Position { x, y } = self.center;
        (x - ROOM_RADIUS..=x + ROOM_RADIUS).flat_map(move |fx| {
            (y - ROOM_RADIUS..=y + ROOM_RADIUS).map(move |fy| Position::new(fx, fy))
        })
    }

    /// Check whether two footprints share a tile
    pub fn overlaps(&self, other: &Room) -> bool {
        self.center.x.abs_diff(other.center.x) <= 2 * ROOM_RADIUS
            && self.center.y.abs_diff(other.center.y) <= 2 * ROOM_RADIUS
    }
}

/// Lowest and highest coordinate a room centre may take on a grid of `size`
///
/// The margin keeps the clearance check inside the grid.
pub fn center_bounds(size: usize) -> Option<(usize, usize)> {
    let lo = CLEARANCE_RADIUS;
    let hi = size.checked_sub(CLEARANCE_RADIUS + 1)?;
    (lo <= hi).then_some((lo, hi))
}

/// Check if a room may be centred at (x, y)
///
/// True when the centre lies within the placement bounds and no tile in the
/// surrounding 5x5 block is already a Room.
pub fn is_valid_room_position(grid: &Grid, x: usize, y: usize) -> bool {
    let Some((lo, hi)) = center_bounds(grid.size()) else {
        return false;
    };
    if x < lo || x > hi || y < lo || y > hi {
        return false;
    }

    for cx in x - CLEARANCE_RADIUS..=x + CLEARANCE_RADIUS {
        for cy in y - CLEARANCE_RADIUS..=y + CLEARANCE_RADIUS {
            if grid.typ(Position::new(cx, cy)) == TileType::Room {
                return false;
            }
        }
    }
    true
}

/// Stamp a room onto the grid without any validity check
///
/// Marks the footprint as Room and tags the centre as the seed of group `id`.
pub fn place_room_at(grid: &mut Grid, id: RoomId, center: Position) -> Room {
    let room = Room::new(id, center);
    for pos in room.footprint() {
        grid.at_mut(pos).typ = TileType::Room;
    }
    let seed = grid.at_mut(center);
    seed.partition_group = id;
    seed.is_room_center = true;
    room
}

/// Place one room by rejection sampling
///
/// Draws x then y uniformly from the placement bounds until a valid centre
/// is found or `max_attempts` draws have been spent.
pub fn place_room(
    grid: &mut Grid,
    id: RoomId,
    rng: &mut DungeonRng,
    max_attempts: u32,
) -> Result<Room, GenerationError> {
    let Some((lo, hi)) = center_bounds(grid.size()) else {
        return Err(GenerationError::RoomPlacementFailed {
            room: id,
            attempts: 0,
        });
    };

    for attempt in 1..=max_attempts {
        let x = rng.range_inclusive(lo, hi);
        let y = rng.range_inclusive(lo, hi);

        if is_valid_room_position(grid, x, y) {
            debug!("room {id} placed at ({x}, {y}) after {attempt} attempt(s)");
            return Ok(place_room_at(grid, id, Position::new(x, y)));
        }
        trace!("room {id}: rejected candidate ({x}, {y})");
    }

    Err(GenerationError::RoomPlacementFailed {
        room: id,
        attempts: max_attempts,
    })
}

/// Place `count` rooms in order; room `i` gets id `i`
pub fn place_rooms(
    grid: &mut Grid,
    count: usize,
    rng: &mut DungeonRng,
    max_attempts: u32,
) -> Result<Vec<Room>, GenerationError> {
    let mut rooms = Vec::with_capacity(count);
    for id in 0..count {
        rooms.push(place_room(grid, id, rng, max_attempts)?);
    }
    Ok(rooms)
}
