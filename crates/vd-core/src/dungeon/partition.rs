//! Grid-sampled Voronoi partition
//!
//! Every tile is labelled with the id of the nearest room seed. Distances are
//! compared squared, so ties are exact and go to the first seed in placement
//! order.

use log::debug;

use super::{Grid, Position, Room, RoomId};

/// Nearest room to `pos`; the earliest room wins ties
pub fn nearest_room(rooms: &[Room], pos: Position) -> Option<RoomId> {
    let mut best: Option<(u64, RoomId)> = None;
    for room in rooms {
        let dist = pos.distance_squared(&room.center);
        match best {
            Some((best_dist, _)) if dist >= best_dist => {}
            _ => best = Some((dist, room.id)),
        }
    }
    best.map(|(_, id)| id)
}

/// Assign `partition_group` on every tile
///
/// Brute force over all seeds for each tile. Leaves the grid untouched when
/// there are no rooms.
pub fn partition_grid(grid: &mut Grid, rooms: &[Room]) {
    if rooms.is_empty() {
        return;
    }

    let size = grid.size();
    for x in 0..size {
        for y in 0..size {
            let pos = Position::new(x, y);
            if let Some(group) = nearest_room(rooms, pos) {
                grid.at_mut(pos).partition_group = group;
            }
        }
    }
    debug!("partitioned {}x{} grid among {} rooms", size, size, rooms.len());
}
