//! Square tile grid shared by every pipeline stage

use serde::{Deserialize, Serialize};

use super::{Position, RoomId, Tile, TileType};

/// Create the tile columns for a grid of the given side
fn default_tiles(size: usize) -> Vec<Vec<Tile>> {
    (0..size)
        .map(|x| (0..size).map(|y| Tile::empty(Position::new(x, y))).collect())
        .collect()
}

/// Dense square array of tiles, indexed `tiles[x][y]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// Create a grid of empty tiles
    pub fn new(size: usize) -> Self {
        Self {
            size,
            tiles: default_tiles(size),
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.tiles.get(x).and_then(|col| col.get(y))
    }

    pub fn tile_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(x).and_then(|col| col.get_mut(y))
    }

    /// Tile at a position known to be inside the grid
    ///
    /// Panics when out of bounds, like slice indexing.
    pub fn at(&self, pos: Position) -> &Tile {
        &self.tiles[pos.x][pos.y]
    }

    pub fn at_mut(&mut self, pos: Position) -> &mut Tile {
        &mut self.tiles[pos.x][pos.y]
    }

    /// Type of the tile at `pos`
    pub fn typ(&self, pos: Position) -> TileType {
        self.at(pos).typ
    }

    /// 4-connected neighbours in x-1, x+1, y-1, y+1 order
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let Position { x, y } = pos;
        let candidates = [
            x.checked_sub(1).map(|nx| Position::new(nx, y)),
            Some(Position::new(x + 1, y)),
            y.checked_sub(1).map(|ny| Position::new(x, ny)),
            Some(Position::new(x, y + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(move |p| self.in_bounds(p.x, p.y))
    }

    /// All tiles, x outer, y inner
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flat_map(|col| col.iter())
    }

    /// Number of tiles of the given type
    pub fn count(&self, typ: TileType) -> usize {
        self.iter().filter(|t| t.typ == typ).count()
    }

    /// Positions of all tiles of the given type, x outer, y inner
    pub fn positions_of(&self, typ: TileType) -> Vec<Position> {
        self.iter()
            .filter(|t| t.typ == typ)
            .map(|t| t.position)
            .collect()
    }

    /// Room-centre tiles in raster order
    pub fn room_centers(&self) -> impl Iterator<Item = &Tile> {
        self.iter().filter(|t| t.is_room_center)
    }

    /// Partition group of the tile at `pos`
    pub fn group(&self, pos: Position) -> RoomId {
        self.at(pos).partition_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(10);
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.iter().count(), 100);
        assert_eq!(grid.count(TileType::Empty), 100);
        assert_eq!(grid.room_centers().count(), 0);
    }

    #[test]
    fn test_positions_match_indices() {
        let grid = Grid::new(6);
        for x in 0..6 {
            for y in 0..6 {
                assert_eq!(grid.tile(x, y).unwrap().position, Position::new(x, y));
            }
        }
        assert!(grid.tile(6, 0).is_none());
        assert!(grid.tile(0, 6).is_none());
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let grid = Grid::new(5);

        let inner: Vec<_> = grid.neighbors(Position::new(2, 2)).collect();
        assert_eq!(
            inner,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3),
            ]
        );

        let corner: Vec<_> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        let far: Vec<_> = grid.neighbors(Position::new(4, 4)).collect();
        assert_eq!(far, vec![Position::new(3, 4), Position::new(4, 3)]);
    }

    #[test]
    fn test_mutation_through_at_mut() {
        let mut grid = Grid::new(4);
        grid.at_mut(Position::new(1, 2)).typ = TileType::Hallway;
        assert_eq!(grid.typ(Position::new(1, 2)), TileType::Hallway);
        assert_eq!(grid.positions_of(TileType::Hallway), vec![Position::new(1, 2)]);
    }
}
