//! Fixed five-room layout driven stage by stage
//!
//! Rooms are placed at known centres so every later stage is deterministic
//! without depending on the RNG stream.

use vd_core::dungeon::{
    Grid, Openings, Position, Room, TileType, carve_corridors, extract_adjacency,
    is_spanning_tree, minimum_spanning_tree_from, openings_at, partition_grid, path_cost,
    place_room_at,
};

const CENTERS: [(usize, usize); 5] = [(4, 4), (15, 5), (25, 4), (6, 20), (22, 24)];

const PARTITION: [&str; 30] = [
    "000000000011111111112222222222",
    "000000000011111111112222222222",
    "000000000011111111112222222222",
    "000000000011111111112222222222",
    "000000000011111111112222222222",
    "000000000011111111111222222222",
    "000000000011111111111222222222",
    "000000000011111111111222222222",
    "000000000011111111111222222222",
    "000000000011111111111222222222",
    "000000000011111111111222222222",
    "000000000111111111111222222222",
    "000000333311111111111222222222",
    "333333333333111111111222222222",
    "333333333333311111114444222222",
    "333333333333333111444444444444",
    "333333333333333344444444444444",
    "333333333333333344444444444444",
    "333333333333333344444444444444",
    "333333333333333444444444444444",
    "333333333333333444444444444444",
    "333333333333333444444444444444",
    "333333333333333444444444444444",
    "333333333333334444444444444444",
    "333333333333334444444444444444",
    "333333333333334444444444444444",
    "333333333333334444444444444444",
    "333333333333344444444444444444",
    "333333333333344444444444444444",
    "333333333333344444444444444444",
];

const CARVED: [&str; 30] = [
    "..............................",
    "..............................",
    "..............................",
    "...###..................###...",
    "...#@#........###+++++++#@#...",
    "...###++++++++#@#+......###...",
    "....+++.......###.............",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    "......+.......................",
    ".....###......................",
    ".....#@#......................",
    ".....###......................",
    "......+++.....................",
    "........++...........###......",
    ".........++++++++++++#@#......",
    ".....................###......",
    "..............................",
    "..............................",
    "..............................",
    "..............................",
];

fn place_fixed_rooms() -> (Grid, Vec<Room>) {
    let mut grid = Grid::new(30);
    let rooms = CENTERS
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| place_room_at(&mut grid, id, Position::new(x, y)))
        .collect();
    (grid, rooms)
}

fn rows(grid: &Grid, cell: impl Fn(&Grid, usize, usize) -> char) -> Vec<String> {
    (0..grid.size())
        .map(|y| (0..grid.size()).map(|x| cell(grid, x, y)).collect())
        .collect()
}

#[test]
fn test_fixed_layout_partition() {
    let (mut grid, rooms) = place_fixed_rooms();
    partition_grid(&mut grid, &rooms);

    let groups = rows(&grid, |g, x, y| {
        char::from_digit(g.group(Position::new(x, y)) as u32, 10).unwrap()
    });
    assert_eq!(groups, PARTITION);
}

#[test]
fn test_fixed_layout_graph_and_tree() {
    let (mut grid, rooms) = place_fixed_rooms();
    partition_grid(&mut grid, &rooms);
    let mut graph = extract_adjacency(&grid, &rooms);

    let pairs: Vec<_> = graph.edges.iter().map(|e| (e.node1, e.node2)).collect();
    assert_eq!(
        pairs,
        vec![(3, 0), (1, 0), (3, 1), (4, 3), (4, 1), (2, 1), (4, 2)]
    );
    for edge in &graph.edges {
        let expected = rooms[edge.node1].center.distance(&rooms[edge.node2].center);
        assert!((edge.weight - expected).abs() < 1e-9);
    }

    let tree = minimum_spanning_tree_from(&mut graph, 0).unwrap();
    assert!(is_spanning_tree(&tree));
    let tree_pairs: Vec<_> = tree.edges.iter().map(|e| (e.node1, e.node2)).collect();
    assert_eq!(tree_pairs, vec![(3, 0), (1, 0), (4, 3), (2, 1)]);
}

#[test]
fn test_fixed_layout_corridors() {
    let (mut grid, rooms) = place_fixed_rooms();
    partition_grid(&mut grid, &rooms);
    let mut graph = extract_adjacency(&grid, &rooms);
    let tree = minimum_spanning_tree_from(&mut graph, 0).unwrap();

    let report = carve_corridors(&mut grid, &tree);
    assert!(report.unreachable.is_empty());

    let summary: Vec<_> = report
        .corridors
        .iter()
        .map(|c| (c.from, c.to, c.path.len(), c.cost))
        .collect();
    assert_eq!(
        summary,
        vec![(3, 0, 18, 105), (1, 0, 14, 73), (4, 3, 20, 115), (2, 1, 11, 70)]
    );

    let carved = rows(&grid, |g, x, y| g.tile(x, y).map_or(' ', |t| t.symbol()));
    assert_eq!(carved, CARVED);
    assert_eq!(grid.count(TileType::Room), 45);
}

#[test]
fn test_fixed_layout_costs_replay() {
    let (mut grid, rooms) = place_fixed_rooms();
    partition_grid(&mut grid, &rooms);
    let mut graph = extract_adjacency(&grid, &rooms);
    let tree = minimum_spanning_tree_from(&mut graph, 0).unwrap();
    let pristine = grid.clone();
    let report = carve_corridors(&mut grid, &tree);

    // Re-walk the corridors in order on the uncarved grid
    let mut replay = pristine;
    for corridor in &report.corridors {
        assert_eq!(path_cost(&replay, &corridor.path), corridor.cost);
        for &pos in &corridor.path {
            if replay.typ(pos) == TileType::Empty {
                replay.at_mut(pos).typ = TileType::Hallway;
            }
        }
    }
    assert_eq!(replay, grid);
}

#[test]
fn test_fixed_layout_openings() {
    let (mut grid, rooms) = place_fixed_rooms();
    partition_grid(&mut grid, &rooms);
    let mut graph = extract_adjacency(&grid, &rooms);
    let tree = minimum_spanning_tree_from(&mut graph, 0).unwrap();
    carve_corridors(&mut grid, &tree);

    assert_eq!(openings_at(&grid, Position::new(4, 4)), Openings::Y_POS);
    assert_eq!(
        openings_at(&grid, Position::new(15, 5)),
        Openings::X_NEG | Openings::X_POS
    );
    assert_eq!(
        openings_at(&grid, Position::new(6, 20)),
        Openings::Y_NEG | Openings::Y_POS
    );
}

#[test]
fn test_equidistant_tiles_go_to_first_room() {
    let mut grid = Grid::new(10);
    let a = place_room_at(&mut grid, 0, Position::new(2, 2));
    let b = place_room_at(&mut grid, 1, Position::new(6, 2));
    partition_grid(&mut grid, &[a, b]);

    // Column x = 4 is equally far from both seeds
    for y in 0..10 {
        assert_eq!(grid.group(Position::new(4, y)), 0);
        assert_eq!(grid.group(Position::new(5, y)), 1);
    }
}
