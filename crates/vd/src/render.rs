//! ASCII previews of a generated layout
//!
//! Rows are printed top to bottom by `y`, columns left to right by `x`.

use std::fmt::Write;

use vd_core::dungeon::{Graph, Grid};

/// Tile-type view: `.` empty, `#` room, `@` room centre, `+` hallway
pub fn render_types(grid: &Grid) -> String {
    render_with(grid, |grid, x, y| {
        grid.tile(x, y).map_or(' ', |t| t.symbol())
    })
}

/// Partition view: each tile shows its group id in base 36
pub fn render_partition(grid: &Grid) -> String {
    render_with(grid, |grid, x, y| {
        grid.tile(x, y).map_or(' ', |t| group_symbol(t.partition_group))
    })
}

/// Tile and partition views side by side
pub fn render_both(grid: &Grid) -> String {
    let types = render_types(grid);
    let groups = render_partition(grid);
    let mut out = String::with_capacity(types.len() + groups.len() + 3 * grid.size());
    for (left, right) in types.lines().zip(groups.lines()) {
        out.push_str(left);
        out.push_str("   ");
        out.push_str(right);
        out.push('\n');
    }
    out
}

/// Every adjacency edge with its weight; tree edges are starred
pub fn render_edges(graph: &Graph) -> String {
    let mut out = String::new();
    for edge in &graph.edges {
        let marker = if edge.selected { " *" } else { "" };
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:>3} - {:<3} {:>8.3}{}",
            edge.node1, edge.node2, edge.weight, marker
        );
    }
    out
}

fn group_symbol(group: usize) -> char {
    char::from_digit((group % 36) as u32, 36).unwrap_or('?')
}

fn render_with(grid: &Grid, cell: impl Fn(&Grid, usize, usize) -> char) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for y in 0..size {
        for x in 0..size {
            out.push(cell(grid, x, y));
        }
        out.push('\n');
    }
    out
}
