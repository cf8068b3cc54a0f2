//! Initial placement.
//!
//! Nodes are spread over a square-ish grid of `ceil(sqrt(n))` columns with a
//! pitch of `2 * grid_size + padding`, so no two nodes start close enough
//! for the short-range repulsion to dominate the first rounds.

use crate::graph::{LayoutGraph, Point};

use super::options::LayoutOptions;

/// Number of columns used for `node_count` nodes.
pub fn column_count(node_count: usize) -> usize {
    (node_count as f64).sqrt().ceil() as usize
}

/// Starting position of the node at `index`.
pub fn grid_position(index: usize, columns: usize, options: &LayoutOptions) -> Point {
    let pitch = options.initial_pitch();
    let row = index / columns;
    let col = index % columns;
    Point::new(col as f64 * pitch, row as f64 * pitch)
}

/// Place every node of `graph` on the starting grid, in slot order.
pub fn place_on_grid(graph: &mut LayoutGraph, options: &LayoutOptions) {
    let columns = column_count(graph.node_count());
    let ids: Vec<_> = graph.node_ids().collect();
    for id in ids {
        graph.set_position(id, grid_position(id.index(), columns, options));
    }
}
