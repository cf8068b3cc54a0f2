//! Grid snapping with local conflict resolution.
//!
//! After every force round each node is rounded to the nearest grid point.
//! Two nodes conflict when they are less than one grid unit apart on both
//! axes. A conflicted node walks a fixed spiral of nearby cells (radius 1 to
//! [`MAX_SEARCH_RADIUS`], `8r` angular steps per ring) and takes the first
//! free one. When the whole spiral is occupied the node keeps its rounded,
//! still-conflicting position; later rounds usually clear it.
//!
//! Nodes are processed in slot order and checked against the *current*
//! position of every other node, which for nodes later in the order is
//! still the unrounded force-pass result.

use std::f64::consts::TAU;

use crate::graph::{LayoutGraph, NodeId, Point};
use crate::spatial::SpatialIndex;

use super::options::LayoutOptions;

/// Outermost ring searched for a free cell.
pub const MAX_SEARCH_RADIUS: u32 = 3;

/// Round a coordinate to the nearest multiple of `grid_size`.
///
/// Halfway values round away from zero, symmetric about the origin:
/// `-50` snaps to `-100` and `50` to `100` on a grid of 100.
#[inline]
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Round a point to the nearest grid point, per axis.
#[inline]
pub fn snap_point(p: Point, grid_size: f64) -> Point {
    Point::new(snap_value(p.x, grid_size), snap_value(p.y, grid_size))
}

/// Candidate cell offsets in search order, in grid units.
///
/// Rings are visited from the inside out; within ring `r` the `8r` angles
/// start at zero and advance counter-clockwise. Offsets can repeat.
pub fn spiral_offsets(max_radius: u32) -> impl Iterator<Item = (f64, f64)> {
    (1..=max_radius).flat_map(|r| {
        let steps = 8 * r;
        let radius = f64::from(r);
        (0..steps).map(move |k| {
            let angle = TAU * f64::from(k) / f64::from(steps);
            ((angle.cos() * radius).round(), (angle.sin() * radius).round())
        })
    })
}

/// How a single node was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapOutcome {
    /// The rounded position was free.
    Free,
    /// The rounded position conflicted; a spiral cell was taken instead.
    Relocated,
    /// Every spiral cell conflicted; the rounded position was kept.
    Unresolved,
}

/// Counts of a snapping pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapReport {
    pub relocated: usize,
    pub unresolved: usize,
}

/// Pick the grid position for `id`.
pub fn place(
    id: NodeId,
    current: Point,
    occupancy: &SpatialIndex,
    grid_size: f64,
) -> (Point, SnapOutcome) {
    let rounded = snap_point(current, grid_size);
    if !occupancy.occupied(rounded, grid_size, id) {
        return (rounded, SnapOutcome::Free);
    }

    spiral_offsets(MAX_SEARCH_RADIUS)
        .map(|(ox, oy)| Point::new(rounded.x + ox * grid_size, rounded.y + oy * grid_size))
        .find(|candidate| !occupancy.occupied(*candidate, grid_size, id))
        .map(|candidate| (candidate, SnapOutcome::Relocated))
        .unwrap_or((rounded, SnapOutcome::Unresolved))
}

/// Snap every node of `graph` to the grid.
pub fn snap_to_grid(graph: &mut LayoutGraph, options: &LayoutOptions) -> SnapReport {
    let grid_size = options.grid_size;
    let ids: Vec<NodeId> = graph.node_ids().collect();
    let mut occupancy = SpatialIndex::from_points(ids.iter().map(|&id| (id, graph.position(id))));
    let mut report = SnapReport::default();

    for id in ids {
        let current = graph.position(id);
        let (target, outcome) = place(id, current, &occupancy, grid_size);
        match outcome {
            SnapOutcome::Free => {}
            SnapOutcome::Relocated => report.relocated += 1,
            SnapOutcome::Unresolved => report.unresolved += 1,
        }
        graph.set_position(id, target);
        occupancy.relocate(id, current, target);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn graph_of(points: &[(f64, f64)]) -> LayoutGraph {
        let nodes: Vec<Node> = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Node::new(format!("n{i}")).at(x, y))
            .collect();
        LayoutGraph::build(&nodes, &[]).unwrap()
    }

    #[test]
    fn test_snap_value() {
        assert_eq!(snap_value(149.0, 100.0), 100.0);
        assert_eq!(snap_value(151.0, 100.0), 200.0);
        assert_eq!(snap_value(-49.0, 100.0), 0.0);
        assert_eq!(snap_value(-51.0, 100.0), -100.0);
        assert_eq!(snap_value(37.0, 25.0), 25.0);
    }

    #[test]
    fn test_snap_value_ties_round_away_from_zero() {
        assert_eq!(snap_value(50.0, 100.0), 100.0);
        assert_eq!(snap_value(-50.0, 100.0), -100.0);
        assert_eq!(snap_value(-150.0, 100.0), -200.0);
        assert_eq!(snap_value(12.5, 25.0), 25.0);
    }

    #[test]
    fn test_first_ring_order() {
        let ring: Vec<_> = spiral_offsets(1).collect();
        assert_eq!(
            ring,
            vec![
                (1.0, 0.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (-1.0, 1.0),
                (-1.0, 0.0),
                (-1.0, -1.0),
                (0.0, -1.0),
                (1.0, -1.0),
            ]
        );
    }

    #[test]
    fn test_spiral_stays_within_radius() {
        let offsets: Vec<_> = spiral_offsets(MAX_SEARCH_RADIUS).collect();
        assert_eq!(offsets.len(), 8 + 16 + 24);
        assert!(offsets.iter().all(|&(x, y)| x.abs() <= 3.0 && y.abs() <= 3.0));
        assert!(offsets.iter().all(|&(x, y)| (x, y) != (0.0, 0.0)));
        assert_eq!(offsets[8], (2.0, 0.0));
        assert_eq!(offsets[24], (3.0, 0.0));
    }

    #[test]
    fn test_free_nodes_are_rounded() {
        let mut graph = graph_of(&[(49.0, 151.0), (420.0, -260.0)]);
        let report = snap_to_grid(&mut graph, &LayoutOptions::default());
        assert_eq!(report, SnapReport::default());
        assert_eq!(graph.position(NodeId(0)), Point::new(0.0, 200.0));
        assert_eq!(graph.position(NodeId(1)), Point::new(400.0, -300.0));
    }

    #[test]
    fn test_coincident_nodes_are_separated() {
        let mut graph = graph_of(&[(0.0, 0.0), (0.0, 0.0)]);
        let report = snap_to_grid(&mut graph, &LayoutOptions::default());
        assert_eq!(report.relocated, 1);
        assert_eq!(graph.position(NodeId(0)), Point::new(100.0, 0.0));
        assert_eq!(graph.position(NodeId(1)), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_spiral_skips_occupied_cells() {
        // (0,0) and (100,0) are taken, so the first free cell is (100,100).
        let mut graph = graph_of(&[(10.0, 0.0), (0.0, 0.0), (100.0, 0.0)]);
        snap_to_grid(&mut graph, &LayoutOptions::default());
        assert_eq!(graph.position(NodeId(0)), Point::new(100.0, 100.0));
        assert_eq!(graph.position(NodeId(1)), Point::new(0.0, 0.0));
        assert_eq!(graph.position(NodeId(2)), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_conflicts_use_unrounded_positions() {
        // The second node is still at (60,60) while the first is placed.
        let mut graph = graph_of(&[(0.0, 0.0), (60.0, 60.0)]);
        snap_to_grid(&mut graph, &LayoutOptions::default());
        assert_eq!(graph.position(NodeId(0)), Point::new(-100.0, 100.0));
        assert_eq!(graph.position(NodeId(1)), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_exhausted_spiral_keeps_rounded_position() {
        // Fill every cell within three rings of the origin, plus a second
        // node on the origin itself.
        let mut points = vec![(4.0, -3.0), (0.0, 0.0)];
        for x in -3..=3 {
            for y in -3..=3 {
                if (x, y) != (0, 0) {
                    points.push((f64::from(x) * 100.0, f64::from(y) * 100.0));
                }
            }
        }
        let mut graph = graph_of(&points);
        let report = snap_to_grid(&mut graph, &LayoutOptions::default());

        assert_eq!(report.unresolved, 2);
        assert_eq!(report.relocated, 0);
        assert_eq!(graph.position(NodeId(0)), Point::new(0.0, 0.0));
        assert_eq!(graph.position(NodeId(1)), Point::new(0.0, 0.0));
    }
}
