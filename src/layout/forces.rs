//! Force simulation passes.
//!
//! One simulation round is a repulsion pass over node pairs followed by an
//! attraction pass over edges. Both passes update positions in place and in
//! a fixed order: a node moved earlier in a pass is seen at its new position
//! by later pairs of the same pass.
//!
//! # Force model
//!
//! With `g` the grid size and `d` the distance between two nodes:
//!
//! - **Repulsion** (every pair): `4g / d²` below `1.5g`, otherwise
//!   `min(2g / d², g)`, pushing along the line between the nodes.
//! - **Attraction** (every edge): `min(d / 2g, g / 2)`, pulling the
//!   endpoints together.
//!
//! Every force is multiplied by the current temperature and then clamped per
//! axis to `±g / 2` before it is applied. Coincident nodes exert no force on
//! each other.

use crate::graph::{LayoutGraph, NodeId, Point};
use crate::spatial::SpatialIndex;

use super::options::LayoutOptions;

/// Repulsion felt by a node at `this` from a node at `other`.
///
/// Returns `None` when the two positions coincide.
pub fn repulsion(this: Point, other: Point, grid_size: f64) -> Option<(f64, f64)> {
    let dx = this.x - other.x;
    let dy = this.y - other.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance <= 0.0 {
        return None;
    }

    let min_distance = 1.5 * grid_size;
    let magnitude = if distance < min_distance {
        (4.0 * grid_size) / (distance * distance)
    } else {
        ((2.0 * grid_size) / (distance * distance)).min(grid_size)
    };

    Some((dx / distance * magnitude, dy / distance * magnitude))
}

/// Attraction pulling a source at `source` towards a target at `target`.
///
/// Returns `None` when the endpoints coincide.
pub fn attraction(source: Point, target: Point, grid_size: f64) -> Option<(f64, f64)> {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance <= 0.0 {
        return None;
    }

    let magnitude = (distance / (2.0 * grid_size)).min(0.5 * grid_size);
    Some((dx / distance * magnitude, dy / distance * magnitude))
}

/// Scale a force by the temperature and clamp each axis to `max_movement`.
#[inline]
pub fn step(force: (f64, f64), temperature: f64, max_movement: f64) -> (f64, f64) {
    (
        (force.0 * temperature).clamp(-max_movement, max_movement),
        (force.1 * temperature).clamp(-max_movement, max_movement),
    )
}

/// Push every node away from the others.
///
/// Without a cut-off every pair is visited, O(n²). With
/// [`LayoutOptions::repulsion_cutoff`] set, each node only considers nodes
/// that were within the cut-off radius when the pass began.
pub fn apply_repulsion(graph: &mut LayoutGraph, temperature: f64, options: &LayoutOptions) {
    let grid_size = options.grid_size;
    let max_movement = options.max_movement();
    let ids: Vec<NodeId> = graph.node_ids().collect();

    let neighbourhood = options.repulsion_cutoff.map(|radius| {
        let index = SpatialIndex::from_points(ids.iter().map(|&id| (id, graph.position(id))));
        (radius, index)
    });

    for &id in &ids {
        let this = graph.position(id);

        let near;
        let others: &[NodeId] = match &neighbourhood {
            Some((radius, index)) => {
                let mut found = index.in_radius(this.x, this.y, *radius);
                // Summation order must not depend on tree layout.
                found.sort_unstable();
                near = found;
                &near
            }
            None => &ids,
        };

        let mut force = (0.0, 0.0);
        for &other in others {
            if other == id {
                continue;
            }
            if let Some((fx, fy)) = repulsion(this, graph.position(other), grid_size) {
                force.0 += fx;
                force.1 += fy;
            }
        }

        let (dx, dy) = step(force, temperature, max_movement);
        graph.displace(id, dx, dy);
    }
}

/// Pull the endpoints of every edge towards each other.
///
/// Source and target move by the same clamped amount in opposite
/// directions. Edges are visited in input order.
pub fn apply_attraction(graph: &mut LayoutGraph, temperature: f64, options: &LayoutOptions) {
    let grid_size = options.grid_size;
    let max_movement = options.max_movement();
    let edges: Vec<(NodeId, NodeId)> = graph.edge_endpoints().collect();

    for (source, target) in edges {
        let Some(force) = attraction(graph.position(source), graph.position(target), grid_size)
        else {
            continue;
        };
        let (dx, dy) = step(force, temperature, max_movement);
        graph.displace(source, dx, dy);
        graph.displace(target, -dx, -dy);
    }
}
