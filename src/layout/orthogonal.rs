//! Orthogonal grid layout pipeline.
//!
//! Runs the phases in a fixed order:
//!
//! 1. **Initial placement** ([`super::initial`]), unless the caller asked to
//!    keep incoming positions.
//! 2. **Simulate, then snap**, `max_iterations` times: a repulsion pass and
//!    an attraction pass scaled by the current temperature
//!    ([`super::forces`]), grid snapping with spiral conflict resolution
//!    ([`super::snap`]), then geometric cooling.
//! 3. **Normalization** ([`super::normalize`]) so the minimum coordinate on
//!    each axis equals the padding.
//!
//! No randomness is involved: identical input yields identical output.
//! All working state lives in a [`LayoutGraph`] built for the call.

use log::{debug, trace};

use crate::error::{LayoutError, Result};
use crate::graph::{Bounds, Edge, LayoutGraph, Node, Point};

use super::forces::{apply_attraction, apply_repulsion};
use super::initial::place_on_grid;
use super::normalize::normalize;
use super::options::{InitialPlacement, LayoutOptions};
use super::snap::snap_to_grid;

/// Summary of a layout run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutStats {
    /// Simulation rounds performed.
    pub iterations: u32,
    /// Temperature after the last cooling step.
    pub final_temperature: f64,
    /// Nodes left on a conflicting cell by the last snapping pass.
    pub unresolved_conflicts: usize,
    /// Edges ignored because an endpoint is not a known node.
    pub skipped_edges: usize,
}

/// Result of the orthogonal layout computation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Final positions, one per input node, in input order.
    pub positions: Vec<Point>,
    /// Extent of the final layout; `None` when there are no nodes.
    pub bounds: Option<Bounds>,
    pub stats: LayoutStats,
}

/// The orthogonal grid layout engine.
///
/// Holds configuration only; every call to [`OrthogonalLayout::compute`]
/// is independent of the previous ones.
#[derive(Debug, Clone)]
pub struct OrthogonalLayout {
    options: LayoutOptions,
}

impl OrthogonalLayout {
    /// Create a layout engine, rejecting unusable options.
    pub fn new(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Create a layout engine with default options.
    pub fn with_defaults() -> Self {
        Self {
            options: LayoutOptions::default(),
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Compute positions for `nodes`.
    ///
    /// Nodes are only read; edges naming unknown nodes are ignored. Fails
    /// when two nodes share an identifier or when a node would start from a
    /// NaN or infinite position.
    pub fn compute<P>(&self, nodes: &[Node<P>], edges: &[Edge]) -> Result<LayoutResult> {
        let options = &self.options;
        let mut graph = LayoutGraph::build(nodes, edges)?;

        debug!(
            "orthogonal layout: {} nodes, {} edges ({} skipped), {} iterations",
            graph.node_count(),
            graph.edge_count(),
            graph.skipped_edges(),
            options.max_iterations
        );

        if options.initial_placement == InitialPlacement::Grid {
            place_on_grid(&mut graph, options);
        }
        if let Some(id) = graph.first_non_finite() {
            return Err(LayoutError::NonFinitePosition(nodes[id.index()].id.clone()));
        }

        let mut temperature = options.temperature;
        let mut unresolved_conflicts = 0;
        for iteration in 0..options.max_iterations {
            apply_repulsion(&mut graph, temperature, options);
            apply_attraction(&mut graph, temperature, options);

            let report = snap_to_grid(&mut graph, options);
            unresolved_conflicts = report.unresolved;
            trace!(
                "iteration {iteration}: temperature {temperature:.3}, {} relocated, {} unresolved",
                report.relocated,
                report.unresolved
            );

            temperature *= options.cooling_factor;
        }

        let bounds = normalize(&mut graph, options.padding);
        let stats = LayoutStats {
            iterations: options.max_iterations,
            final_temperature: temperature,
            unresolved_conflicts,
            skipped_edges: graph.skipped_edges(),
        };
        debug!("orthogonal layout done: {stats:?}");

        Ok(LayoutResult {
            positions: graph.positions(),
            bounds,
            stats,
        })
    }
}

impl Default for OrthogonalLayout {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Lay out `nodes` and return positioned copies, leaving the input as is.
pub fn compute_layout<P: Clone>(
    nodes: &[Node<P>],
    edges: &[Edge],
    options: &LayoutOptions,
) -> Result<Vec<Node<P>>> {
    let result = OrthogonalLayout::new(options.clone())?.compute(nodes, edges)?;
    Ok(nodes
        .iter()
        .zip(result.positions)
        .map(|(node, p)| Node {
            x: p.x,
            y: p.y,
            ..node.clone()
        })
        .collect())
}

/// Lay out `nodes`, writing the final positions back into them.
///
/// On error no node is modified.
pub fn compute_layout_in_place<P>(
    nodes: &mut [Node<P>],
    edges: &[Edge],
    options: &LayoutOptions,
) -> Result<LayoutStats> {
    let result = OrthogonalLayout::new(options.clone())?.compute(nodes, edges)?;
    for (node, p) in nodes.iter_mut().zip(result.positions) {
        node.x = p.x;
        node.y = p.y;
    }
    Ok(result.stats)
}
