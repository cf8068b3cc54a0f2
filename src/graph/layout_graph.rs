//! LayoutGraph - per-call working graph.
//!
//! A `LayoutGraph` is built from the caller's node and edge slices at the
//! start of every layout run and dropped at the end of it. Topology lives in
//! petgraph's StableGraph; positions live in SoA (Structure of Arrays)
//! buffers indexed by [`NodeId`] so the force passes can update them in place
//! without touching the caller's records.

use petgraph::Directed;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use log::trace;

use super::edge::Edge;
use super::node::{Node, NodeId, Point};
use crate::error::{LayoutError, Result};

/// Axis-aligned bounds of a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Working graph for a single layout run.
pub struct LayoutGraph {
    /// Nodes store their slot id; edges carry no weight.
    graph: StableGraph<NodeId, (), Directed>,

    /// Map from slot to petgraph NodeIndex.
    indices: Vec<NodeIndex>,

    /// X positions (SoA layout)
    pos_x: Vec<f64>,

    /// Y positions (SoA layout)
    pos_y: Vec<f64>,

    /// Edges dropped because an endpoint is unknown.
    skipped_edges: usize,
}

impl LayoutGraph {
    /// Build the working graph from caller records.
    ///
    /// Node slots follow input order. Edges naming an unknown node are
    /// dropped and counted; the rest keep their input order.
    pub fn build<P>(nodes: &[Node<P>], edges: &[Edge]) -> Result<Self> {
        let mut graph = StableGraph::with_capacity(nodes.len(), edges.len());
        let mut slots = HashMap::with_capacity(nodes.len());
        let mut indices = Vec::with_capacity(nodes.len());
        let mut pos_x = Vec::with_capacity(nodes.len());
        let mut pos_y = Vec::with_capacity(nodes.len());

        for (i, node) in nodes.iter().enumerate() {
            let id = NodeId(i as u32);
            if slots.insert(node.id.clone(), id).is_some() {
                return Err(LayoutError::DuplicateNodeId(node.id.clone()));
            }
            indices.push(graph.add_node(id));
            pos_x.push(node.x);
            pos_y.push(node.y);
        }

        let mut skipped_edges = 0;
        for edge in edges {
            let (Some(source), Some(target)) = (slots.get(&edge.source), slots.get(&edge.target))
            else {
                trace!(
                    "skipping edge {} -> {}: unknown endpoint",
                    edge.source, edge.target
                );
                skipped_edges += 1;
                continue;
            };
            graph.add_edge(indices[source.index()], indices[target.index()], ());
        }

        Ok(Self {
            graph,
            indices,
            pos_x,
            pos_y,
            skipped_edges,
        })
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of surviving edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of edges dropped during construction.
    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    /// All node slots in input order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.indices
            .iter()
            .filter_map(|&index| self.graph.node_weight(index).copied())
    }

    /// Surviving edges as (source, target) slots, in input order.
    pub fn edge_endpoints(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()]))
    }

    /// Get a node's position.
    #[inline]
    pub fn position(&self, id: NodeId) -> Point {
        let i = id.index();
        Point::new(self.pos_x[i], self.pos_y[i])
    }

    /// Set a node's position.
    #[inline]
    pub fn set_position(&mut self, id: NodeId, p: Point) {
        let i = id.index();
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
    }

    /// Move a node by a displacement.
    #[inline]
    pub fn displace(&mut self, id: NodeId, dx: f64, dy: f64) {
        let i = id.index();
        self.pos_x[i] += dx;
        self.pos_y[i] += dy;
    }

    /// First node, in slot order, whose position is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<NodeId> {
        self.pos_x
            .iter()
            .zip(&self.pos_y)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
            .map(|i| NodeId(i as u32))
    }

    /// All positions in slot order.
    pub fn positions(&self) -> Vec<Point> {
        self.pos_x
            .iter()
            .zip(&self.pos_y)
            .map(|(&x, &y)| Point::new(x, y))
            .collect()
    }

    /// Shift every node by the same offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.pos_x.iter_mut().for_each(|x| *x += dx);
        self.pos_y.iter_mut().for_each(|y| *y += dy);
    }

    /// Get the bounding box of all nodes, or None for an empty graph.
    pub fn bounds(&self) -> Option<Bounds> {
        if self.pos_x.is_empty() {
            return None;
        }

        let mut bounds = Bounds {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for (&x, &y) in self.pos_x.iter().zip(&self.pos_y) {
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }
}
