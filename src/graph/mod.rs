//! Graph data structures for layout runs.
//!
//! Caller-facing records ([`Node`], [`Edge`]) plus the per-call
//! [`LayoutGraph`] that the layout phases operate on. The working graph is
//! never shared between runs.

mod edge;
mod layout_graph;
mod node;

pub use edge::Edge;
pub use layout_graph::{Bounds, LayoutGraph};
pub use node::{Node, NodeId, Point};
