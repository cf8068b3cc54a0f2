//! Edge records.
//!
//! Edges are directed pairs of node identifiers. They only ever pull their
//! endpoints together; direction matters for which endpoint is the
//! "source" in the attraction pass, not for the amount of movement.

use serde::{Deserialize, Serialize};

/// A directed connection between two nodes, by identifier.
///
/// Identifiers that do not name a node are tolerated; such an edge simply
/// contributes no force.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
