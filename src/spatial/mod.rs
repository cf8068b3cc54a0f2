//! Spatial indexing for grid conflict tests and neighbourhood queries.
//!
//! This module provides an R-tree based spatial index over node positions,
//! used by the grid snapper and the cut-off repulsion mode.

mod rtree;

pub use rtree::SpatialIndex;
