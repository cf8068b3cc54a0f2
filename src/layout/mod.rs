//! Orthogonal force-directed layout.
//!
//! This module computes grid-aligned positions for labeled rectangular nodes:
//! connected nodes attract, all nodes repel, and every round ends with the
//! nodes snapped onto a uniform grid so rendered edges read as orthogonal.
//! The phases are exposed individually for callers that want to drive or
//! inspect them; [`OrthogonalLayout`] runs the whole pipeline.

pub mod forces;
pub mod initial;
pub mod normalize;
pub mod options;
pub mod orthogonal;
pub mod snap;

pub use options::{InitialPlacement, LayoutOptions};
pub use orthogonal::{
    LayoutResult, LayoutStats, OrthogonalLayout, compute_layout, compute_layout_in_place,
};
