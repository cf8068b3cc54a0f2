//! Node records and slot identifiers.
//!
//! A [`Node`] is what callers hand to the layout: a string identifier, a
//! position, an informational size and an opaque payload. Inside a single
//! layout run each node is addressed by a [`NodeId`], its slot in the input
//! order.

use serde::{Deserialize, Serialize};

/// Slot identifier of a node within one layout run.
///
/// Slots follow the order of the input node slice, so a `NodeId` doubles as
/// an index into the position buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Get the slot as a buffer index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangular node to be positioned.
///
/// `width` and `height` are carried for renderers; the force model treats
/// every node as a point. `payload` is never inspected by the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "P: Deserialize<'de> + Default")
)]
pub struct Node<P = ()> {
    /// Identifier, unique within one layout call.
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub payload: P,
}

impl Node<()> {
    /// Create a node with no payload at the origin.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_payload(id, ())
    }
}

impl<P> Node<P> {
    /// Create a node carrying `payload`, at the origin and with zero size.
    pub fn with_payload(id: impl Into<String>, payload: P) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            payload,
        }
    }

    /// Set the starting position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the bounding size.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
