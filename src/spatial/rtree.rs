//! R-tree based spatial index using the rstar crate.
//!
//! Provides O(log n) spatial queries for:
//! - Grid-cell occupancy (the snapper's conflict test)
//! - Point-in-radius (cut-off repulsion)

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::graph::{NodeId, Point};

/// A point in the spatial index with associated node ID.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePoint {
    /// The node identifier.
    pub id: NodeId,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl NodePoint {
    /// Create a new NodePoint.
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

impl RTreeObject for NodePoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for NodePoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index for graph nodes.
///
/// Uses an R*-tree for efficient spatial queries. Entries must be kept in
/// sync with the positions they mirror: callers move an entry with
/// [`SpatialIndex::relocate`] whenever they move the node.
pub struct SpatialIndex {
    tree: RTree<NodePoint>,
}

impl SpatialIndex {
    /// Create a new empty spatial index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index from `(id, position)` pairs.
    pub fn from_points(points: impl IntoIterator<Item = (NodeId, Point)>) -> Self {
        let mut index = Self::new();
        index.rebuild(points);
        index
    }

    /// Insert a node into the index.
    pub fn insert(&mut self, id: NodeId, x: f64, y: f64) {
        self.tree.insert(NodePoint::new(id, x, y));
    }

    /// Remove a node from the index.
    ///
    /// Returns true if the node was found and removed.
    pub fn remove(&mut self, id: NodeId, x: f64, y: f64) -> bool {
        let point = NodePoint::new(id, x, y);
        self.tree.remove(&point).is_some()
    }

    /// Move a node's entry from `from` to `to`.
    pub fn relocate(&mut self, id: NodeId, from: Point, to: Point) {
        if from == to {
            return;
        }
        self.remove(id, from.x, from.y);
        self.insert(id, to.x, to.y);
    }

    /// Check whether any node other than `exclude` lies strictly inside the
    /// square of half-width `half_extent` centred on `center`.
    ///
    /// A node exactly `half_extent` away on either axis does not count.
    pub fn occupied(&self, center: Point, half_extent: f64, exclude: NodeId) -> bool {
        let envelope = AABB::from_corners(
            [center.x - half_extent, center.y - half_extent],
            [center.x + half_extent, center.y + half_extent],
        );
        self.tree.locate_in_envelope(&envelope).any(|point| {
            point.id != exclude
                && (point.x - center.x).abs() < half_extent
                && (point.y - center.y).abs() < half_extent
        })
    }

    /// Find all nodes within a radius of a point.
    pub fn in_radius(&self, x: f64, y: f64, radius: f64) -> Vec<NodeId> {
        let radius_sq = radius * radius;
        self.tree
            .locate_within_distance([x, y], radius_sq)
            .map(|point| point.id)
            .collect()
    }

    /// Rebuild the index from `(id, position)` pairs.
    ///
    /// This is more efficient than incremental inserts for bulk updates.
    pub fn rebuild(&mut self, points: impl IntoIterator<Item = (NodeId, Point)>) {
        let node_points: Vec<_> = points
            .into_iter()
            .map(|(id, p)| NodePoint::new(id, p.x, p.y))
            .collect();

        self.tree = RTree::bulk_load(node_points);
    }

}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
