//! Final translation of the layout.

use crate::graph::{Bounds, LayoutGraph};

/// Translate `graph` so its minimum x and y both equal `padding`.
///
/// Returns the bounds after translation, or `None` for an empty graph.
pub fn normalize(graph: &mut LayoutGraph, padding: f64) -> Option<Bounds> {
    let bounds = graph.bounds()?;
    graph.translate(padding - bounds.min_x, padding - bounds.min_y);
    graph.bounds()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, NodeId, Point};

    #[test]
    fn test_min_coordinates_become_padding() {
        let nodes = vec![
            Node::new("A").at(-300.0, 200.0),
            Node::new("B").at(100.0, -100.0),
        ];
        let mut graph = LayoutGraph::build(&nodes, &[]).unwrap();
        let bounds = normalize(&mut graph, 50.0).unwrap();

        assert_eq!(graph.position(NodeId(0)), Point::new(50.0, 350.0));
        assert_eq!(graph.position(NodeId(1)), Point::new(450.0, 50.0));
        assert_eq!(bounds.min_x, 50.0);
        assert_eq!(bounds.min_y, 50.0);
        assert_eq!(bounds.max_x, 450.0);
        assert_eq!(bounds.max_y, 350.0);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = LayoutGraph::build::<()>(&[], &[]).unwrap();
        assert!(normalize(&mut graph, 50.0).is_none());
    }
}
