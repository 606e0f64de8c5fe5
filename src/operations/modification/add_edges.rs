use crate::error::{GraphError, Result};
use crate::graph::{Edge, Vertex};
use crate::visibility::VisibilityGraph;

use super::add_vertices::AddVertices;

/// Inserts edges into a visibility graph.
///
/// Endpoints are inserted first, as [`AddVertices`] does, then the edges
/// themselves are stored whether or not they are obstacle free.
pub struct AddEdges {
    edges: Vec<Edge>,
}

impl AddEdges {
    /// Creates a new `AddEdges` operation.
    #[must_use]
    pub fn new(edges: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    /// Executes the insertion, returning the extended copy.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidInput` if no edges were given.
    pub fn execute(&self, visibility: &VisibilityGraph) -> Result<VisibilityGraph> {
        if self.edges.is_empty() {
            return Err(GraphError::InvalidInput("no edges to add".into()).into());
        }

        let mut endpoints: Vec<Vertex> = Vec::new();
        for edge in &self.edges {
            for v in [edge.start(), edge.end()] {
                if !endpoints.contains(v) {
                    endpoints.push(*v);
                }
            }
        }

        let mut updated = AddVertices::new(endpoints).execute(visibility)?;
        let graph = updated.graph_mut();
        for edge in &self.edges {
            graph.add_edge(*edge);
        }
        Ok(updated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SightlineError;
    use crate::graph::{Polygon, PolygonId};
    use crate::math::Point3;
    use crate::visibility::VisibilityConfig;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(p(x, y))
    }

    fn square_graph() -> VisibilityGraph {
        let square = Polygon::new(
            PolygonId(0),
            [p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)],
            false,
        )
        .unwrap();
        VisibilityGraph::from_polygons([square], VisibilityConfig::default())
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = AddEdges::new(Vec::new()).execute(&square_graph()).unwrap_err();
        assert!(matches!(err, SightlineError::Graph(GraphError::InvalidInput(_))));
    }

    #[test]
    fn edge_is_stored_even_when_blocked() {
        let vg = square_graph();
        let crossing = Edge::new(v(-5.0, 5.0), v(15.0, 5.0));
        let updated = AddEdges::new([crossing]).execute(&vg).unwrap();
        assert!(updated.graph().contains_edge(&crossing));
        assert!(updated.contains(&v(-5.0, 5.0)));
        assert!(updated.contains(&v(15.0, 5.0)));
        assert!(!vg.graph().contains_edge(&crossing));
    }

    #[test]
    fn repeated_insertion_adds_nothing() {
        let vg = square_graph();
        let edges = [
            Edge::new(v(-5.0, 5.0), v(15.0, 5.0)),
            Edge::new(v(-5.0, 5.0), v(-5.0, 20.0)),
            Edge::new(v(10.0, 5.0), v(15.0, 5.0)),
        ];
        let once = AddEdges::new(edges).execute(&vg).unwrap();
        let twice = AddEdges::new(edges).execute(&once).unwrap();
        assert_eq!(once.edge_count(), twice.edge_count());
        assert_eq!(once.graph().vertex_count(), twice.graph().vertex_count());
        assert_eq!(once.base().edge_count(), twice.base().edge_count());
        for edge in &edges {
            assert!(twice.graph().contains_edge(edge));
        }
    }

    #[test]
    fn endpoints_are_linked_by_visibility() {
        let vg = square_graph();
        let updated = AddEdges::new([Edge::new(v(-5.0, 5.0), v(-5.0, 20.0))])
            .execute(&vg)
            .unwrap();
        let links = updated.graph().adjacent_vertices(&v(-5.0, 5.0));
        assert!(links.contains(&v(0.0, 0.0)));
        assert!(links.contains(&v(0.0, 10.0)));
        assert!(links.contains(&v(-5.0, 20.0)));
    }
}
