use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, Owner, PolygonId, Vertex};
use crate::visibility::VisibilityGraph;

/// Combines several visibility graphs into one.
///
/// Polygons are renumbered so ids stay unique; vertices and edges are unioned
/// without recomputing visibility between the inputs.
pub struct Merge<'a> {
    graphs: Vec<&'a VisibilityGraph>,
}

impl<'a> Merge<'a> {
    /// Creates a new `Merge` operation over `graphs`, in order.
    #[must_use]
    pub fn new(graphs: impl IntoIterator<Item = &'a VisibilityGraph>) -> Self {
        Self {
            graphs: graphs.into_iter().collect(),
        }
    }

    /// Executes the merge. The first graph's configuration is kept.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidInput` if no graphs were given.
    pub fn execute(&self) -> Result<VisibilityGraph> {
        let Some(first) = self.graphs.first() else {
            return Err(GraphError::InvalidInput("no graphs to merge".into()).into());
        };

        let mut base = Graph::new();
        let mut graph = Graph::new();
        for source in &self.graphs {
            let mut renumbered: Vec<(PolygonId, PolygonId)> = Vec::new();
            for polygon in source.base().polygons() {
                let id = base.allocate_polygon_id();
                base.insert_polygon(polygon.with_id(id));
                renumbered.push((polygon.id(), id));
            }
            let remap = |vertex: &Vertex| -> Vertex {
                let owner = vertex.owner().and_then(|owner| {
                    renumbered
                        .iter()
                        .find(|(old, _)| *old == owner.polygon)
                        .map(|&(_, new)| Owner {
                            polygon: new,
                            boundary: owner.boundary,
                        })
                });
                vertex.with_owner(owner)
            };

            for vertex in source.base().vertices().chain(source.graph().vertices()) {
                let vertex = remap(vertex);
                base.add_vertex(vertex);
                graph.add_vertex(vertex);
            }
            for edge in source.graph().edges() {
                graph.add_edge(Edge::new(remap(edge.start()), remap(edge.end())));
            }
        }

        debug!(
            graphs = self.graphs.len(),
            polygons = base.polygon_count(),
            edges = graph.edge_count(),
            "merged visibility graphs"
        );
        Ok(VisibilityGraph::from_parts(graph, base, first.config()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SightlineError;
    use crate::graph::Polygon;
    use crate::math::Point3;
    use crate::visibility::VisibilityConfig;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(p(x, y))
    }

    fn square_graph(offset: f64) -> VisibilityGraph {
        let square = Polygon::new(
            PolygonId(0),
            [
                p(offset, 0.0),
                p(offset, 10.0),
                p(offset + 10.0, 10.0),
                p(offset + 10.0, 0.0),
            ],
            false,
        )
        .unwrap();
        VisibilityGraph::from_polygons([square], VisibilityConfig::default())
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = Merge::new(Vec::new()).execute().unwrap_err();
        assert!(matches!(err, SightlineError::Graph(GraphError::InvalidInput(_))));
    }

    #[test]
    fn polygon_ids_are_renumbered() {
        let left = square_graph(0.0);
        let right = square_graph(20.0);
        let merged = Merge::new([&left, &right]).execute().unwrap();

        assert_eq!(merged.base().polygon_count(), 2);
        assert_eq!(merged.edge_count(), 8);
        let corner = merged.graph().resolve(&v(20.0, 0.0)).unwrap();
        assert_eq!(corner.polygon_id(), Some(PolygonId(1)));
        let base_corner = merged.base().resolve(&v(20.0, 0.0)).unwrap();
        assert_eq!(base_corner.polygon_id(), Some(PolygonId(1)));
        assert_eq!(
            merged.graph().resolve(&v(0.0, 0.0)).unwrap().polygon_id(),
            Some(PolygonId(0))
        );
    }

    #[test]
    fn inputs_are_left_untouched() {
        let left = square_graph(0.0);
        let right = square_graph(20.0);
        let _ = Merge::new([&left, &right]).execute().unwrap();
        assert_eq!(
            right.graph().resolve(&v(20.0, 0.0)).unwrap().polygon_id(),
            Some(PolygonId(0))
        );
    }
}
