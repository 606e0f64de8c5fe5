use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Polygon, Vertex};
use crate::math::TOLERANCE;
use crate::operations::sweep::VisibleVertices;
use crate::visibility::VisibilityGraph;

/// Inserts points into a visibility graph, returning the extended copy.
///
/// A point lying on an obstacle edge is snapped into that polygon, splitting
/// the edge. Other points stay free. Visibility is only recomputed from the
/// inserted points, against the obstacles and each other.
pub struct AddVertices {
    vertices: Vec<Vertex>,
}

impl AddVertices {
    /// Creates a new `AddVertices` operation.
    #[must_use]
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Executes the insertion. `visibility` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidInput` if no vertices were given.
    pub fn execute(&self, visibility: &VisibilityGraph) -> Result<VisibilityGraph> {
        if self.vertices.is_empty() {
            return Err(GraphError::InvalidInput("no vertices to add".into()).into());
        }

        let mut base = visibility.base().clone();
        let mut graph = visibility.graph().clone();
        let mut inserted: Vec<Vertex> = Vec::new();
        let mut snapped = 0_usize;

        for vertex in &self.vertices {
            if graph.contains(vertex) || inserted.contains(vertex) {
                continue;
            }
            if let Some(stored) = base.resolve(vertex) {
                inserted.push(stored);
                continue;
            }

            let point = vertex.point();
            let closest = base
                .edges()
                .min_by(|a, b| a.distance_to(point).total_cmp(&b.distance_to(point)))
                .filter(|edge| edge.distance_to(point) <= TOLERANCE);
            let owner = closest.and_then(|edge| {
                base.polygons()
                    .find(|polygon| polygon.edges().contains(&edge))
                    .map(Polygon::id)
                    .map(|id| (id, edge))
            });

            match owner {
                Some((id, edge)) => {
                    let stored = base.polygon_mut(id)?.insert_vertex(*point, &edge)?;
                    base.rebuild_from_polygons();
                    inserted.push(stored);
                    snapped += 1;
                }
                None => inserted.push(*vertex),
            }
        }

        let reduced = visibility.config().reduced;
        let mut added = 0_usize;
        for centre in &inserted {
            graph.add_vertex(*centre);
            let others = inserted.iter().filter(|v| *v != centre).copied();
            let visible = VisibleVertices::new(*centre)
                .with_extra_vertices(others)
                .reduced(reduced)
                .execute(&base);
            for v in visible {
                if graph.add_edge(Edge::new(*centre, v)) {
                    added += 1;
                }
            }
        }

        debug!(
            inserted = inserted.len(),
            snapped,
            isolated = inserted.len() - snapped,
            edges = added,
            "added vertices to visibility graph"
        );
        Ok(VisibilityGraph::from_parts(graph, base, visibility.config()))
    }
}
