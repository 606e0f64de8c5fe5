use crate::graph::Vertex;
use crate::operations::sweep::VisibleVertices;
use crate::visibility::VisibilityGraph;

/// Lists everything visible from a single point, including the points where
/// rays grazing an obstacle corner land on the next edge.
pub struct VertexVisibility {
    vertex: Vertex,
}

impl VertexVisibility {
    /// Creates a new `VertexVisibility` query from `point`.
    #[must_use]
    pub fn new(point: impl Into<Vertex>) -> Self {
        Self {
            vertex: point.into(),
        }
    }

    /// Runs a full sweep against the obstacles of `visibility`.
    #[must_use]
    pub fn execute(&self, visibility: &VisibilityGraph) -> Vec<Vertex> {
        let base = visibility.base();
        let centre = base.resolve(&self.vertex).unwrap_or(self.vertex);
        VisibleVertices::new(centre).max_visibility(true).execute(base)
    }
}
