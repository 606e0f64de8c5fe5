mod config;

pub use config::VisibilityConfig;

use tracing::debug;

use crate::graph::{Edge, Graph, Polygon, Vertex};
use crate::operations::sweep::VisibleVertices;

/// Graph connecting every pair of mutually visible obstacle vertices.
///
/// Owns a snapshot of the obstacle graph it was built from; later insertions
/// and merges work on clones and never touch the caller's graph.
#[derive(Debug, Clone)]
pub struct VisibilityGraph {
    graph: Graph,
    base: Graph,
    config: VisibilityConfig,
}

impl VisibilityGraph {
    /// Sweeps every vertex of `base` and unions the visible pairs.
    #[must_use]
    pub fn new(base: Graph, config: VisibilityConfig) -> Self {
        let mut graph = Graph::new();
        let centres: Vec<Vertex> = base.vertices().copied().collect();
        for centre in centres {
            graph.add_vertex(centre);
            let visible = VisibleVertices::new(centre)
                .half_scan(config.half_scan)
                .reduced(config.reduced)
                .execute(&base);
            for v in visible {
                graph.add_edge(Edge::new(centre, v));
            }
        }
        debug!(
            obstacles = base.polygon_count(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            reduced = config.reduced,
            "built visibility graph"
        );
        Self {
            graph,
            base,
            config,
        }
    }

    /// Builds the obstacle graph from `polygons`, then the visibility graph.
    #[must_use]
    pub fn from_polygons(
        polygons: impl IntoIterator<Item = Polygon>,
        config: VisibilityConfig,
    ) -> Self {
        Self::new(Graph::from_polygons(polygons), config)
    }

    pub(crate) fn from_parts(graph: Graph, base: Graph, config: VisibilityConfig) -> Self {
        Self {
            graph,
            base,
            config,
        }
    }

    /// The visibility edges.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// The obstacle graph the visibility edges were computed against.
    #[must_use]
    pub fn base(&self) -> &Graph {
        &self.base
    }

    #[must_use]
    pub fn config(&self) -> VisibilityConfig {
        self.config
    }

    /// Whether `vertex` is a node of the visibility graph.
    #[must_use]
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.graph.contains(vertex)
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edges()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
