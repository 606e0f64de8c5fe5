pub mod edge;
pub mod polygon;
pub mod vertex;

pub use edge::{Edge, EdgeId};
pub use polygon::{Polygon, PolygonId};
pub use vertex::{Owner, Vertex, VertexId, VertexKey};

use std::collections::{BTreeMap, HashMap};

use slotmap::{SecondaryMap, SlotMap};
use tracing::trace;

use crate::error::{GraphError, Result};
use crate::math::Point3;

#[derive(Debug, Clone, Copy)]
struct EdgeSlot {
    start: VertexId,
    end: VertexId,
}

/// Undirected graph of vertices and edges plus the polygons it was built from.
///
/// Vertices live in a slotmap arena and are looked up by value, so adding the
/// same point twice yields one vertex. The first inserted copy of a vertex
/// keeps its owner. Cloning produces an independent snapshot.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: SlotMap<VertexId, Vertex>,
    vertex_index: HashMap<VertexKey, VertexId>,
    incidence: SecondaryMap<VertexId, Vec<EdgeId>>,
    edges: SlotMap<EdgeId, EdgeSlot>,
    edge_index: HashMap<(VertexId, VertexId), EdgeId>,
    polygons: BTreeMap<PolygonId, Polygon>,
    next_polygon_id: usize,
}

impl Graph {
    /// Creates a new, empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph holding the ring edges of every polygon.
    #[must_use]
    pub fn from_polygons(polygons: impl IntoIterator<Item = Polygon>) -> Self {
        let mut graph = Self::new();
        for polygon in polygons {
            graph.insert_polygon(polygon);
        }
        graph
    }

    // --- Vertex operations ---

    /// Inserts a vertex, returning the id of the stored copy.
    ///
    /// An equal vertex already in the graph is kept as is.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        if let Some(&id) = self.vertex_index.get(&vertex.key()) {
            return id;
        }
        let id = self.vertices.insert(vertex);
        self.vertex_index.insert(vertex.key(), id);
        self.incidence.insert(id, Vec::new());
        id
    }

    /// Whether an equal vertex is stored.
    #[must_use]
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.vertex_index.contains_key(&vertex.key())
    }

    /// Whether a vertex is stored at `point`.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        self.contains(&Vertex::new(*point))
    }

    /// Returns the stored copy of `vertex`, carrying its owner.
    #[must_use]
    pub fn resolve(&self, vertex: &Vertex) -> Option<Vertex> {
        self.vertex_index
            .get(&vertex.key())
            .and_then(|&id| self.vertices.get(id))
            .copied()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Inserts an undirected edge and its endpoints.
    ///
    /// Returns `false` when the edge already exists or is degenerate.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if edge.is_degenerate() {
            return false;
        }
        let start = self.add_vertex(*edge.start());
        let end = self.add_vertex(*edge.end());
        let key = ordered(start, end);
        if self.edge_index.contains_key(&key) {
            return false;
        }
        let id = self.edges.insert(EdgeSlot { start, end });
        self.edge_index.insert(key, id);
        for v in [start, end] {
            if let Some(list) = self.incidence.get_mut(v) {
                list.push(id);
            }
        }
        true
    }

    /// Whether the undirected edge is stored.
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        let (Some(&a), Some(&b)) = (
            self.vertex_index.get(&edge.start().key()),
            self.vertex_index.get(&edge.end().key()),
        ) else {
            return false;
        };
        self.edge_index.contains_key(&ordered(a, b))
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.values().filter_map(|slot| self.materialize(*slot))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges touching `vertex`, in insertion order.
    #[must_use]
    pub fn incident_edges(&self, vertex: &Vertex) -> Vec<Edge> {
        let Some(&id) = self.vertex_index.get(&vertex.key()) else {
            return Vec::new();
        };
        self.incidence.get(id).map_or_else(Vec::new, |list| {
            list.iter()
                .filter_map(|&e| self.edges.get(e))
                .filter_map(|slot| self.materialize(*slot))
                .collect()
        })
    }

    /// Number of edges touching `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: &Vertex) -> usize {
        self.vertex_index
            .get(&vertex.key())
            .and_then(|&id| self.incidence.get(id))
            .map_or(0, Vec::len)
    }

    /// Vertices sharing an edge with `vertex`.
    #[must_use]
    pub fn adjacent_vertices(&self, vertex: &Vertex) -> Vec<Vertex> {
        self.incident_edges(vertex)
            .iter()
            .map(|e| e.other(vertex))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // --- Polygon operations ---

    /// Builds a polygon from `points`, registers it and adds its ring edges.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the ring has fewer than two
    /// distinct points.
    pub fn add_polygon(
        &mut self,
        points: impl IntoIterator<Item = Point3>,
        boundary: bool,
    ) -> Result<PolygonId> {
        let id = PolygonId(self.next_polygon_id);
        let polygon = Polygon::new(id, points, boundary)?;
        self.insert_polygon(polygon);
        Ok(id)
    }

    /// Registers `polygon` under its own id and adds its ring edges.
    ///
    /// A polygon already registered with that id is replaced in the registry;
    /// its edges stay in the graph until [`Graph::rebuild_from_polygons`].
    pub fn insert_polygon(&mut self, polygon: Polygon) {
        self.next_polygon_id = self.next_polygon_id.max(polygon.id().0 + 1);
        for edge in polygon.edges() {
            self.add_edge(edge);
        }
        trace!(polygon = %polygon.id(), vertices = polygon.vertices().len(), "registered polygon");
        self.polygons.insert(polygon.id(), polygon);
    }

    /// Reserves and returns a fresh polygon id.
    pub fn allocate_polygon_id(&mut self) -> PolygonId {
        let id = PolygonId(self.next_polygon_id);
        self.next_polygon_id += 1;
        id
    }

    #[must_use]
    pub fn polygon(&self, id: PolygonId) -> Option<&Polygon> {
        self.polygons.get(&id)
    }

    /// Returns a mutable reference to a registered polygon.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::PolygonNotFound` if no polygon has this id.
    pub fn polygon_mut(&mut self, id: PolygonId) -> Result<&mut Polygon> {
        self.polygons
            .get_mut(&id)
            .ok_or_else(|| GraphError::PolygonNotFound(id).into())
    }

    /// Registered polygons, ordered by id.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.polygons.values()
    }

    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Whether `vertex` belongs to a registered boundary polygon.
    #[must_use]
    pub fn is_boundary_vertex(&self, vertex: &Vertex) -> bool {
        vertex
            .polygon_id()
            .and_then(|id| self.polygons.get(&id))
            .is_some_and(Polygon::is_boundary)
    }

    /// Drops every vertex and edge, then re-adds the ring edges of the
    /// registered polygons.
    pub fn rebuild_from_polygons(&mut self) {
        self.vertices.clear();
        self.vertex_index.clear();
        self.incidence.clear();
        self.edges.clear();
        self.edge_index.clear();
        let rings: Vec<Edge> = self.polygons.values().flat_map(Polygon::edges).collect();
        for edge in rings {
            self.add_edge(edge);
        }
    }

    fn materialize(&self, slot: EdgeSlot) -> Option<Edge> {
        let start = self.vertices.get(slot.start)?;
        let end = self.vertices.get(slot.end)?;
        Some(Edge::new(*start, *end))
    }
}

fn ordered(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
