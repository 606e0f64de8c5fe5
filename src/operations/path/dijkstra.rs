use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::priority_queue::MinPriorityQueue;
use super::Path;
use crate::error::{PathError, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::math::distance;

/// Shortest path between two vertices over Euclidean edge lengths.
///
/// Extra edges are searched as if they belonged to the graph but are only read.
pub struct Dijkstra<'a> {
    origin: Vertex,
    destination: Vertex,
    extra: Option<&'a Graph>,
}

impl<'a> Dijkstra<'a> {
    /// Creates a new `Dijkstra` search from `origin` to `destination`.
    #[must_use]
    pub fn new(origin: Vertex, destination: Vertex) -> Self {
        Self {
            origin,
            destination,
            extra: None,
        }
    }

    /// Adds temporary edges to the search.
    #[must_use]
    pub fn with_extra_edges(mut self, extra: &'a Graph) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Runs the search on `graph`.
    ///
    /// Returns an empty path when origin and destination coincide.
    ///
    /// # Errors
    ///
    /// Returns `PathError::Unreachable` if the destination cannot be reached.
    pub fn execute(&self, graph: &Graph) -> Result<Path> {
        if self.origin == self.destination {
            return Ok(Path::default());
        }
        let origin = self.resolve(graph, &self.origin);

        let mut queue = MinPriorityQueue::new();
        let mut settled: HashSet<Vertex> = HashSet::new();
        let mut parents: HashMap<Vertex, Vertex> = HashMap::new();
        queue.push(origin, 0.0);

        let mut reached = None;
        while let Some((v, cost)) = queue.pop() {
            if v == self.destination {
                reached = Some(v);
                break;
            }
            settled.insert(v);
            for w in self.neighbours(graph, &v) {
                if settled.contains(&w) {
                    continue;
                }
                let candidate = cost + distance(v.point(), w.point());
                if queue.push_or_decrease(w, candidate) {
                    parents.insert(w, v);
                }
            }
        }

        let Some(destination) = reached else {
            debug!(
                origin = %self.origin,
                destination = %self.destination,
                "destination unreachable"
            );
            return Err(PathError::Unreachable.into());
        };

        let mut edges = Vec::new();
        let mut current = destination;
        while current != origin {
            let parent = *parents.get(&current).ok_or(PathError::Unreachable)?;
            edges.push(Edge::new(parent, current));
            current = parent;
        }
        edges.reverse();

        let path = Path::from_edges(edges);
        debug!(edges = path.len(), length = path.length(), "shortest path found");
        Ok(path)
    }

    fn resolve(&self, graph: &Graph, vertex: &Vertex) -> Vertex {
        graph
            .resolve(vertex)
            .or_else(|| self.extra.and_then(|extra| extra.resolve(vertex)))
            .unwrap_or(*vertex)
    }

    fn neighbours(&self, graph: &Graph, vertex: &Vertex) -> Vec<Vertex> {
        let mut neighbours = graph.adjacent_vertices(vertex);
        if let Some(extra) = self.extra {
            neighbours.extend(extra.adjacent_vertices(vertex));
        }
        neighbours
    }
}
