mod dijkstra;
mod priority_queue;
mod shortest_path;

pub use dijkstra::Dijkstra;
pub use priority_queue::MinPriorityQueue;
pub use shortest_path::ShortestPath;

use crate::graph::{Edge, Vertex};

/// An ordered chain of edges from an origin to a destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    edges: Vec<Edge>,
}

impl Path {
    /// Wraps edges already chained end to start.
    #[must_use]
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Visited vertices, origin first. Empty for an empty path.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        let Some(first) = self.edges.first() else {
            return Vec::new();
        };
        std::iter::once(*first.start())
            .chain(self.edges.iter().map(|e| *e.end()))
            .collect()
    }

    /// Total length, `z` included.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.edges.iter().map(Edge::length).sum()
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vertices_and_length() {
        let a = Vertex::from_xyz(0.0, 0.0, 0.0);
        let b = Vertex::from_xyz(3.0, 4.0, 0.0);
        let c = Vertex::from_xyz(3.0, 10.0, 0.0);
        let path = Path::from_edges(vec![Edge::new(a, b), Edge::new(b, c)]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.vertices(), vec![a, b, c]);
        assert_abs_diff_eq!(path.length(), 11.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_path() {
        let path = Path::default();
        assert!(path.is_empty());
        assert!(path.vertices().is_empty());
        assert_abs_diff_eq!(path.length(), 0.0);
    }
}
