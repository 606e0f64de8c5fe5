use std::hash::{Hash, Hasher};

use crate::math::{distance, on_segment, point_to_segment_distance, Point3};

use super::vertex::{Vertex, VertexKey};

slotmap::new_key_type! {
    /// Unique identifier for an edge inside one graph arena.
    pub struct EdgeId;
}

/// An undirected segment between two vertices.
///
/// Equality and hashing ignore direction: `a → b` equals `b → a`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    start: Vertex,
    end: Vertex,
}

impl Edge {
    /// Creates an edge from `start` to `end`.
    #[must_use]
    pub fn new(start: Vertex, end: Vertex) -> Self {
        Self { start, end }
    }

    /// Creates an edge between two free vertices.
    #[must_use]
    pub fn from_points(start: Point3, end: Point3) -> Self {
        Self::new(Vertex::new(start), Vertex::new(end))
    }

    #[must_use]
    pub fn start(&self) -> &Vertex {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Vertex {
        &self.end
    }

    /// Euclidean length, `z` included.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(self.start.point(), self.end.point())
    }

    /// Whether the two endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Whether `v` is one of the endpoints.
    #[must_use]
    pub fn has_endpoint(&self, v: &Vertex) -> bool {
        self.start == *v || self.end == *v
    }

    /// Whether `p` lies on the segment (XY projection).
    #[must_use]
    pub fn contains_point(&self, p: &Point3) -> bool {
        on_segment(p, self.start.point(), self.end.point())
    }

    /// XY distance from `p` to the segment.
    #[must_use]
    pub fn distance_to(&self, p: &Point3) -> f64 {
        point_to_segment_distance(p, self.start.point(), self.end.point())
    }

    /// Returns the endpoint opposite to `v`.
    ///
    /// When `v` is not an endpoint the start vertex is returned.
    #[must_use]
    pub fn other(&self, v: &Vertex) -> Vertex {
        if self.start == *v {
            self.end
        } else {
            self.start
        }
    }

    /// Returns the same edge walked the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    fn key(&self) -> (VertexKey, VertexKey) {
        let (a, b) = (self.start.key(), self.end.key());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
