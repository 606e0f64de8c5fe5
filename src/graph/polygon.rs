use std::fmt;

use crate::error::{GeometryError, GraphError, Result};
use crate::math::{locate_point, on_segment, Point3, PointLocation};

use super::edge::Edge;
use super::vertex::{Owner, Vertex};

/// Identifier of a polygon inside a graph's polygon registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonId(pub usize);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A ring of vertices acting as an outer boundary or as a hole.
///
/// Movement is allowed inside a boundary polygon and forbidden inside a hole.
/// A two-vertex polygon is an open wall with no interior; it stays open when
/// vertices are inserted into it.
#[derive(Debug, Clone)]
pub struct Polygon {
    id: PolygonId,
    boundary: bool,
    closed: bool,
    vertices: Vec<Vertex>,
}

impl Polygon {
    /// Creates a polygon from its ring of points.
    ///
    /// Repeated consecutive points and a closing point equal to the first one
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if fewer than two distinct points remain.
    pub fn new(
        id: PolygonId,
        points: impl IntoIterator<Item = Point3>,
        boundary: bool,
    ) -> Result<Self> {
        let owner = Owner {
            polygon: id,
            boundary,
        };
        let mut vertices: Vec<Vertex> = Vec::new();
        for point in points {
            let vertex = Vertex::owned(point, owner);
            if vertices.last() != Some(&vertex) {
                vertices.push(vertex);
            }
        }
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "polygon {id} needs at least two distinct vertices"
            ))
            .into());
        }
        Ok(Self {
            id,
            boundary,
            closed: vertices.len() > 2,
            vertices,
        })
    }

    #[must_use]
    pub fn id(&self) -> PolygonId {
        self.id
    }

    /// Whether this polygon is an outer boundary rather than a hole.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.boundary
    }

    /// Whether the last vertex links back to the first one.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        self.vertices.iter().map(|v| *v.point()).collect()
    }

    /// Returns the ring edges in order. Open walls have no closing edge.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        let count = if self.closed { n } else { n - 1 };
        (0..count)
            .map(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Whether `v` is one of the ring vertices.
    #[must_use]
    pub fn has_vertex(&self, v: &Vertex) -> bool {
        self.vertices.contains(v)
    }

    #[must_use]
    pub fn locate(&self, p: &Point3) -> PointLocation {
        if self.closed {
            return locate_point(p, &self.points());
        }
        let on_wall = self
            .vertices
            .windows(2)
            .any(|w| on_segment(p, w[0].point(), w[1].point()));
        if on_wall {
            PointLocation::OnBoundary
        } else {
            PointLocation::Outside
        }
    }

    /// Whether `p` is inside the polygon or on its boundary.
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        self.locate(p) != PointLocation::Outside
    }

    /// Whether `p` is strictly inside the polygon.
    #[must_use]
    pub fn contains_strictly(&self, p: &Point3) -> bool {
        self.locate(p) == PointLocation::Inside
    }

    /// Inserts `point` into the ring, splitting `edge` in two.
    ///
    /// Returns the owned vertex now stored in the ring. A point that already
    /// is a ring vertex is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::EdgeNotInPolygon` if `edge` is not a ring edge.
    pub fn insert_vertex(&mut self, point: Point3, edge: &Edge) -> Result<Vertex> {
        let vertex = Vertex::owned(point, self.owner());
        if let Some(existing) = self.vertices.iter().find(|v| **v == vertex) {
            return Ok(*existing);
        }
        let position = self.edges().iter().position(|ring_edge| ring_edge == edge);
        if let Some(i) = position {
            self.vertices.insert(i + 1, vertex);
            return Ok(vertex);
        }
        Err(GraphError::EdgeNotInPolygon { polygon: self.id }.into())
    }

    /// Returns a copy renumbered to `id`, including its vertices' owners.
    #[must_use]
    pub fn with_id(&self, id: PolygonId) -> Self {
        let owner = Owner {
            polygon: id,
            boundary: self.boundary,
        };
        Self {
            id,
            boundary: self.boundary,
            closed: self.closed,
            vertices: self
                .vertices
                .iter()
                .map(|v| v.with_owner(Some(owner)))
                .collect(),
        }
    }

    fn owner(&self) -> Owner {
        Owner {
            polygon: self.id,
            boundary: self.boundary,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn square(id: usize) -> Polygon {
        Polygon::new(
            PolygonId(id),
            [p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)],
            false,
        )
        .unwrap()
    }

    #[test]
    fn closing_point_is_dropped() {
        let poly = Polygon::new(
            PolygonId(0),
            [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)],
            false,
        )
        .unwrap();
        assert_eq!(poly.vertices().len(), 3);
        assert_eq!(poly.edges().len(), 3);
    }

    #[test]
    fn vertices_carry_owner() {
        let poly = square(4);
        assert!(poly
            .vertices()
            .iter()
            .all(|v| v.owner().is_some_and(|o| o.polygon == PolygonId(4) && !o.boundary)));
    }

    #[test]
    fn degenerate_polygon_fails() {
        assert!(Polygon::new(PolygonId(0), [p(1.0, 1.0), p(1.0, 1.0)], true).is_err());
        assert!(Polygon::new(PolygonId(0), Vec::new(), true).is_err());
    }

    #[test]
    fn wall_has_single_edge() {
        let wall = Polygon::new(PolygonId(0), [p(0.0, 0.0), p(5.0, 0.0)], false).unwrap();
        assert_eq!(wall.edges().len(), 1);
        assert!(!wall.contains_strictly(&p(2.0, 0.0)));
    }

    #[test]
    fn containment() {
        let poly = square(0);
        assert!(poly.contains(&p(5.0, 5.0)));
        assert!(poly.contains(&p(0.0, 5.0)));
        assert!(!poly.contains_strictly(&p(0.0, 5.0)));
        assert!(!poly.contains(&p(-1.0, 5.0)));
    }

    #[test]
    fn insert_vertex_splits_edge() {
        let mut poly = square(0);
        let edge = Edge::from_points(p(10.0, 10.0), p(10.0, 0.0));
        let inserted = poly.insert_vertex(p(10.0, 5.0), &edge).unwrap();
        assert_eq!(inserted.polygon_id(), Some(PolygonId(0)));
        assert_eq!(poly.vertices().len(), 5);
        assert_eq!(poly.vertices()[3], Vertex::new(p(10.0, 5.0)));
        assert!(!poly.edges().contains(&edge));
        assert!(poly
            .edges()
            .contains(&Edge::from_points(p(10.0, 10.0), p(10.0, 5.0))));
    }

    #[test]
    fn insert_vertex_on_foreign_edge_fails() {
        let mut poly = square(0);
        let edge = Edge::from_points(p(20.0, 0.0), p(30.0, 0.0));
        assert!(poly.insert_vertex(p(25.0, 0.0), &edge).is_err());
    }

    #[test]
    fn wall_stays_open_after_insertion() {
        let mut wall = Polygon::new(PolygonId(0), [p(0.0, 0.0), p(10.0, 0.0)], false).unwrap();
        let edge = Edge::from_points(p(0.0, 0.0), p(10.0, 0.0));
        wall.insert_vertex(p(5.0, 0.0), &edge).unwrap();
        assert!(!wall.is_closed());
        assert_eq!(wall.vertices().len(), 3);
        let edges = wall.edges();
        assert_eq!(edges.len(), 2);
        assert!(!edges.contains(&edge));
        assert!(wall.contains(&p(7.0, 0.0)));
        assert!(!wall.contains_strictly(&p(7.0, 0.0)));

        let closing = Edge::from_points(p(10.0, 0.0), p(0.0, 0.0));
        assert!(wall.insert_vertex(p(3.0, 0.0), &closing).is_err());
    }

    #[test]
    fn with_id_renumbers_owners() {
        let poly = square(0).with_id(PolygonId(9));
        assert_eq!(poly.id(), PolygonId(9));
        assert!(poly
            .vertices()
            .iter()
            .all(|v| v.polygon_id() == Some(PolygonId(9))));
    }
}
