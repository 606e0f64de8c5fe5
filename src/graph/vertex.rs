use std::fmt;
use std::hash::{Hash, Hasher};

use crate::math::{quantize, Point3};

use super::polygon::PolygonId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex inside one graph arena.
    pub struct VertexId;
}

/// Quantized coordinates backing vertex equality and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexKey(i64, i64, i64);

/// Polygon a vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Owner {
    /// Id of the owning polygon.
    pub polygon: PolygonId,
    /// `true` for an outer boundary, `false` for a hole.
    pub boundary: bool,
}

/// A point, optionally owned by a polygon.
///
/// Two vertices are equal when their coordinates fall in the same
/// [`TOLERANCE`](crate::math::TOLERANCE) grid cell; the owner does not take
/// part in equality.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    point: Point3,
    owner: Option<Owner>,
}

impl Vertex {
    /// Creates a free vertex at `point`.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point, owner: None }
    }

    /// Creates a free vertex from coordinates.
    #[must_use]
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Creates a vertex owned by a polygon.
    #[must_use]
    pub fn owned(point: Point3, owner: Owner) -> Self {
        Self {
            point,
            owner: Some(owner),
        }
    }

    /// Returns the position of the vertex.
    #[must_use]
    pub fn point(&self) -> &Point3 {
        &self.point
    }

    /// Returns the owning polygon, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Owner> {
        self.owner
    }

    #[must_use]
    pub fn polygon_id(&self) -> Option<PolygonId> {
        self.owner.map(|o| o.polygon)
    }

    /// Returns a copy with a different owner.
    #[must_use]
    pub fn with_owner(self, owner: Option<Owner>) -> Self {
        Self { owner, ..self }
    }

    /// Returns the quantized identity key.
    #[must_use]
    pub fn key(&self) -> VertexKey {
        let (x, y, z) = quantize(&self.point);
        VertexKey(x, y, z)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Point3> for Vertex {
    fn from(point: Point3) -> Self {
        Self::new(point)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.point.x, self.point.y, self.point.z)
    }
}
