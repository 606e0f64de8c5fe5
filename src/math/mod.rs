pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod predicates;

pub use distance_2d::{distance, on_segment, planar_distance, point_to_segment_distance};
pub use intersect_2d::{
    line_intersection_distance, segment_intersection, segments_intersect, SegmentIntersection,
};
pub use polygon_2d::{
    angle_at, angle_ccw, locate_point, midpoint, sort_radially, translate, PointLocation,
};
pub use predicates::{orientation, orientation_in, Orientation, Projection};

/// 3D point type. Visibility tests only look at the XY projection.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance, in length units.
///
/// Every distance, orientation and ordering comparison in the crate goes
/// through this value, including vertex identity (see [`quantize`]).
pub const TOLERANCE: f64 = 1e-9;

/// Quantizes a point to integer grid coordinates with cell size [`TOLERANCE`].
///
/// Vertex equality and hashing both derive from this key, so two points that
/// compare equal always hash equal.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn quantize(p: &Point3) -> (i64, i64, i64) {
    const INV_GRID: f64 = 1.0 / TOLERANCE;
    (
        (p.x * INV_GRID).round() as i64,
        (p.y * INV_GRID).round() as i64,
        (p.z * INV_GRID).round() as i64,
    )
}
