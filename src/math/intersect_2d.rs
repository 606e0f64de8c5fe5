use super::distance_2d::{on_segment, planar_distance};
use super::predicates::{orientation, Orientation};
use super::{Point3, Vector3, TOLERANCE};

/// Result of a bounded segment-segment intersection in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments are disjoint.
    None,
    /// The segments meet in a single point.
    Point(Point3),
    /// The segments are collinear and share a stretch of positive length.
    Overlap(Point3, Point3),
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Lines count as parallel when the sine of their angle is within [`TOLERANCE`].
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point3,
    d1: &Vector3,
    p2: &Point3,
    d2: &Vector3,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    let scale = d1.xy().norm() * d2.xy().norm();
    if scale < TOLERANCE || cross.abs() <= TOLERANCE * scale {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Whether the segments `p1 → q1` and `p2 → q2` intersect in the XY plane.
///
/// Touching at an endpoint and collinear overlap both count.
#[must_use]
pub fn segments_intersect(p1: &Point3, q1: &Point3, p2: &Point3, q2: &Point3) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p2, p1, q1))
        || (o2 == Orientation::Collinear && on_segment(q2, p1, q1))
        || (o3 == Orientation::Collinear && on_segment(p1, p2, q2))
        || (o4 == Orientation::Collinear && on_segment(q1, p2, q2))
}

/// Classifies the intersection of segments `a0 → a1` and `b0 → b1`.
///
/// Returned points lie on the first segment, so they carry its interpolated `z`.
#[must_use]
pub fn segment_intersection(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
) -> SegmentIntersection {
    if !segments_intersect(a0, a1, b0, b1) {
        return SegmentIntersection::None;
    }

    let da = a1 - a0;
    let db = b1 - b0;
    let len_sq = da.x * da.x + da.y * da.y;
    if len_sq < TOLERANCE * TOLERANCE {
        return SegmentIntersection::Point(*a0);
    }

    let collinear = orientation(a0, a1, b0) == Orientation::Collinear
        && orientation(a0, a1, b1) == Orientation::Collinear;
    if collinear {
        let param = |p: &Point3| ((p.x - a0.x) * da.x + (p.y - a0.y) * da.y) / len_sq;
        let (tb0, tb1) = (param(b0), param(b1));
        let t0 = tb0.min(tb1).max(0.0);
        let t1 = tb0.max(tb1).min(1.0);
        let start = a0 + da * t0;
        let end = a0 + da * t1;
        if planar_distance(&start, &end) <= TOLERANCE {
            return SegmentIntersection::Point(start);
        }
        return SegmentIntersection::Overlap(start, end);
    }

    // Exact endpoints first so shared vertices come back unchanged.
    if on_segment(a0, b0, b1) {
        return SegmentIntersection::Point(*a0);
    }
    if on_segment(a1, b0, b1) {
        return SegmentIntersection::Point(*a1);
    }
    if on_segment(b0, a0, a1) {
        return SegmentIntersection::Point(Point3::new(b0.x, b0.y, z_along(a0, a1, b0)));
    }
    if on_segment(b1, a0, a1) {
        return SegmentIntersection::Point(Point3::new(b1.x, b1.y, z_along(a0, a1, b1)));
    }

    match line_line_intersect_2d(a0, &da, b0, &db) {
        Some((t, _)) => SegmentIntersection::Point(a0 + da * t.clamp(0.0, 1.0)),
        None => SegmentIntersection::None,
    }
}

/// Distance from `centre` to where the line `centre → target` meets the line
/// through `a` and `b`.
///
/// Returns `0.0` for parallel lines. When `centre` or `target` lies on the
/// segment `a → b`, that point is used directly.
#[must_use]
pub fn line_intersection_distance(centre: &Point3, target: &Point3, a: &Point3, b: &Point3) -> f64 {
    if on_segment(centre, a, b) {
        return 0.0;
    }
    if on_segment(target, a, b) {
        return planar_distance(centre, target);
    }
    let d1 = target - centre;
    let d2 = b - a;
    match line_line_intersect_2d(centre, &d1, a, &d2) {
        Some((t, _)) => planar_distance(centre, &(centre + d1 * t)),
        None => 0.0,
    }
}

/// `z` of the point on `a → b` whose XY projection is closest to `p`.
fn z_along(a: &Point3, b: &Point3, p: &Point3) -> f64 {
    let d = b - a;
    let len_sq = d.x * d.x + d.y * d.y;
    if len_sq < TOLERANCE * TOLERANCE {
        return a.z;
    }
    let t = (((p.x - a.x) * d.x + (p.y - a.y) * d.y) / len_sq).clamp(0.0, 1.0);
    a.z + d.z * t
}
