use std::f64::consts::{PI, TAU};

use super::distance_2d::{on_segment, planar_distance};
use super::predicates::{orientation, Orientation};
use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Where a point lies relative to a polygon ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    OnBoundary,
    Outside,
}

/// Locates `point` against the closed ring `ring` in the XY plane.
///
/// Boundary hits are detected with [`TOLERANCE`] before the crossing count.
/// Rings with fewer than three vertices have no interior.
#[must_use]
pub fn locate_point(point: &Point3, ring: &[Point3]) -> PointLocation {
    let n = ring.len();
    if n == 0 {
        return PointLocation::Outside;
    }
    if n == 1 {
        return if planar_distance(point, &ring[0]) <= TOLERANCE {
            PointLocation::OnBoundary
        } else {
            PointLocation::Outside
        };
    }

    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        if on_segment(point, a, b) {
            return PointLocation::OnBoundary;
        }
    }
    if n < 3 {
        return PointLocation::Outside;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (ring[i].x, ring[i].y);
        let (xj, yj) = (ring[j].x, ring[j].y);
        if (yi > point.y) != (yj > point.y) && point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }

    if inside {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}

/// Moves `p` by `distance` along `direction`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `direction` has zero length.
pub fn translate(p: &Point3, direction: &Vector3, distance: f64) -> Result<Point3> {
    let len = direction.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(p + direction * (distance / len))
}

/// Counter-clockwise angle of `p` around `centre`, measured from `+x`, in `[0, 2π)`.
///
/// Points on the horizontal line through `centre` (within [`TOLERANCE`]) snap
/// to exactly `0` or `π`.
#[must_use]
pub fn angle_ccw(centre: &Point3, p: &Point3) -> f64 {
    let dx = p.x - centre.x;
    let dy = p.y - centre.y;
    if dy.abs() <= TOLERANCE {
        return if dx < 0.0 { PI } else { 0.0 };
    }
    let angle = dy.atan2(dx);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Unsigned angle at `vertex` between the directions to `a` and `b`, in `[0, π]`.
#[must_use]
pub fn angle_at(vertex: &Point3, a: &Point3, b: &Point3) -> f64 {
    let u = (a - vertex).xy();
    let v = (b - vertex).xy();
    if u.norm() < TOLERANCE || v.norm() < TOLERANCE {
        return 0.0;
    }
    let cross = u.x * v.y - u.y * v.x;
    cross.abs().atan2(u.dot(&v))
}

/// Sorts `items` by angle around `centre`, ties broken by ascending distance.
///
/// Items that are collinear with `centre` and on the same side of it form one
/// run and are ordered by distance, even when their computed angles differ in
/// the last bits.
pub fn sort_radially<T, F>(centre: &Point3, items: &mut [T], point: F)
where
    F: Fn(&T) -> Point3,
{
    items.sort_by(|a, b| angle_ccw(centre, &point(a)).total_cmp(&angle_ccw(centre, &point(b))));

    let mut start = 0;
    while start < items.len() {
        let anchor = point(&items[start]);
        let mut end = start + 1;
        while end < items.len() && same_direction(centre, &anchor, &point(&items[end])) {
            end += 1;
        }
        if end - start > 1 {
            items[start..end].sort_by(|a, b| {
                planar_distance(centre, &point(a)).total_cmp(&planar_distance(centre, &point(b)))
            });
        }
        start = end;
    }
}

fn same_direction(centre: &Point3, a: &Point3, b: &Point3) -> bool {
    let a_at_centre = planar_distance(centre, a) <= TOLERANCE;
    let b_at_centre = planar_distance(centre, b) <= TOLERANCE;
    if a_at_centre || b_at_centre {
        return a_at_centre && b_at_centre;
    }
    let da = (a - centre).xy();
    let db = (b - centre).xy();
    orientation(centre, a, b) == Orientation::Collinear && da.dot(&db) > 0.0
}
