use super::{Point3, TOLERANCE};

/// Euclidean distance between two points, `z` included.
#[must_use]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    nalgebra::distance(a, b)
}

/// Distance between the XY projections of two points.
#[must_use]
pub fn planar_distance(a: &Point3, b: &Point3) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Returns the minimum XY distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_distance(p: &Point3, a: &Point3, b: &Point3) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < TOLERANCE * TOLERANCE {
        return planar_distance(p, a);
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;

    (p.x - closest_x).hypot(p.y - closest_y)
}

/// Whether `p` lies on the segment `a → b` (XY projection, within [`TOLERANCE`]).
#[must_use]
pub fn on_segment(p: &Point3, a: &Point3, b: &Point3) -> bool {
    point_to_segment_distance(p, a, b) <= TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        let d = point_to_segment_distance(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert_abs_diff_eq!(d, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_distance(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert_abs_diff_eq!(d, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_to_segment_distance(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn on_segment_interior_and_endpoints() {
        let a = p(0.0, 0.0);
        let b = p(4.0, 4.0);
        assert!(on_segment(&p(2.0, 2.0), &a, &b));
        assert!(on_segment(&a, &a, &b));
        assert!(on_segment(&b, &a, &b));
        assert!(!on_segment(&p(5.0, 5.0), &a, &b));
        assert!(!on_segment(&p(2.0, 2.1), &a, &b));
    }

    #[test]
    fn distance_includes_z_but_planar_does_not() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 12.0);
        assert_abs_diff_eq!(distance(&a, &b), 13.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(planar_distance(&a, &b), 5.0, epsilon = TOLERANCE);
    }
}
