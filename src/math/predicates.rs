//! Orientation predicates with the crate-wide tolerance.

use super::{Point3, TOLERANCE};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `c` lies to the left of the directed line `a → b`.
    CounterClockwise,
    /// `c` lies to the right of the directed line `a → b`.
    Clockwise,
    /// The three points are collinear within [`TOLERANCE`].
    Collinear,
}

/// Coordinate plane an orientation test is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Drop `z`.
    #[default]
    Xy,
    /// Drop `y`.
    Xz,
    /// Drop `x`.
    Yz,
}

impl Projection {
    fn project(self, p: &Point3) -> (f64, f64) {
        match self {
            Self::Xy => (p.x, p.y),
            Self::Xz => (p.x, p.z),
            Self::Yz => (p.y, p.z),
        }
    }
}

/// Orientation of `a`, `b`, `c` in the XY plane.
#[must_use]
pub fn orientation(a: &Point3, b: &Point3, c: &Point3) -> Orientation {
    orientation_in(a, b, c, Projection::Xy)
}

/// Orientation of `a`, `b`, `c` projected onto `plane`.
///
/// The triangle is collinear when its smallest height (twice the area over
/// the longest side) is within [`TOLERANCE`], which gives the same answer for
/// every permutation of the three points.
#[must_use]
pub fn orientation_in(a: &Point3, b: &Point3, c: &Point3, plane: Projection) -> Orientation {
    let (ax, ay) = plane.project(a);
    let (bx, by) = plane.project(b);
    let (cx, cy) = plane.project(c);

    let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);

    let ab = (bx - ax).hypot(by - ay);
    let bc = (cx - bx).hypot(cy - by);
    let ca = (ax - cx).hypot(ay - cy);
    let longest = ab.max(bc).max(ca);
    if longest < TOLERANCE {
        return Orientation::Collinear;
    }

    let height = cross / longest;
    if height > TOLERANCE {
        Orientation::CounterClockwise
    } else if height < -TOLERANCE {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn ccw_and_cw() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(1.0, 0.0, 0.0);
        assert_eq!(orientation(&a, &b, &p(0.5, 1.0, 0.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(&a, &b, &p(0.5, -1.0, 0.0)), Orientation::Clockwise);
    }

    #[test]
    fn near_collinear_within_tolerance() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(10.0, 0.0, 0.0);
        let c = p(5.0, TOLERANCE * 0.5, 0.0);
        assert_eq!(orientation(&a, &b, &c), Orientation::Collinear);
    }

    #[test]
    fn collinear_is_permutation_independent() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(1000.0, 0.0, 0.0);
        let c = p(500.0, TOLERANCE * 0.9, 0.0);
        assert_eq!(orientation(&a, &b, &c), Orientation::Collinear);
        assert_eq!(orientation(&c, &a, &b), Orientation::Collinear);
        assert_eq!(orientation(&b, &c, &a), Orientation::Collinear);
    }

    #[test]
    fn coincident_points_are_collinear() {
        let a = p(1.0, 1.0, 0.0);
        assert_eq!(orientation(&a, &a, &a), Orientation::Collinear);
    }

    #[test]
    fn xy_projection_ignores_z() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(1.0, 0.0, 5.0);
        let c = p(0.0, 1.0, -3.0);
        assert_eq!(orientation(&a, &b, &c), Orientation::CounterClockwise);
    }

    #[test]
    fn xz_projection_uses_z() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(1.0, 7.0, 0.0);
        let c = p(0.0, -2.0, 1.0);
        assert_eq!(
            orientation_in(&a, &b, &c, Projection::Xz),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation_in(&a, &b, &c, Projection::Yz),
            Orientation::CounterClockwise
        );
    }
}
