//! Which side of an oriented line a point lies on.

use crate::{Float, Point, Vector};

/// Position of a point relative to an oriented line through the plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// The point is counterclockwise from the direction of the line.
    Left,
    /// The point is exactly on the line.
    On,
    /// The point is clockwise from the direction of the line.
    Right,
}

impl Side {
    /// Classifies a perp-dot product of `direction` with `point - origin`.
    ///
    /// Only an exact zero is `On`. NaN is classified as `On` so that it never
    /// takes part in a strict same-side rejection.
    pub fn from_perp_dot(h: Float) -> Self {
        if h > 0.0 {
            Side::Left
        } else if h < 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }

    /// Returns the side of `point` relative to the line through `origin`
    /// pointing along `direction`.
    pub fn of_point(origin: Point, direction: Vector, point: Point) -> Self {
        Self::from_perp_dot(direction.perp_dot(point - origin))
    }

    /// Returns whether both points are strictly on the same side, so that
    /// nothing between them can reach the line.
    pub fn strictly_same(self, other: Side) -> bool {
        self != Side::On && self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_of_point() {
        let o = Point::ORIGIN;
        let d = Vector::X;
        assert_eq!(Side::of_point(o, d, Point::new(5.0, 1.0)), Side::Left);
        assert_eq!(Side::of_point(o, d, Point::new(-5.0, -1.0)), Side::Right);
        assert_eq!(Side::of_point(o, d, Point::new(-5.0, 0.0)), Side::On);
        assert_eq!(Side::of_point(o, -d, Point::new(5.0, 1.0)), Side::Right);
    }

    #[test]
    fn test_strictly_same() {
        assert!(Side::Left.strictly_same(Side::Left));
        assert!(!Side::Left.strictly_same(Side::Right));
        assert!(!Side::On.strictly_same(Side::On));
    }
}
