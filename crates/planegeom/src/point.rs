//! 2D Euclidean point.

use std::cmp::Ordering;
use std::fmt;
use std::ops::*;

use approx::AbsDiffEq;
use float_ord::FloatOrd;

use crate::{EPSILON, Float, Vector};

/// 2D Euclidean point.
///
/// Equality is exact. Points additionally have a lexicographic total order
/// (X first, then Y) exposed through [`Point::lex_cmp()`], which is what the
/// intersection engine uses to canonicalize its inputs.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
}

impl Point {
    /// Origin point.
    pub const ORIGIN: Point = Point::new(0.0, 0.0);
    /// Sentinel for an indeterminate result, such as the centroid of nothing.
    pub const INVALID: Point = Point::new(Float::NAN, Float::NAN);

    /// Constructs a point from its coordinates.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns whether neither coordinate is NaN.
    pub fn is_valid(self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }

    /// Returns the vector from the origin to the point.
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }
    /// Returns the point at the tip of `v` placed at the origin.
    pub fn from_vector(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }

    /// Compares two points by X, then by Y.
    ///
    /// This is a total order. `-0.0` and `0.0` compare equal, so the result
    /// is `Equal` exactly when the points are `==` (or share NaN bits).
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
    fn sort_key(self) -> (FloatOrd<Float>, FloatOrd<Float>) {
        // Adding positive zero turns negative zero into positive zero.
        (FloatOrd(self.x + 0.0), FloatOrd(self.y + 0.0))
    }

    /// Returns the distance between two points.
    pub fn distance(self, other: Point) -> Float {
        (other - self).mag()
    }
    /// Returns the squared distance between two points.
    pub fn distance_squared(self, other: Point) -> Float {
        (other - self).mag2()
    }

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

impl From<(Float, Float)> for Point {
    fn from((x, y): (Float, Float)) -> Self {
        Point::new(x, y)
    }
}
impl From<[Float; 2]> for Point {
    fn from([x, y]: [Float; 2]) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}
impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl AbsDiffEq for Point {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_cmp() {
        let a = Point::new(0.0, 5.0);
        let b = Point::new(1.0, -5.0);
        let c = Point::new(1.0, 2.0);
        assert_eq!(a.lex_cmp(&b), Ordering::Less);
        assert_eq!(b.lex_cmp(&c), Ordering::Less);
        assert_eq!(c.lex_cmp(&a), Ordering::Greater);
        assert_eq!(c.lex_cmp(&c), Ordering::Equal);

        // Signed zeros are equal under `==`, so they must be equal here too.
        assert_eq!(Point::new(-0.0, 0.0).lex_cmp(&Point::ORIGIN), Ordering::Equal);
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(4.0, 6.0);
        assert_eq!(q - p, Vector::new(3.0, 4.0));
        assert_eq!(p + Vector::new(3.0, 4.0), q);
        assert_eq!(p.distance(q), 5.0);
        assert_eq!(p.distance_squared(q), 25.0);
        assert_eq!(p.midpoint(q), Point::new(2.5, 4.0));
    }

    #[test]
    fn test_validity() {
        assert!(Point::ORIGIN.is_valid());
        assert!(!Point::INVALID.is_valid());
        assert!(!Point::new(1.0, Float::NAN).is_valid());
        assert!(Point::new(Float::INFINITY, 0.0).is_valid());
    }
}
