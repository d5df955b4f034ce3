//! Weighted centroid accumulator.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::{EPSILON, Float, Point, Segment, Vector};

/// Center of mass of a collection of points and segments, together with the
/// total mass.
///
/// Points are weighted by count and segments by length. Mixing the two is
/// allowed but rarely meaningful.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Centroid {
    /// Center of mass, scaled by `weight`.
    weighted_center: Vector,
    /// Total mass.
    weight: Float,
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with weight {}", self.center(), self.weight)
    }
}

impl Add for Centroid {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for Centroid {
    fn add_assign(&mut self, rhs: Centroid) {
        self.weighted_center += rhs.weighted_center;
        self.weight += rhs.weight;
    }
}

impl Sum for Centroid {
    fn sum<I: Iterator<Item = Centroid>>(iter: I) -> Self {
        iter.fold(Centroid::ZERO, Add::add)
    }
}

impl Centroid {
    /// Zero centroid.
    pub const ZERO: Self = Centroid {
        weighted_center: Vector::ZERO,
        weight: 0.0,
    };

    /// Constructs a new weighted centroid.
    pub fn new(center: Point, weight: Float) -> Self {
        Centroid {
            weighted_center: center.to_vector() * weight,
            weight,
        }
    }
    /// Constructs a centroid for a single point with unit weight.
    pub fn from_point(p: Point) -> Self {
        Self::new(p, 1.0)
    }
    /// Constructs a centroid for a segment, which is its midpoint weighted by
    /// its length.
    pub fn from_segment(segment: &Segment) -> Self {
        Self::new(segment.midpoint(), segment.magnitude())
    }

    /// Returns the centroid point, or [`Point::INVALID`] if the weight is
    /// zero.
    pub fn center(&self) -> Point {
        if self.weight > EPSILON {
            Point::from_vector(self.weighted_center / self.weight)
        } else {
            Point::INVALID
        }
    }
    /// Returns the weight.
    pub fn weight(&self) -> Float {
        self.weight
    }
    /// Returns whether the weight is zero.
    pub fn is_zero(&self) -> bool {
        approx::abs_diff_eq!(self.weight, 0.0, epsilon = EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_of_segments() {
        let segments = [
            Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0)),
            Segment::new(Point::new(4.0, 0.0), Point::new(4.0, 2.0)),
        ];
        let c: Centroid = segments.iter().map(Centroid::from_segment).sum();
        assert_eq!(c.weight(), 6.0);
        // (2, 0) weighted 4 and (4, 1) weighted 2.
        crate::assert_approx_eq!(c.center(), Point::new(8.0 / 3.0, 1.0 / 3.0));
    }

    #[test]
    fn test_centroid_of_points() {
        let c = Centroid::from_point(Point::new(1.0, 1.0))
            + Centroid::new(Point::new(4.0, 4.0), 2.0);
        assert_eq!(c.center(), Point::new(3.0, 3.0));
        assert_eq!(c.weight(), 3.0);
    }

    #[test]
    fn test_empty_centroid() {
        let c: Centroid = std::iter::empty().sum();
        assert!(c.is_zero());
        assert!(!c.center().is_valid());
        assert_eq!(c, Centroid::ZERO);

        let degenerate = Centroid::from_segment(&Segment::new(Point::ORIGIN, Point::ORIGIN));
        assert!(degenerate.is_zero());
        assert!(!degenerate.center().is_valid());
    }
}
