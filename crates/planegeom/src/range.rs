//! Closed 1D intervals and their relation algebra.
//!
//! The relations follow the dimensionally extended nine-intersection model
//! restricted to a single axis. A range with `low < high` is 1-dimensional,
//! with interior `(low, high)` and boundary `{low, high}`. A degenerate range
//! with `low == high` is 0-dimensional, and its interior is its single value.

use std::fmt;

use approx::AbsDiffEq;

use crate::{EPSILON, Float};

/// Closed interval `[low, high]` with `low <= high`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Range {
    low: Float,
    high: Float,
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl Range {
    /// Range covering the whole real line.
    pub const ALL: Range = Range {
        low: Float::NEG_INFINITY,
        high: Float::INFINITY,
    };

    /// Constructs a range between two values, in either order.
    pub fn new(a: Float, b: Float) -> Self {
        if b < a {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }
    /// Constructs a degenerate range containing a single value.
    pub const fn point(x: Float) -> Self {
        Self { low: x, high: x }
    }

    /// Returns the lower bound.
    pub fn low(&self) -> Float {
        self.low
    }
    /// Returns the upper bound.
    pub fn high(&self) -> Float {
        self.high
    }
    /// Returns the length of the range.
    pub fn magnitude(&self) -> Float {
        self.high - self.low
    }
    /// Returns the midpoint of the range.
    pub fn mid(&self) -> Float {
        (self.low + self.high) * 0.5
    }
    /// Returns whether the range contains only a single value.
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// Returns whether `x` is in the range, including its bounds.
    pub fn contains_value(&self, x: Float) -> bool {
        self.low <= x && x <= self.high
    }
    /// Returns the closest value to `x` in the range.
    pub fn clamp(&self, x: Float) -> Float {
        if x < self.low {
            self.low
        } else if x > self.high {
            self.high
        } else {
            x
        }
    }

    /// Returns the smallest range containing both ranges.
    #[must_use]
    pub fn encompass(&self, other: &Range) -> Range {
        Range {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }
    /// Returns the smallest range containing both the range and `x`.
    #[must_use]
    pub fn encompass_value(&self, x: Float) -> Range {
        Range {
            low: self.low.min(x),
            high: self.high.max(x),
        }
    }
    /// Returns the range common to both ranges, or `None` if they are
    /// disjoint.
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        self.intersects(other).then(|| Range {
            low: self.low.max(other.low),
            high: self.high.min(other.high),
        })
    }
    /// Returns the range scaled by `factor` about its midpoint.
    ///
    /// A negative factor is treated the same as its absolute value.
    #[must_use]
    pub fn scale(&self, factor: Float) -> Range {
        let mid = self.mid();
        let half = self.magnitude() * factor * 0.5;
        Range::new(mid - half, mid + half)
    }

    /// Returns whether the ranges have identical bounds.
    pub fn equals(&self, other: &Range) -> bool {
        self == other
    }
    /// Returns whether the ranges share at least one value.
    pub fn intersects(&self, other: &Range) -> bool {
        self.low <= other.high && other.low <= self.high
    }
    /// Returns whether the ranges share no value.
    pub fn disjoint(&self, other: &Range) -> bool {
        !self.intersects(other)
    }
    /// Returns whether the interiors of the ranges share a value.
    pub fn interiors_intersect(&self, other: &Range) -> bool {
        match (self.is_degenerate(), other.is_degenerate()) {
            (false, false) => self.low < other.high && other.low < self.high,
            (true, false) => other.low < self.low && self.low < other.high,
            (false, true) => self.low < other.low && other.low < self.high,
            (true, true) => self.low == other.low,
        }
    }
    /// Returns whether the ranges meet only at a boundary value.
    pub fn touches(&self, other: &Range) -> bool {
        self.intersects(other) && !self.interiors_intersect(other)
    }
    /// Returns whether `other` lies entirely inside the range, bounds
    /// included.
    pub fn contains(&self, other: &Range) -> bool {
        self.low <= other.low && other.high <= self.high
    }
    /// Returns whether the range lies entirely inside `other`, bounds
    /// included.
    pub fn within(&self, other: &Range) -> bool {
        other.contains(self)
    }
    /// Returns whether both ranges have positive length and share a stretch
    /// of positive length, without either containing the other.
    pub fn overlaps(&self, other: &Range) -> bool {
        !self.is_degenerate()
            && !other.is_degenerate()
            && self.interiors_intersect(other)
            && !self.contains(other)
            && !self.within(other)
    }
    /// Returns whether the ranges cross, which never happens on a single
    /// axis.
    ///
    /// Crossing requires the interiors to meet in a set of lower dimension
    /// than the larger operand while each operand has interior outside the
    /// other. Two intervals on the same line always meet in an interval, and
    /// a single value cannot be both inside and outside another range.
    pub fn crosses(&self, _other: &Range) -> bool {
        false
    }

    /// Returns the gap between the ranges, or zero if they intersect.
    pub fn distance(&self, other: &Range) -> Float {
        if self.intersects(other) {
            0.0
        } else {
            Float::max(other.low - self.high, self.low - other.high)
        }
    }
    /// Returns the squared gap between the ranges, or zero if they intersect.
    pub fn distance_squared(&self, other: &Range) -> Float {
        let d = self.distance(other);
        d * d
    }
    /// Returns the distance from `x` to the nearest value in the range.
    pub fn distance_to_value(&self, x: Float) -> Float {
        (x - self.clamp(x)).abs()
    }
}

impl AbsDiffEq for Range {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.low.abs_diff_eq(&other.low, epsilon) && self.high.abs_diff_eq(&other.high, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalizes_bounds() {
        let r = Range::new(5.0, -1.0);
        assert_eq!(r.low(), -1.0);
        assert_eq!(r.high(), 5.0);
        assert_eq!(r.magnitude(), 6.0);
        assert_eq!(r.mid(), 2.0);
    }

    #[test]
    fn test_shared_boundary_touches() {
        let a = Range::new(0.0, 5.0);
        let b = Range::new(5.0, 8.0);
        assert!(a.intersects(&b));
        assert!(a.touches(&b));
        assert!(b.touches(&a));
        assert!(!a.overlaps(&b));
        assert!(!a.disjoint(&b));
        assert_eq!(a.distance(&b), 0.0);

        let c = Range::new(6.0, 8.0);
        assert!(!a.intersects(&c));
        assert!(a.disjoint(&c));
        assert_eq!(a.distance(&c), 1.0);
        assert_eq!(c.distance(&a), 1.0);
        assert_eq!(c.distance_squared(&Range::new(-1.0, 0.0)), 36.0);
    }

    #[test]
    fn test_containment() {
        let outer = Range::new(0.0, 10.0);
        let inner = Range::new(2.0, 3.0);
        assert!(outer.contains(&inner));
        assert!(inner.within(&outer));
        assert!(!outer.within(&inner));
        assert!(!outer.overlaps(&inner));
        assert!(!outer.touches(&inner));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_overlaps() {
        let a = Range::new(0.0, 5.0);
        let b = Range::new(3.0, 8.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert_eq!(a.intersection(&b), Some(Range::new(3.0, 5.0)));
    }

    #[test]
    fn test_degenerate_ranges() {
        let interval = Range::new(0.0, 4.0);
        let inside = Range::point(2.0);
        let at_end = Range::point(4.0);

        assert!(inside.within(&interval));
        assert!(!inside.touches(&interval));
        assert!(!inside.overlaps(&interval));

        assert!(at_end.touches(&interval));
        assert!(interval.touches(&at_end));

        assert!(!inside.touches(&inside));
        assert!(inside.equals(&inside));
        assert!(!inside.overlaps(&inside));
        assert!(!inside.crosses(&interval));
    }

    #[test]
    fn test_encompass_and_scale() {
        let a = Range::new(0.0, 2.0);
        assert_eq!(a.encompass(&Range::new(5.0, 6.0)), Range::new(0.0, 6.0));
        assert_eq!(a.encompass_value(-3.0), Range::new(-3.0, 2.0));
        assert_eq!(a.scale(3.0), Range::new(-2.0, 4.0));
        assert_eq!(a.scale(-1.0), a);
        assert_eq!(a.intersection(&Range::new(3.0, 4.0)), None);
        assert_eq!(a.distance_to_value(5.0), 3.0);
        assert_eq!(a.distance_to_value(1.0), 0.0);
    }
}
