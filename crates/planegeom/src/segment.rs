//! Bounded line segments.

use std::fmt;

use crate::canonical::{order, segment_order};
use crate::engine::{Bound, clip_spans, crossing_point, segment_contains_point, solve, span};
use crate::{Float, Geometry, Intersection, Intersects, Line, Mbr, Point, Side, Vector};

/// Line segment between two points.
///
/// The endpoints are not ordered, and they may be equal. A zero-length segment
/// behaves exactly like the point it sits on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.a, self.b)
    }
}

impl Segment {
    /// Constructs a segment between two points, in the given order.
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    /// Constructs a segment between two points, with the lexicographically
    /// lesser point first.
    pub fn canonical(a: Point, b: Point) -> Self {
        let (a, b) = order(a, b);
        Self { a, b }
    }

    /// Returns the vector from `a` to `b`.
    pub fn direction(&self) -> Vector {
        self.b - self.a
    }
    /// Returns the length of the segment.
    pub fn magnitude(&self) -> Float {
        self.a.distance(self.b)
    }
    /// Returns whether the endpoints are equal.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    /// Returns the point halfway between the endpoints.
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }
    /// Returns the same segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.b, self.a)
    }
    /// Returns the line through both endpoints, from `a` toward `b`.
    ///
    /// The line is invalid if the segment has zero length.
    pub fn to_line(&self) -> Line {
        Line::new(self.a, self.direction())
    }

    /// Returns the bounding rectangle.
    pub fn get_mbr(&self) -> Mbr {
        Mbr::new(self.a, self.b)
    }

    /// Returns the point `a + (b - a) * t`. `t` should be between 0 and 1.
    pub fn point_at(&self, t: Float) -> Point {
        self.a + self.direction() * t
    }
    /// Returns which side of the segment's line `q` is on, looking from `a`
    /// toward `b`.
    pub fn side_of(&self, q: Point) -> Side {
        Side::of_point(self.a, self.direction(), q)
    }
    /// Returns the point on the segment nearest to `q`.
    pub fn closest_point(&self, q: Point) -> Point {
        let d = self.direction();
        let t = d.dot(q - self.a);
        let mag2 = d.mag2();
        if t <= 0.0 {
            self.a
        } else if t >= mag2 {
            self.b
        } else {
            self.a + d * (t / mag2)
        }
    }
    /// Returns the squared distance from `q` to the nearest point of the
    /// segment.
    pub fn distance_squared(&self, q: Point) -> Float {
        self.closest_point(q).distance_squared(q)
    }
    /// Returns the distance from `q` to the nearest point of the segment.
    pub fn distance(&self, q: Point) -> Float {
        self.distance_squared(q).sqrt()
    }
}

impl Intersects<Point> for Segment {
    fn intersects(&self, other: &Point) -> bool {
        segment_contains_point(self.a, self.b, *other)
    }
}
impl Intersection<Point> for Segment {
    fn intersection(&self, other: &Point) -> Option<Geometry> {
        self.intersects(other).then_some(Geometry::Point(*other))
    }
}

impl Intersection<Segment> for Segment {
    fn intersection(&self, other: &Segment) -> Option<Geometry> {
        let (a, b, c, d) = segment_order(self.a, self.b, other.a, other.b);
        let point_if = |contained: bool, p: Point| contained.then_some(Geometry::Point(p));

        if a == b {
            return point_if(segment_contains_point(c, d, a), a);
        }
        if c == d {
            return point_if(segment_contains_point(a, b, c), c);
        }

        let (d0, d1) = (b - a, d - c);
        let side_c = Side::of_point(a, d0, c);
        let side_d = Side::of_point(a, d0, d);

        let Some(x) = solve(a, d0, c, d1) else {
            if side_c != Side::On {
                return None;
            }
            let (lo, hi) = span(Bound::project(a, d0, c), Bound::project(a, d0, d));
            return clip_spans(Bound::project(a, d0, a), Bound::project(a, d0, b), lo, hi);
        };

        // Each segment must reach both sides of the other's line. An endpoint
        // on the other line is the only candidate, so return it exactly.
        if side_c.strictly_same(side_d) {
            return None;
        }
        if side_c == Side::On {
            return point_if(segment_contains_point(a, b, c), c);
        }
        if side_d == Side::On {
            return point_if(segment_contains_point(a, b, d), d);
        }
        let side_a = Side::of_point(c, d1, a);
        let side_b = Side::of_point(c, d1, b);
        if side_a.strictly_same(side_b) {
            return None;
        }
        if side_a == Side::On {
            return point_if(segment_contains_point(c, d, a), a);
        }
        if side_b == Side::On {
            return point_if(segment_contains_point(c, d, b), b);
        }
        Some(Geometry::Point(crossing_point(a, d0, c, x)))
    }
}

impl_intersects_via_intersection! {
    impl Intersects<Segment> for Segment;
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn p(x: Float, y: Float) -> Point {
        Point::new(x, y)
    }
    fn seg(x0: Float, y0: Float, x1: Float, y1: Float) -> Segment {
        Segment::new(p(x0, y0), p(x1, y1))
    }

    /// Asserts that every orientation and argument order of the two segments
    /// gives the same result.
    fn assert_intersection(s0: Segment, s1: Segment, expected: Option<Geometry>) {
        for (l, r) in [(s0, s1), (s1, s0)] {
            for (l, r) in [l, l.reversed()]
                .into_iter()
                .cartesian_product([r, r.reversed()])
            {
                assert_eq!(l.intersection(&r), expected, "{l} with {r}");
                assert_eq!(l.intersects(&r), expected.is_some(), "{l} with {r}");
            }
        }
    }

    #[test]
    fn test_segment_crossing() {
        assert_intersection(
            seg(0.0, 0.0, 4.0, 0.0),
            seg(2.0, -2.0, 2.0, 2.0),
            Some(Geometry::Point(p(2.0, 0.0))),
        );
        assert_intersection(seg(0.0, 0.0, 4.0, 0.0), seg(5.0, -2.0, 5.0, 2.0), None);
        assert_intersection(seg(0.0, 0.0, 4.0, 4.0), seg(0.0, 1.0, 2.0, 5.0), None);
    }

    #[test]
    fn test_segment_endpoint_contact() {
        // T-junction.
        assert_intersection(
            seg(0.0, 0.0, 4.0, 0.0),
            seg(1.0, 0.0, 1.0, 3.0),
            Some(Geometry::Point(p(1.0, 0.0))),
        );
        // Shared endpoint at an angle.
        assert_intersection(
            seg(0.0, 0.0, 4.0, 0.0),
            seg(4.0, 0.0, 6.0, 3.0),
            Some(Geometry::Point(p(4.0, 0.0))),
        );
        // Endpoint on the other segment's line, but past its end.
        assert_intersection(seg(0.0, 0.0, 4.0, 0.0), seg(5.0, 0.0, 5.0, 3.0), None);

        // Endpoints that are not exactly representable come back unchanged.
        let a = p(0.1, 0.7);
        let b = p(0.3, 0.2);
        assert_intersection(
            Segment::new(a, b),
            seg(0.1, 0.7, -1.0, 3.0),
            Some(Geometry::Point(a)),
        );
    }

    #[test]
    fn test_segment_collinear() {
        assert_intersection(
            seg(0.0, 0.0, 4.0, 0.0),
            seg(1.0, 0.0, 3.0, 0.0),
            Some(Geometry::Segment(seg(1.0, 0.0, 3.0, 0.0))),
        );
        assert_intersection(
            seg(0.0, 0.0, 4.0, 4.0),
            seg(2.0, 2.0, 6.0, 6.0),
            Some(Geometry::Segment(seg(2.0, 2.0, 4.0, 4.0))),
        );
        assert_intersection(
            seg(0.0, 0.0, 0.0, 4.0),
            seg(0.0, 4.0, 0.0, 9.0),
            Some(Geometry::Point(p(0.0, 4.0))),
        );
        assert_intersection(seg(0.0, 0.0, 4.0, 0.0), seg(5.0, 0.0, 9.0, 0.0), None);
        // Parallel but not collinear.
        assert_intersection(seg(0.0, 0.0, 4.0, 0.0), seg(0.0, 1.0, 4.0, 1.0), None);

        let s = seg(3.0, -1.0, -2.0, 4.0);
        assert_intersection(s, s, Some(Geometry::Segment(Segment::canonical(s.a, s.b))));
    }

    #[test]
    fn test_segment_degenerate() {
        let dot = seg(2.0, 0.0, 2.0, 0.0);
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_intersection(s, dot, Some(Geometry::Point(p(2.0, 0.0))));
        assert_intersection(dot, dot, Some(Geometry::Point(p(2.0, 0.0))));
        assert_intersection(s, seg(2.0, 1.0, 2.0, 1.0), None);
        assert_eq!(s.intersection(&p(2.0, 0.0)), dot.intersection(&s));
    }

    #[test]
    fn test_segment_measures() {
        let s = seg(1.0, 1.0, 4.0, 5.0);
        assert_eq!(s.magnitude(), 5.0);
        assert_eq!(s.direction(), Vector::new(3.0, 4.0));
        assert_eq!(s.midpoint(), p(2.5, 3.0));
        assert_eq!(s.reversed(), seg(4.0, 5.0, 1.0, 1.0));
        assert_eq!(s.point_at(0.0), s.a);
        assert_eq!(s.point_at(1.0), s.b);
        assert_eq!(s.get_mbr(), Mbr::new(p(1.0, 1.0), p(4.0, 5.0)));
        assert!(s.to_line().intersects(&p(7.0, 9.0)));
        assert!(!seg(0.0, 0.0, 0.0, 0.0).to_line().is_valid());
        assert_eq!(s.side_of(p(0.0, 9.0)), Side::Left);

        assert_eq!(s.closest_point(p(0.0, 0.0)), s.a);
        assert_eq!(s.closest_point(p(9.0, 9.0)), s.b);
        assert_eq!(s.distance(p(-2.0, -3.0)), 5.0);
        // Perpendicular foot at the midpoint.
        assert_eq!(s.distance(p(6.5, 0.0)), 5.0);
    }
}
