//! Unbounded lines.

use std::fmt;

use crate::canonical::{Directed, order, order_by_origin};
use crate::engine::{crossing_point, is_collinear, solve};
use crate::{
    Float, Geometry, GeometryError, Intersection, Intersects, Mbr, Point, Range, Ray, Segment,
    Side, Vector,
};

/// Line through a point along a direction, unbounded both ways.
///
/// A line is valid if its point has no NaN coordinate and its direction is
/// nonzero. An invalid line intersects nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    /// Point on the line.
    pub p: Point,
    /// Direction of the line, which need not be normalized.
    pub direction: Vector,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} along {}", self.p, self.direction)
    }
}

impl Directed for Line {
    fn origin(&self) -> Point {
        self.p
    }
    fn direction(&self) -> Vector {
        self.direction
    }
}

impl Line {
    /// Constructs a line without checking that it is valid.
    pub const fn new(p: Point, direction: Vector) -> Self {
        Self { p, direction }
    }
    /// Constructs a line, or returns an error if it would not be valid.
    pub fn try_new(p: Point, direction: Vector) -> Result<Self, GeometryError> {
        check_origin_and_direction(p, direction)?;
        Ok(Self { p, direction })
    }
    /// Constructs the line through two distinct points, oriented from `a` to
    /// `b`.
    pub fn through(a: Point, b: Point) -> Result<Self, GeometryError> {
        Self::try_new(a, b - a)
    }

    /// Returns whether the point is not NaN and the direction is nonzero and
    /// not NaN.
    pub fn is_valid(&self) -> bool {
        check_origin_and_direction(self.p, self.direction).is_ok()
    }

    /// Returns the length of the line, which is infinite.
    pub fn magnitude(&self) -> Float {
        Float::INFINITY
    }
    /// Returns the bounding rectangle, which is unbounded along every axis
    /// that the line is not perpendicular to.
    pub fn get_mbr(&self) -> Mbr {
        let unbounded = |x: Float, dx: Float| {
            if dx == 0.0 { Range::point(x) } else { Range::ALL }
        };
        Mbr::from_ranges(
            unbounded(self.p.x, self.direction.x),
            unbounded(self.p.y, self.direction.y),
        )
    }

    /// Returns the point `p + direction * t`.
    pub fn point_at(&self, t: Float) -> Point {
        self.p + self.direction * t
    }
    /// Returns which side of the line `q` is on, looking along the direction.
    pub fn side_of(&self, q: Point) -> Side {
        Side::of_point(self.p, self.direction, q)
    }
    /// Returns the point on the line nearest to `q`.
    pub fn closest_point(&self, q: Point) -> Point {
        match (q - self.p).projected_to(self.direction) {
            Some(offset) => self.p + offset,
            None => self.p,
        }
    }
    /// Returns the squared perpendicular distance from `q` to the line.
    pub fn distance_squared(&self, q: Point) -> Float {
        let mag2 = self.direction.mag2();
        if mag2 == 0.0 {
            return self.p.distance_squared(q);
        }
        let h = self.direction.perp_dot(q - self.p);
        h * h / mag2
    }
    /// Returns the perpendicular distance from `q` to the line.
    pub fn distance(&self, q: Point) -> Float {
        self.distance_squared(q).sqrt()
    }
}

/// Checks the shared validity rule for lines and rays.
pub(crate) fn check_origin_and_direction(p: Point, d: Vector) -> Result<(), GeometryError> {
    if !p.is_valid() {
        Err(GeometryError::NanCoordinate)
    } else if d.is_nan() {
        Err(GeometryError::NanDirection)
    } else if d == Vector::ZERO {
        Err(GeometryError::ZeroDirection)
    } else {
        Ok(())
    }
}

impl Intersects<Point> for Line {
    fn intersects(&self, other: &Point) -> bool {
        self.is_valid() && is_collinear(self.p, self.direction, *other)
    }
}
impl Intersection<Point> for Line {
    fn intersection(&self, other: &Point) -> Option<Geometry> {
        self.intersects(other).then_some(Geometry::Point(*other))
    }
}

impl Intersection<Line> for Line {
    fn intersection(&self, other: &Line) -> Option<Geometry> {
        if !self.is_valid() || !other.is_valid() {
            log::trace!("no intersection with invalid line: {self} and {other}");
            return None;
        }
        let (l0, l1) = order_by_origin(*self, *other);
        match solve(l0.p, l0.direction, l1.p, l1.direction) {
            Some(c) => Some(Geometry::Point(crossing_point(l0.p, l0.direction, l1.p, c))),
            None => is_collinear(l0.p, l0.direction, l1.p).then_some(Geometry::Line(l0)),
        }
    }
}

impl Intersection<Ray> for Line {
    fn intersection(&self, other: &Ray) -> Option<Geometry> {
        if !self.is_valid() || !other.is_valid() {
            log::trace!("no intersection with invalid line or ray: {self} and {other}");
            return None;
        }
        let (p0, d0) = (self.p, self.direction);
        let (p1, d1) = (other.p, other.direction);
        match solve(p0, d0, p1, d1) {
            Some(c) => (c.t >= 0.0).then(|| Geometry::Point(crossing_point(p0, d0, p1, c))),
            None => is_collinear(p0, d0, p1).then_some(Geometry::Ray(*other)),
        }
    }
}

impl Intersection<Segment> for Line {
    fn intersection(&self, other: &Segment) -> Option<Geometry> {
        if !self.is_valid() {
            log::trace!("no intersection with invalid line: {self}");
            return None;
        }
        let (p0, d0) = (self.p, self.direction);
        let (a, b) = order(other.a, other.b);
        let side_a = Side::of_point(p0, d0, a);
        if a == b {
            return (side_a == Side::On).then_some(Geometry::Point(a));
        }
        let side_b = Side::of_point(p0, d0, b);

        let Some(c) = solve(p0, d0, a, b - a) else {
            // Parallel: either the whole segment is on the line or none of it.
            return (side_a == Side::On).then_some(Geometry::Segment(Segment::new(a, b)));
        };
        if side_a.strictly_same(side_b) {
            None
        } else if side_a == Side::On {
            Some(Geometry::Point(a))
        } else if side_b == Side::On {
            Some(Geometry::Point(b))
        } else {
            Some(Geometry::Point(crossing_point(p0, d0, a, c)))
        }
    }
}

impl_mirrored_intersection! {
    impl Intersection<Line> for Ray;
    impl Intersection<Line> for Segment;
}

impl_intersects_via_intersection! {
    impl Intersects<Line> for Line;
    impl Intersects<Ray> for Line;
    impl Intersects<Segment> for Line;
    impl Intersects<Line> for Ray;
    impl Intersects<Line> for Segment;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: Float, y: Float) -> Point {
        Point::new(x, y)
    }
    fn v(x: Float, y: Float) -> Vector {
        Vector::new(x, y)
    }

    #[test]
    fn test_checked_constructors() {
        assert!(Line::try_new(p(0.0, 0.0), v(1.0, 1.0)).is_ok());
        assert_eq!(
            Line::try_new(p(0.0, 0.0), Vector::ZERO),
            Err(GeometryError::ZeroDirection),
        );
        assert_eq!(
            Line::try_new(Point::INVALID, Vector::X),
            Err(GeometryError::NanCoordinate),
        );
        assert_eq!(
            Line::try_new(Point::ORIGIN, v(Float::NAN, 1.0)),
            Err(GeometryError::NanDirection),
        );
        assert_eq!(
            Line::through(p(1.0, 1.0), p(3.0, 2.0)),
            Ok(Line::new(p(1.0, 1.0), v(2.0, 1.0))),
        );
        assert!(Line::through(p(1.0, 1.0), p(1.0, 1.0)).is_err());
    }

    #[test]
    fn test_line_line() {
        let l0 = Line::new(p(0.0, 0.0), v(1.0, 1.0));
        let l1 = Line::new(p(4.0, 0.0), v(-1.0, 1.0));
        let expected = Some(Geometry::Point(p(2.0, 2.0)));
        assert_eq!(l0.intersection(&l1), expected);
        assert_eq!(l1.intersection(&l0), expected);

        // Parallel and distinct.
        let l2 = Line::new(p(0.0, 1.0), v(-2.0, -2.0));
        assert_eq!(l0.intersection(&l2), None);
        assert!(!l0.intersects(&l2));

        // Coincident, with different points and directions.
        let l3 = Line::new(p(5.0, 5.0), v(-3.0, -3.0));
        assert_eq!(l0.intersection(&l3), l3.intersection(&l0));
        assert_eq!(l0.intersection(&l3), Some(Geometry::Line(l0)));
    }

    #[test]
    fn test_line_ray() {
        // Ray starting exactly on the line returns its origin.
        let ray = Ray::new(p(0.0, 0.0), v(1.0, 0.0));
        let line = Line::new(p(0.0, 5.0), v(0.0, 1.0));
        assert_eq!(line.intersection(&ray), Some(Geometry::Point(p(0.0, 0.0))));
        assert_eq!(ray.intersection(&line), Some(Geometry::Point(p(0.0, 0.0))));

        // Ray pointing away from the line.
        let away = Ray::new(p(1.0, 0.0), v(1.0, 0.0));
        assert_eq!(line.intersection(&away), None);
        let toward = Ray::new(p(1.0, 3.0), v(-2.0, 0.0));
        assert_eq!(line.intersection(&toward), Some(Geometry::Point(p(0.0, 3.0))));

        // Ray along the line.
        let along = Ray::new(p(0.0, -2.0), v(0.0, -1.0));
        assert_eq!(line.intersection(&along), Some(Geometry::Ray(along)));
        let beside = Ray::new(p(1.0, -2.0), v(0.0, -1.0));
        assert_eq!(line.intersection(&beside), None);
    }

    #[test]
    fn test_line_segment() {
        let line = Line::new(p(0.0, 1.0), v(1.0, 0.0));
        let crossing = Segment::new(p(3.0, 3.0), p(1.0, -1.0));
        assert_eq!(line.intersection(&crossing), Some(Geometry::Point(p(2.0, 1.0))));

        let short = Segment::new(p(3.0, 3.0), p(2.0, 2.0));
        assert_eq!(line.intersection(&short), None);

        let on_line = Segment::new(p(7.0, 1.0), p(-1.0, 1.0));
        assert_eq!(
            line.intersection(&on_line),
            Some(Geometry::Segment(Segment::new(p(-1.0, 1.0), p(7.0, 1.0)))),
        );

        let zero_length = Segment::new(p(4.0, 1.0), p(4.0, 1.0));
        assert_eq!(line.intersection(&zero_length), Some(Geometry::Point(p(4.0, 1.0))));
    }

    #[test]
    fn test_line_through_endpoint_returns_endpoint() {
        // Coordinates chosen so that recomputing the endpoint arithmetically
        // would not round-trip.
        let a = p(0.1, 0.7);
        let b = p(0.3, -0.2);
        let line = Line::through(p(-0.9, 0.3), a).unwrap();
        assert_eq!(line.intersection(&Segment::new(a, b)), Some(Geometry::Point(a)));
        assert_eq!(line.intersection(&Segment::new(b, a)), Some(Geometry::Point(a)));
    }

    #[test]
    fn test_invalid_line_intersects_nothing() {
        let bad = Line::new(p(0.0, 0.0), Vector::ZERO);
        assert!(!bad.is_valid());
        assert!(!bad.intersects(&p(0.0, 0.0)));
        assert!(!bad.intersects(&Line::new(p(0.0, 0.0), Vector::X)));
        assert!(!bad.intersects(&Segment::new(p(-1.0, 0.0), p(1.0, 0.0))));
    }

    #[test]
    fn test_distance_and_mbr() {
        let line = Line::new(p(0.0, 1.0), v(2.0, 0.0));
        assert_eq!(line.distance(p(5.0, 4.0)), 3.0);
        assert_eq!(line.distance_squared(p(5.0, -1.0)), 4.0);
        assert_eq!(line.closest_point(p(5.0, 4.0)), p(5.0, 1.0));
        assert_eq!(line.side_of(p(5.0, 4.0)), Side::Left);
        assert_eq!(line.point_at(1.5), p(3.0, 1.0));
        assert_eq!(line.magnitude(), Float::INFINITY);

        let mbr = line.get_mbr();
        assert_eq!(mbr.x, Range::ALL);
        assert_eq!(mbr.y, Range::point(1.0));
        assert_eq!(
            Line::new(p(0.0, 0.0), v(1.0, 1.0)).get_mbr(),
            Mbr::from_ranges(Range::ALL, Range::ALL),
        );
    }
}
