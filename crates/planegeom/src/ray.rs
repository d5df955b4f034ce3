//! Half-bounded rays.

use std::cmp::Ordering;
use std::fmt;

use crate::canonical::{Directed, order, order_by_origin};
use crate::engine::{
    Bound, clip_spans, crossing_point, is_collinear, ray_contains_point, solve, span,
};
use crate::line::check_origin_and_direction;
use crate::{
    Float, Geometry, GeometryError, Intersection, Intersects, Line, Mbr, Point, Range, Segment,
    Side, Vector,
};

/// Ray starting at a point and extending forever along a direction.
///
/// Validity is the same as for [`Line`]. An invalid ray intersects nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Origin of the ray.
    pub p: Point,
    /// Direction of the ray, which need not be normalized.
    pub direction: Vector,
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} toward {}", self.p, self.direction)
    }
}

impl Directed for Ray {
    fn origin(&self) -> Point {
        self.p
    }
    fn direction(&self) -> Vector {
        self.direction
    }
}

impl Ray {
    /// Constructs a ray without checking that it is valid.
    pub const fn new(p: Point, direction: Vector) -> Self {
        Self { p, direction }
    }
    /// Constructs a ray, or returns an error if it would not be valid.
    pub fn try_new(p: Point, direction: Vector) -> Result<Self, GeometryError> {
        check_origin_and_direction(p, direction)?;
        Ok(Self { p, direction })
    }

    /// Returns whether the origin is not NaN and the direction is nonzero and
    /// not NaN.
    pub fn is_valid(&self) -> bool {
        check_origin_and_direction(self.p, self.direction).is_ok()
    }
    /// Returns the line that the ray lies on, with the same origin and
    /// direction.
    pub fn to_line(&self) -> Line {
        Line::new(self.p, self.direction)
    }

    /// Returns the length of the ray, which is infinite.
    pub fn magnitude(&self) -> Float {
        Float::INFINITY
    }
    /// Returns the bounding rectangle, which is unbounded in the direction
    /// the ray points.
    pub fn get_mbr(&self) -> Mbr {
        let half = |x: Float, dx: Float| {
            if dx > 0.0 {
                Range::new(x, Float::INFINITY)
            } else if dx < 0.0 {
                Range::new(Float::NEG_INFINITY, x)
            } else {
                Range::point(x)
            }
        };
        Mbr::from_ranges(
            half(self.p.x, self.direction.x),
            half(self.p.y, self.direction.y),
        )
    }

    /// Returns the point `p + direction * t`. `t` should be nonnegative.
    pub fn point_at(&self, t: Float) -> Point {
        self.p + self.direction * t
    }
    /// Returns which side of the ray's line `q` is on, looking along the
    /// direction.
    pub fn side_of(&self, q: Point) -> Side {
        Side::of_point(self.p, self.direction, q)
    }
    /// Returns the point on the ray nearest to `q`.
    pub fn closest_point(&self, q: Point) -> Point {
        if self.direction.dot(q - self.p) <= 0.0 {
            self.p
        } else {
            self.to_line().closest_point(q)
        }
    }
    /// Returns the squared distance from `q` to the nearest point of the ray.
    pub fn distance_squared(&self, q: Point) -> Float {
        if self.direction.dot(q - self.p) <= 0.0 {
            self.p.distance_squared(q)
        } else {
            self.to_line().distance_squared(q)
        }
    }
    /// Returns the distance from `q` to the nearest point of the ray.
    pub fn distance(&self, q: Point) -> Float {
        self.distance_squared(q).sqrt()
    }
}

impl Intersects<Point> for Ray {
    fn intersects(&self, other: &Point) -> bool {
        self.is_valid() && ray_contains_point(self.p, self.direction, *other)
    }
}
impl Intersection<Point> for Ray {
    fn intersection(&self, other: &Point) -> Option<Geometry> {
        self.intersects(other).then_some(Geometry::Point(*other))
    }
}

impl Intersection<Ray> for Ray {
    fn intersection(&self, other: &Ray) -> Option<Geometry> {
        if !self.is_valid() || !other.is_valid() {
            log::trace!("no intersection with invalid ray: {self} and {other}");
            return None;
        }
        let (r0, r1) = order_by_origin(*self, *other);
        let (p0, d0) = (r0.p, r0.direction);
        let (p1, d1) = (r1.p, r1.direction);

        if let Some(c) = solve(p0, d0, p1, d1) {
            return (c.s >= 0.0 && c.t >= 0.0)
                .then(|| Geometry::Point(crossing_point(p0, d0, p1, c)));
        }
        if !is_collinear(p0, d0, p1) {
            return None;
        }
        // How far along the first ray the second one starts.
        let gap = d0.dot(p1 - p0);
        if d0.dot(d1) > 0.0 {
            // Same direction: whichever starts further along.
            Some(Geometry::Ray(if gap >= 0.0 { r1 } else { r0 }))
        } else {
            // Opposite directions: the stretch between the origins, if they
            // face each other.
            match gap.partial_cmp(&0.0)? {
                Ordering::Less => None,
                Ordering::Equal => Some(Geometry::Point(p0)),
                Ordering::Greater => Some(Geometry::Segment(Segment::canonical(p0, p1))),
            }
        }
    }
}

impl Intersection<Segment> for Ray {
    fn intersection(&self, other: &Segment) -> Option<Geometry> {
        if !self.is_valid() {
            log::trace!("no intersection with invalid ray: {self}");
            return None;
        }
        let (p0, d0) = (self.p, self.direction);
        let (a, b) = order(other.a, other.b);
        if a == b {
            return self.intersection(&a);
        }
        let side_a = Side::of_point(p0, d0, a);
        let side_b = Side::of_point(p0, d0, b);

        let Some(c) = solve(p0, d0, a, b - a) else {
            if side_a != Side::On {
                return None;
            }
            let (lo, hi) = span(Bound::project(p0, d0, a), Bound::project(p0, d0, b));
            // The ray reaches past any finite segment, so the segment's own
            // upper bound stands in for the ray's.
            return clip_spans(Bound::project(p0, d0, p0), hi, lo, hi);
        };
        if side_a.strictly_same(side_b) {
            None
        } else if side_a == Side::On {
            self.intersection(&a)
        } else if side_b == Side::On {
            self.intersection(&b)
        } else {
            (c.s >= 0.0).then(|| Geometry::Point(crossing_point(p0, d0, a, c)))
        }
    }
}

impl_mirrored_intersection! {
    impl Intersection<Ray> for Segment;
}

impl_intersects_via_intersection! {
    impl Intersects<Ray> for Ray;
    impl Intersects<Segment> for Ray;
    impl Intersects<Ray> for Segment;
}
