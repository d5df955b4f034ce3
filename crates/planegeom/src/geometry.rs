//! Tagged union of every primitive, and the relation traits between them.

use std::fmt;

use crate::{Float, Line, Mbr, Point, Ray, Segment};

/// Whether two geometries share at least one point.
pub trait Intersects<T: ?Sized> {
    /// Returns whether `self` and `other` share at least one point.
    fn intersects(&self, other: &T) -> bool;
}

/// Set of points shared by two geometries.
pub trait Intersection<T: ?Sized> {
    /// Returns the points shared by `self` and `other`, or `None` if there are
    /// none.
    ///
    /// The variant of the result depends on the shape of the overlap: a
    /// single point, a bounded stretch, a half-bounded stretch, or a whole
    /// line. Swapping the operands gives an identical result.
    fn intersection(&self, other: &T) -> Option<Geometry>;
}

/// Any primitive, such as the result of an intersection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    /// Single point.
    Point(Point),
    /// Bounded stretch of a line.
    Segment(Segment),
    /// Half-bounded stretch of a line.
    Ray(Ray),
    /// Whole line.
    Line(Line),
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(p) => write!(f, "point {p}"),
            Geometry::Segment(s) => write!(f, "segment {s}"),
            Geometry::Ray(r) => write!(f, "ray {r}"),
            Geometry::Line(l) => write!(f, "line {l}"),
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}
impl From<Segment> for Geometry {
    fn from(value: Segment) -> Self {
        Geometry::Segment(value)
    }
}
impl From<Ray> for Geometry {
    fn from(value: Ray) -> Self {
        Geometry::Ray(value)
    }
}
impl From<Line> for Geometry {
    fn from(value: Line) -> Self {
        Geometry::Line(value)
    }
}

impl Geometry {
    /// Returns the length, which is zero for a point and infinite for a ray
    /// or line.
    pub fn magnitude(&self) -> Float {
        match self {
            Geometry::Point(_) => 0.0,
            Geometry::Segment(s) => s.magnitude(),
            Geometry::Ray(r) => r.magnitude(),
            Geometry::Line(l) => l.magnitude(),
        }
    }
    /// Returns the bounding rectangle.
    pub fn get_mbr(&self) -> Mbr {
        match self {
            Geometry::Point(p) => Mbr::from_point(*p),
            Geometry::Segment(s) => s.get_mbr(),
            Geometry::Ray(r) => r.get_mbr(),
            Geometry::Line(l) => l.get_mbr(),
        }
    }
    /// Returns the squared distance from `p` to the nearest point of the
    /// geometry.
    pub fn distance_squared(&self, p: Point) -> Float {
        match self {
            Geometry::Point(q) => q.distance_squared(p),
            Geometry::Segment(s) => s.distance_squared(p),
            Geometry::Ray(r) => r.distance_squared(p),
            Geometry::Line(l) => l.distance_squared(p),
        }
    }
    /// Returns the distance from `p` to the nearest point of the geometry.
    pub fn distance(&self, p: Point) -> Float {
        self.distance_squared(p).sqrt()
    }
}

/// Returns the distance from `p` to the nearest of several geometries, or NaN
/// if there are none.
pub fn min_distance<'a>(geometries: impl IntoIterator<Item = &'a Geometry>, p: Point) -> Float {
    geometries
        .into_iter()
        .map(|g| g.distance_squared(p))
        .reduce(Float::min)
        .map_or(Float::NAN, Float::sqrt)
}

impl Intersects<Point> for Point {
    fn intersects(&self, other: &Point) -> bool {
        self == other
    }
}
impl Intersection<Point> for Point {
    fn intersection(&self, other: &Point) -> Option<Geometry> {
        (self == other).then_some(Geometry::Point(*self))
    }
}

impl Intersects<Point> for Geometry {
    fn intersects(&self, other: &Point) -> bool {
        match self {
            Geometry::Point(g) => g.intersects(other),
            Geometry::Segment(g) => g.intersects(other),
            Geometry::Ray(g) => g.intersects(other),
            Geometry::Line(g) => g.intersects(other),
        }
    }
}
impl Intersects<Geometry> for Geometry {
    fn intersects(&self, other: &Geometry) -> bool {
        match self {
            Geometry::Point(g) => g.intersects(other),
            Geometry::Segment(g) => g.intersects(other),
            Geometry::Ray(g) => g.intersects(other),
            Geometry::Line(g) => g.intersects(other),
        }
    }
}
impl Intersection<Geometry> for Geometry {
    fn intersection(&self, other: &Geometry) -> Option<Geometry> {
        match self {
            Geometry::Point(g) => g.intersection(other),
            Geometry::Segment(g) => g.intersection(other),
            Geometry::Ray(g) => g.intersection(other),
            Geometry::Line(g) => g.intersection(other),
        }
    }
}

impl_mirrored_intersection! {
    impl Intersection<Line> for Point;
    impl Intersection<Ray> for Point;
    impl Intersection<Segment> for Point;
}

impl_intersects_via_intersection! {
    impl Intersects<Line> for Point;
    impl Intersects<Ray> for Point;
    impl Intersects<Segment> for Point;
}

impl_geometry_dispatch!(Point, Line, Ray, Segment);
