//! Axis-aligned minimum bounding rectangles.
//!
//! An [`Mbr`] is the product of two [`Range`]s. Its relations lift the range
//! relations axis by axis, with one extra wrinkle: a rectangle of zero width
//! or zero height has collapsed to a segment or a point, which changes which
//! topological relations it can take part in. See [`Mbr::dimension()`].

use std::fmt;

use approx::AbsDiffEq;

use crate::{EPSILON, Float, Point, Range};

/// Topological dimension of a possibly collapsed rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// Zero width and zero height.
    Point,
    /// Exactly one of width and height is zero.
    Segment,
    /// Positive width and height.
    Area,
}

/// Axis-aligned rectangle, given by a range along each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mbr {
    /// Extent along the X axis.
    pub x: Range,
    /// Extent along the Y axis.
    pub y: Range,
}

impl fmt::Display for Mbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.x, self.y)
    }
}

impl Mbr {
    /// Constructs the rectangle with two opposite corners.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            x: Range::new(p0.x, p1.x),
            y: Range::new(p0.y, p1.y),
        }
    }
    /// Constructs a rectangle from its X and Y extents.
    pub fn from_ranges(x: Range, y: Range) -> Self {
        Self { x, y }
    }
    /// Constructs a degenerate rectangle containing a single point.
    pub fn from_point(p: Point) -> Self {
        Self {
            x: Range::point(p.x),
            y: Range::point(p.y),
        }
    }
    /// Returns the minimal rectangle containing every point, or `None` if
    /// there are no points.
    pub fn create(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |mbr, p| mbr.encompass_point(p)))
    }

    /// Returns the minimum X coordinate.
    pub fn x_min(&self) -> Float {
        self.x.low()
    }
    /// Returns the maximum X coordinate.
    pub fn x_max(&self) -> Float {
        self.x.high()
    }
    /// Returns the minimum Y coordinate.
    pub fn y_min(&self) -> Float {
        self.y.low()
    }
    /// Returns the maximum Y coordinate.
    pub fn y_max(&self) -> Float {
        self.y.high()
    }
    /// Returns the corner with the smallest coordinates.
    pub fn min_corner(&self) -> Point {
        Point::new(self.x_min(), self.y_min())
    }
    /// Returns the corner with the largest coordinates.
    pub fn max_corner(&self) -> Point {
        Point::new(self.x_max(), self.y_max())
    }
    /// Returns the four corners, counterclockwise from the minimum corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min(), self.y_min()),
            Point::new(self.x_max(), self.y_min()),
            Point::new(self.x_max(), self.y_max()),
            Point::new(self.x_min(), self.y_max()),
        ]
    }

    /// Returns the extent along the X axis.
    pub fn width(&self) -> Float {
        self.x.magnitude()
    }
    /// Returns the extent along the Y axis.
    pub fn height(&self) -> Float {
        self.y.magnitude()
    }
    /// Returns the area.
    pub fn area(&self) -> Float {
        self.width() * self.height()
    }
    /// Returns the center point.
    pub fn centroid(&self) -> Point {
        Point::new(self.x.mid(), self.y.mid())
    }
    /// Returns the topological dimension after collapsing zero-length axes.
    pub fn dimension(&self) -> Dimension {
        match (self.x.is_degenerate(), self.y.is_degenerate()) {
            (true, true) => Dimension::Point,
            (false, false) => Dimension::Area,
            _ => Dimension::Segment,
        }
    }
    /// Returns which axes have collapsed to a single value, as `(x, y)`.
    fn collapsed_axes(&self) -> (bool, bool) {
        (self.x.is_degenerate(), self.y.is_degenerate())
    }

    /// Returns the smallest rectangle containing both rectangles.
    #[must_use]
    pub fn encompass(&self, other: &Mbr) -> Mbr {
        Mbr {
            x: self.x.encompass(&other.x),
            y: self.y.encompass(&other.y),
        }
    }
    /// Returns the smallest rectangle containing both the rectangle and `p`.
    #[must_use]
    pub fn encompass_point(&self, p: Point) -> Mbr {
        Mbr {
            x: self.x.encompass_value(p.x),
            y: self.y.encompass_value(p.y),
        }
    }
    /// Returns the rectangle common to both rectangles, or `None` if they are
    /// disjoint.
    pub fn intersection(&self, other: &Mbr) -> Option<Mbr> {
        Some(Mbr {
            x: self.x.intersection(&other.x)?,
            y: self.y.intersection(&other.y)?,
        })
    }
    /// Returns the rectangle scaled by `factor` about its centroid.
    #[must_use]
    pub fn scale(&self, factor: Float) -> Mbr {
        Mbr {
            x: self.x.scale(factor),
            y: self.y.scale(factor),
        }
    }

    /// Returns whether `p` is inside the rectangle or on its boundary.
    pub fn contains_point(&self, p: Point) -> bool {
        self.x.contains_value(p.x) && self.y.contains_value(p.y)
    }
    /// Returns the squared distance from `p` to the nearest point of the
    /// rectangle.
    pub fn distance_squared_to_point(&self, p: Point) -> Float {
        let dx = self.x.distance_to_value(p.x);
        let dy = self.y.distance_to_value(p.y);
        dx * dx + dy * dy
    }
    /// Returns the distance from `p` to the nearest point of the rectangle.
    pub fn distance_to_point(&self, p: Point) -> Float {
        self.distance_squared_to_point(p).sqrt()
    }
    /// Returns the squared distance between the nearest points of the two
    /// rectangles.
    pub fn distance_squared(&self, other: &Mbr) -> Float {
        self.x.distance_squared(&other.x) + self.y.distance_squared(&other.y)
    }
    /// Returns the distance between the nearest points of the two
    /// rectangles.
    pub fn distance(&self, other: &Mbr) -> Float {
        self.distance_squared(other).sqrt()
    }

    /// Returns whether the rectangles have identical extents.
    pub fn equals(&self, other: &Mbr) -> bool {
        self.x.equals(&other.x) && self.y.equals(&other.y)
    }
    /// Returns whether the rectangles share at least one point.
    pub fn intersects(&self, other: &Mbr) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y)
    }
    /// Returns whether the rectangles share no point.
    pub fn disjoint(&self, other: &Mbr) -> bool {
        !self.intersects(other)
    }
    /// Returns whether the interiors of the rectangles share a point.
    ///
    /// The interior of a collapsed rectangle is the interior of the segment
    /// or point it collapsed to.
    pub fn interiors_intersect(&self, other: &Mbr) -> bool {
        self.x.interiors_intersect(&other.x) && self.y.interiors_intersect(&other.y)
    }
    /// Returns whether the rectangles meet only on their boundaries.
    ///
    /// This holds when one axis touches while the other intersects, which
    /// includes rectangles that share only a corner.
    pub fn touches(&self, other: &Mbr) -> bool {
        self.intersects(other) && !self.interiors_intersect(other)
    }
    /// Returns whether `other` lies entirely inside the rectangle, boundary
    /// included.
    pub fn contains(&self, other: &Mbr) -> bool {
        self.x.contains(&other.x) && self.y.contains(&other.y)
    }
    /// Returns whether the rectangle lies entirely inside `other`, boundary
    /// included.
    pub fn within(&self, other: &Mbr) -> bool {
        other.contains(self)
    }
    /// Returns whether the rectangles have the same shape and their interiors
    /// meet, without either containing the other.
    ///
    /// Two segments only overlap if they collapsed along the same axis. Two
    /// points never overlap.
    pub fn overlaps(&self, other: &Mbr) -> bool {
        let shape = self.collapsed_axes();
        shape == other.collapsed_axes()
            && shape != (true, true)
            && self.interiors_intersect(other)
            && !self.contains(other)
            && !self.within(other)
    }
    /// Returns whether a segment-shaped rectangle crosses the edge of an
    /// area.
    ///
    /// Exactly one operand must be a segment and the other an area. The
    /// segment's collapsed coordinate must lie strictly inside the area, and
    /// along the other axis the two must [`Range::overlaps()`], so the segment
    /// pokes out of one side. A segment spanning the whole area is not a
    /// partial overlap and does not cross. Points never cross, and neither do
    /// two segments.
    pub fn crosses(&self, other: &Mbr) -> bool {
        match (self.dimension(), other.dimension()) {
            (Dimension::Segment, Dimension::Area) => self.segment_crosses_area(other),
            (Dimension::Area, Dimension::Segment) => other.segment_crosses_area(self),
            _ => false,
        }
    }
    fn segment_crosses_area(&self, area: &Mbr) -> bool {
        match self.collapsed_axes() {
            (false, true) => self.y.interiors_intersect(&area.y) && self.x.overlaps(&area.x),
            (true, false) => self.x.interiors_intersect(&area.x) && self.y.overlaps(&area.y),
            _ => false,
        }
    }
}

impl AbsDiffEq for Mbr {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
