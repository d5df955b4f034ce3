//! Arithmetic shared by every pairwise intersection routine.
//!
//! Each routine has three terminal branches: the directions are not parallel
//! and the crossing point is clipped to both operands; the directions are
//! parallel and the supporting lines are distinct; or the supporting lines
//! coincide and the overlap is found by projecting onto the shared direction.

use std::cmp::Ordering;

use crate::canonical::order;
use crate::{Float, Geometry, Point, Segment, Side, Vector};

/// Parameters of the crossing point of two non-parallel lines `p0 + d0 * s`
/// and `p1 + d1 * t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Crossing {
    /// Parameter along the first line.
    pub s: Float,
    /// Parameter along the second line.
    pub t: Float,
}

/// Solves `p0 + d0 * s == p1 + d1 * t` by Cramer's rule, or returns `None` if
/// the directions are parallel.
///
/// The numerator of `s` is zero exactly when `p0` is [`Side::On`] the second
/// line, and likewise for `t` and `p1`.
pub(crate) fn solve(p0: Point, d0: Vector, p1: Point, d1: Vector) -> Option<Crossing> {
    let cross = d0.perp_dot(d1);
    if cross == 0.0 {
        return None;
    }
    let e = p1 - p0;
    Some(Crossing {
        s: e.perp_dot(d1) / cross,
        t: e.perp_dot(d0) / cross,
    })
}

/// Returns the crossing point found by [`solve()`].
///
/// A parameter of exactly zero returns the corresponding origin as-is rather
/// than recomputing it.
pub(crate) fn crossing_point(p0: Point, d0: Vector, p1: Point, c: Crossing) -> Point {
    if c.s == 0.0 {
        p0
    } else if c.t == 0.0 {
        p1
    } else {
        p0 + d0 * c.s
    }
}

/// Returns whether `q` lies exactly on the line through `p` along `d`.
pub(crate) fn is_collinear(p: Point, d: Vector, q: Point) -> bool {
    Side::of_point(p, d, q) == Side::On
}

/// Returns whether `q` lies exactly on the ray from `p` along `d`.
pub(crate) fn ray_contains_point(p: Point, d: Vector, q: Point) -> bool {
    is_collinear(p, d, q) && d.dot(q - p) >= 0.0
}

/// Returns whether `q` lies exactly on the segment between `a` and `b`.
///
/// The endpoints are put in canonical order first so that the segment's two
/// orientations agree.
pub(crate) fn segment_contains_point(a: Point, b: Point, q: Point) -> bool {
    let (a, b) = order(a, b);
    if a == b {
        return q == a;
    }
    let d = b - a;
    let t = d.dot(q - a);
    is_collinear(a, d, q) && 0.0 <= t && t <= d.mag2()
}

/// Point on a shared supporting line, tagged with its projection onto the
/// line's direction.
///
/// The projection is left unnormalized (`dot` rather than `dot / |d|^2`)
/// because it is only ever compared against other projections onto the same
/// direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Bound {
    pub t: Float,
    pub point: Point,
}

impl Bound {
    /// Projects `point` onto the line through `origin` along `d`.
    pub fn project(origin: Point, d: Vector, point: Point) -> Self {
        Self {
            t: d.dot(point - origin),
            point,
        }
    }
}

/// Returns the two bounds of a span, lowest projection first.
pub(crate) fn span(b0: Bound, b1: Bound) -> (Bound, Bound) {
    if b1.t < b0.t { (b1, b0) } else { (b0, b1) }
}

/// Intersects the closed spans `[lo0, hi0]` and `[lo1, hi1]` on a common
/// line.
///
/// Returns nothing if they are disjoint, a point if they share a single
/// projection, and otherwise the segment between the innermost bounds. Ties
/// keep the bound from the first span.
pub(crate) fn clip_spans(lo0: Bound, hi0: Bound, lo1: Bound, hi1: Bound) -> Option<Geometry> {
    let lo = if lo1.t > lo0.t { lo1 } else { lo0 };
    let hi = if hi1.t < hi0.t { hi1 } else { hi0 };
    let Some(ordering) = lo.t.partial_cmp(&hi.t) else {
        log::debug!("indeterminate collinear overlap between {lo:?} and {hi:?}");
        return None;
    };
    match ordering {
        Ordering::Greater => None,
        Ordering::Equal => Some(Geometry::Point(lo.point)),
        Ordering::Less => Some(Geometry::Segment(Segment::canonical(lo.point, hi.point))),
    }
}
