//! Canonical ordering of intersection inputs.
//!
//! Symmetric operations reorder their inputs into a canonical form before
//! computing anything, so that `f(a, b)` and `f(b, a)` run exactly the same
//! arithmetic and produce bit-identical results.

use std::cmp::Ordering;

use crate::{Point, Vector};

/// Returns the two points sorted so that the first is lexicographically less
/// than or equal to the second.
pub fn order(a: Point, b: Point) -> (Point, Point) {
    match a.lex_cmp(&b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    }
}

/// Returns the endpoints of two segments in canonical order.
///
/// Each pair is ordered internally, then the pairs are ordered against each
/// other by their first point, with their second point as tie-break.
pub fn segment_order(a: Point, b: Point, c: Point, d: Point) -> (Point, Point, Point, Point) {
    let (a, b) = order(a, b);
    let (c, d) = order(c, d);
    match a.lex_cmp(&c).then_with(|| b.lex_cmp(&d)) {
        Ordering::Greater => (c, d, a, b),
        _ => (a, b, c, d),
    }
}

/// Linear primitive defined by an origin and a direction.
pub trait Directed: Copy {
    /// Returns the origin point.
    fn origin(&self) -> Point;
    /// Returns the direction vector, which is zero for an invalid primitive.
    fn direction(&self) -> Vector;

    /// Compares by origin, then by direction.
    fn lex_cmp(&self, other: &Self) -> Ordering {
        let self_dir = Point::from_vector(self.direction());
        let other_dir = Point::from_vector(other.direction());
        self.origin()
            .lex_cmp(&other.origin())
            .then_with(|| self_dir.lex_cmp(&other_dir))
    }
}

/// Returns two lines or two rays sorted by origin, then by direction.
pub fn order_by_origin<T: Directed>(a: T, b: T) -> (T, T) {
    match a.lex_cmp(&b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    }
}
