//! Planar points, vectors, lines, rays, and segments, with exact intersection
//! case analysis and an axis-aligned interval and rectangle relation algebra.
//!
//! All types are small immutable `Copy` values. Every operation is a pure
//! function of its inputs.
//!
//! Parallelism and collinearity are decided with exact `== 0.0` tests on
//! perp-dot products. There is no tolerance anywhere in the intersection
//! engine; callers that need one should snap coordinates before calling in.

pub use approx;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used by the approximate comparison impls.
///
/// This is never used by the intersection engine, which is exact.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod impl_macros;

mod engine;
mod vector;

pub mod canonical;
pub mod centroid;
pub mod error;
pub mod geometry;
pub mod line;
pub mod mbr;
pub mod point;
pub mod range;
pub mod ray;
pub mod segment;
pub mod side;


/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::canonical::{order, order_by_origin, segment_order};
    pub use crate::centroid::Centroid;
    pub use crate::error::GeometryError;
    pub use crate::geometry::{Geometry, Intersection, Intersects, min_distance};
    pub use crate::line::Line;
    pub use crate::mbr::{Dimension, Mbr};
    pub use crate::point::Point;
    pub use crate::range::Range;
    pub use crate::ray::Ray;
    pub use crate::segment::Segment;
    pub use crate::side::Side;
    pub use crate::vector::Vector;
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;
