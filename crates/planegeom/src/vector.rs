//! 2D vector math.

use std::fmt;
use std::iter::Sum;
use std::ops::*;

use approx::AbsDiffEq;
use num_traits::Zero;

use crate::{EPSILON, Float};

/// 2D displacement or direction.
///
/// The zero vector is a legal value and means "no direction".
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
}

impl Vector {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(self, rhs: Vector) -> Float {
        self.x * rhs.x + self.y * rhs.y
    }
    /// Returns the perp-dot product (2D cross product) `self.x * rhs.y -
    /// rhs.x * self.y`.
    ///
    /// This is exactly zero iff the vectors are parallel, anti-parallel, or
    /// either is zero.
    pub fn perp_dot(self, rhs: Vector) -> Float {
        self.x * rhs.y - rhs.x * self.y
    }

    /// Returns the magnitude of the vector.
    pub fn mag(self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    pub fn mag2(self) -> Float {
        self.dot(self)
    }

    /// Returns a normalized copy of the vector, or `None` if the vector is
    /// zero or not finite.
    #[must_use]
    pub fn normalize(self) -> Option<Vector> {
        let mult = 1.0 / self.mag();
        mult.is_finite().then(|| self.scale(mult))
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(self, scalar: Float) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar)
    }

    /// Returns the component of the vector that is parallel to `other`.
    ///
    /// Returns `None` if `other` is zero.
    pub fn projected_to(self, other: Vector) -> Option<Vector> {
        let mag2 = other.mag2();
        (mag2 != 0.0).then(|| other.scale(self.dot(other) / mag2))
    }

    /// Returns whether either component is NaN.
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}
impl Mul<Float> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Float) -> Self::Output {
        self.scale(rhs)
    }
}
impl Div<Float> for Vector {
    type Output = Vector;

    fn div(self, rhs: Float) -> Self::Output {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}
impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Zero for Vector {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Self {
        iter.fold(Vector::ZERO, Add::add)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
