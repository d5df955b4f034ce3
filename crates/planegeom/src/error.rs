//! Error types.

/// Error when constructing a primitive from invalid values.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A point has a NaN coordinate.
    #[error("point has a NaN coordinate")]
    NanCoordinate,
    /// A direction has a NaN component.
    #[error("direction vector has a NaN component")]
    NanDirection,
    /// A direction is the zero vector, so it does not define a line.
    #[error("direction vector is zero")]
    ZeroDirection,
}
