//! Error type for celestial object construction.

use thiserror::Error;

use skymap_coords::CoordError;
use skymap_core::MathError;

/// Convenience alias for `Result<T, ObjectError>`.
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Failures while constructing a celestial object.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjectError {
    /// An object was given an empty name.
    #[error("celestial object name must not be empty")]
    EmptyName,

    /// An object was given a negative apparent angular size.
    #[error("angular size must be non-negative, got {0}")]
    NegativeAngularSize(f64),

    /// A scalar attribute fell outside its required interval.
    #[error("object attribute out of range: {0}")]
    AttributeOutOfRange(#[from] MathError),

    /// A coordinate argument was invalid.
    #[error(transparent)]
    Coord(#[from] CoordError),
}
