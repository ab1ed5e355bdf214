//! Error type for ephemeris evaluation.

use thiserror::Error;

use skymap_coords::CoordError;
use skymap_objects::ObjectError;

/// Convenience alias for `Result<T, EphemerisError>`.
pub type EphemerisResult<T> = Result<T, EphemerisError>;

/// Failures while evaluating a model at an instant.
///
/// The models themselves are total functions of time; failures only arise
/// when assembling the resulting object or coordinates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    /// The computed attributes did not form a valid object.
    #[error(transparent)]
    Object(#[from] ObjectError),

    /// The computed position did not form valid coordinates.
    #[error(transparent)]
    Coord(#[from] CoordError),
}
