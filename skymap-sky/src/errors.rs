//! Error type for sky snapshot assembly.

use thiserror::Error;

use skymap_coords::CoordError;
use skymap_ephemeris::EphemerisError;

/// Convenience alias for `Result<T, SkyError>`.
pub type SkyResult<T> = Result<T, SkyError>;

/// Failures while assembling an observed-sky snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyError {
    /// An ephemeris model failed to produce its object.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),

    /// A computed position did not form valid coordinates.
    #[error(transparent)]
    Coord(#[from] CoordError),
}
