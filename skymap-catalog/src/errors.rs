//! Error type for catalogue construction and loading.

use thiserror::Error;

use skymap_coords::CoordError;
use skymap_objects::ObjectError;

/// Convenience alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures while loading or assembling a catalogue.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The underlying reader failed.
    #[error("catalogue I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the source file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An asterism references a star that was never added to the builder.
    #[error("asterism of {constellation} references a star not in the catalogue")]
    UnknownStar { constellation: String },

    /// An asterism lookup with an asterism the catalogue does not contain.
    #[error("asterism not in the catalogue")]
    UnknownAsterism,

    /// An asterism with no stars.
    #[error("asterism must contain at least one star")]
    EmptyAsterism,

    /// A loaded star's attributes were invalid.
    #[error(transparent)]
    Object(#[from] ObjectError),

    /// A loaded star's position was invalid.
    #[error(transparent)]
    Coord(#[from] CoordError),
}
