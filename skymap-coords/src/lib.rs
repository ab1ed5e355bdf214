//! Coordinate systems and their conversions.
//!
//! Four spherical coordinate systems (all thin wrappers over a
//! longitude/latitude pair in radians, validated at construction), a plane
//! Cartesian pair, the two conversion functions used to place objects on the
//! sky, and the stereographic sphere-to-plane projection.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`frames`] | [`EquatorialCoordinates`], [`EclipticCoordinates`], [`HorizontalCoordinates`], [`GeographicCoordinates`] |
//! | [`cartesian`] | [`CartesianCoordinates`] plane points |
//! | [`conversions`] | [`EclipticToEquatorial`] and [`EquatorialToHorizontal`] |
//! | [`stereographic`] | [`StereographicProjection`], forward and inverse |
//!
//! # Design Notes
//!
//! None of the value types implements `PartialEq` or `Hash`: two coordinate
//! pairs that happen to compare equal are not the same point on the sky for
//! identity purposes, and accidental use as map keys is exactly the bug this
//! prevents. Compare components explicitly where a test needs to.

pub mod cartesian;
pub mod conversions;
pub mod errors;
pub mod frames;
pub mod stereographic;

pub use cartesian::CartesianCoordinates;
pub use conversions::{EclipticToEquatorial, EquatorialToHorizontal};
pub use errors::{CoordError, CoordResult};
pub use frames::{
    EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
};
pub use stereographic::StereographicProjection;
