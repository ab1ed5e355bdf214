//! Spherical coordinate value types.
//!
//! Each type is a validated longitude/latitude pair in radians:
//!
//! | Type | Longitude | Latitude |
//! |------|-----------|----------|
//! | [`EquatorialCoordinates`] | right ascension ∈ [0, τ) | declination ∈ [-π/2, π/2] |
//! | [`EclipticCoordinates`] | λ ∈ [0, τ) | β ∈ [-π/2, π/2] |
//! | [`HorizontalCoordinates`] | azimuth ∈ [0, τ) | altitude ∈ [-π/2, π/2] |
//! | [`GeographicCoordinates`] | lon ∈ [-π, π) | lat ∈ [-π/2, π/2] |
//!
//! Construction fails fast on an out-of-interval component; once built, a
//! value is immutable.

mod ecliptic;
mod equatorial;
mod geographic;
mod horizontal;

pub use ecliptic::EclipticCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use geographic::GeographicCoordinates;
pub use horizontal::HorizontalCoordinates;

use skymap_core::constants::{HALF_PI, TAU};
use skymap_core::{ClosedInterval, RightOpenInterval};

/// Right-open full turn, the interval of every celestial longitude.
pub(crate) const LONGITUDE_INTERVAL: RightOpenInterval = RightOpenInterval::of_const(0.0, TAU);

/// Closed half turn, the interval of every celestial latitude.
pub(crate) const LATITUDE_INTERVAL: ClosedInterval = ClosedInterval::of_const(-HALF_PI, HALF_PI);
