//! Analytic ephemeris models.
//!
//! Evaluates the apparent geocentric position of the Sun, the Moon and the
//! seven observable planets at an arbitrary instant, expressed as days since
//! the J2010 epoch. The models are the classical low-precision elliptic
//! ones, accurate to a few arcminutes over the surrounding decades, which is
//! ample for drawing a sky map.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`model`] | the [`CelestialObjectModel`] trait |
//! | [`sun`] | [`SunModel`] |
//! | [`moon`] | [`MoonModel`], built on the solar position |
//! | [`planet`] | [`PlanetModel`] and its eight element sets |

pub mod errors;
pub mod model;
pub mod moon;
pub mod planet;
pub mod sun;

pub use errors::{EphemerisError, EphemerisResult};
pub use model::CelestialObjectModel;
pub use moon::MoonModel;
pub use planet::PlanetModel;
pub use sun::SunModel;
