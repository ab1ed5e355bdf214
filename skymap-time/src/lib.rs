//! Reference epochs and sidereal time.
//!
//! Instants are `chrono::DateTime<Utc>`; all arithmetic is carried out at
//! millisecond resolution and then scaled to days or Julian centuries.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`epoch`] | [`Epoch::J2000`] / [`Epoch::J2010`], day and Julian-century offsets |
//! | [`sidereal`] | Greenwich and local sidereal time, in radians |

pub mod epoch;
pub mod sidereal;

pub use epoch::Epoch;
