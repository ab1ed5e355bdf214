//! Numeric primitives for sky-map computations.
//!
//! `skymap-core` provides the mathematical building blocks the rest of the
//! workspace is written against: angle unit conversions and wrapping,
//! closed/right-open intervals, and Horner-evaluated polynomials.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Radian/degree/hour/arcsecond/DMS conversions, `[0, τ)` normalization |
//! | [`interval`] | [`ClosedInterval`] and [`RightOpenInterval`], the canonical wrapping primitive |
//! | [`polynomial`] | [`Polynomial`] with Horner evaluation |
//! | [`constants`] | Unit-conversion factors and time constants |
//! | [`errors`] | [`MathError`] and [`MathResult`] |
//!
//! # Design Notes
//!
//! - **Radians internally**: every angular quantity in the workspace is an
//!   `f64` in radians; the [`angle`] module converts at the edges.
//! - **Intervals are the validation primitive**: coordinate types in the
//!   `skymap-coords` crate validate their components with
//!   [`ClosedInterval::check`] / [`RightOpenInterval::check`], and all angle
//!   wrapping goes through [`RightOpenInterval::reduce`].

pub mod angle;
pub mod constants;
pub mod errors;
pub mod interval;
pub mod math;
pub mod polynomial;

pub use errors::{MathError, MathResult};
pub use interval::{ClosedInterval, RightOpenInterval};
pub use polynomial::Polynomial;
