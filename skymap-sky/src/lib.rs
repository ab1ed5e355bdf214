//! Observed-sky snapshots.
//!
//! Ties the other crates together: given an instant, an observer location, a
//! projection and a star catalogue, [`ObservedSky`] computes every visible
//! object once and keeps its projected plane position, ready for drawing and
//! for nearest-object queries under a pointer.

pub mod errors;
pub mod observed;

pub use errors::{SkyError, SkyResult};
pub use observed::ObservedSky;
