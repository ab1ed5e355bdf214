//! Celestial object value types.
//!
//! Immutable snapshots of objects as seen from Earth at one instant: the
//! [`Sun`], the [`Moon`], a [`Planet`] or a catalogued [`Star`], all sharing
//! the attributes of an [`ObjectRecord`]. [`CelestialObject`] is a borrowed
//! view over any of them for code that treats them uniformly.
//!
//! Nothing here computes positions; the ephemeris crate produces these
//! values and the sky crate assembles them into snapshots.

pub mod errors;
pub mod moon;
pub mod object;
pub mod planet;
pub mod record;
pub mod star;
pub mod sun;

pub use errors::{ObjectError, ObjectResult};
pub use moon::Moon;
pub use object::CelestialObject;
pub use planet::Planet;
pub use record::ObjectRecord;
pub use star::Star;
pub use sun::Sun;
