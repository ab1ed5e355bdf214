//! The interface every ephemeris model implements.

use skymap_coords::EclipticToEquatorial;

use crate::errors::EphemerisResult;

/// An analytic model producing one celestial object at a given instant.
///
/// Time is expressed as (fractional) days since the J2010 epoch, negative
/// before it. The ecliptic-to-equatorial conversion is passed in rather than
/// derived from the instant so one conversion can serve every model of a
/// snapshot.
pub trait CelestialObjectModel {
    /// The object type this model produces.
    type Object;

    /// Evaluates the model `days_since_j2010` days after J2010.
    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorial,
    ) -> EphemerisResult<Self::Object>;
}
