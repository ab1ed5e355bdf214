//! A borrowed view over any concrete celestial object.

use std::fmt;

use skymap_coords::EquatorialCoordinates;

use crate::moon::Moon;
use crate::planet::Planet;
use crate::record::ObjectRecord;
use crate::star::Star;
use crate::sun::Sun;

/// A reference to any of the four concrete object types.
///
/// Snapshots hand these out from queries so callers get one uniform surface
/// over the common attributes without the snapshot giving up ownership.
#[derive(Debug, Clone, Copy)]
pub enum CelestialObject<'a> {
    Sun(&'a Sun),
    Moon(&'a Moon),
    Planet(&'a Planet),
    Star(&'a Star),
}

impl<'a> CelestialObject<'a> {
    /// The common attributes of the underlying object.
    pub fn record(&self) -> &'a ObjectRecord {
        match self {
            CelestialObject::Sun(sun) => sun.record(),
            CelestialObject::Moon(moon) => moon.record(),
            CelestialObject::Planet(planet) => planet.record(),
            CelestialObject::Star(star) => star.record(),
        }
    }

    /// The object's name.
    pub fn name(&self) -> &'a str {
        self.record().name()
    }

    /// Geocentric equatorial position.
    pub fn equatorial_pos(&self) -> &'a EquatorialCoordinates {
        self.record().equatorial_pos()
    }

    /// Apparent angular diameter in radians.
    pub fn angular_size(&self) -> f64 {
        self.record().angular_size()
    }

    /// Apparent magnitude.
    pub fn magnitude(&self) -> f64 {
        self.record().magnitude()
    }
}

impl fmt::Display for CelestialObject<'_> {
    /// Formats the underlying object, so the Moon keeps its phase suffix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CelestialObject::Sun(sun) => sun.fmt(f),
            CelestialObject::Moon(moon) => moon.fmt(f),
            CelestialObject::Planet(planet) => planet.fmt(f),
            CelestialObject::Star(star) => star.fmt(f),
        }
    }
}
