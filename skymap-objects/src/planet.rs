//! A planet as seen from Earth at one instant.

use std::fmt;

use skymap_coords::EquatorialCoordinates;

use crate::errors::ObjectResult;
use crate::record::ObjectRecord;

/// A planet at a given instant. Carries nothing beyond the common record;
/// the type exists so snapshots can tell planets apart from other objects.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Planet {
    record: ObjectRecord,
}

impl Planet {
    /// Builds a planet from its name, computed position, apparent angular
    /// size and magnitude.
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
    ) -> ObjectResult<Self> {
        Ok(Self {
            record: ObjectRecord::new(name, equatorial_pos, angular_size, magnitude)?,
        })
    }

    /// The common object attributes.
    pub fn record(&self) -> &ObjectRecord {
        &self.record
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.record.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_display_is_name() {
        let pos = EquatorialCoordinates::new(0.5, 0.1).unwrap();
        let planet = Planet::new("Mars", pos, 0.0001, -1.2).unwrap();
        assert_eq!(planet.to_string(), "Mars");
        assert_eq!(planet.record().magnitude(), -1.2);
    }
}
