//! The attributes shared by every celestial object.

use std::fmt;

use skymap_coords::EquatorialCoordinates;

use crate::errors::{ObjectError, ObjectResult};

/// Name, position, apparent angular size and magnitude of one object.
///
/// Every concrete object type embeds one of these; the equatorial position is
/// the geocentric position at the instant the object was computed for, and
/// the angular size is the apparent diameter in radians (zero for stars).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObjectRecord {
    name: String,
    equatorial_pos: EquatorialCoordinates,
    angular_size: f64,
    magnitude: f64,
}

impl ObjectRecord {
    /// Builds a record, rejecting empty names and negative angular sizes.
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
    ) -> ObjectResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ObjectError::EmptyName);
        }
        if angular_size < 0.0 {
            return Err(ObjectError::NegativeAngularSize(angular_size));
        }
        Ok(Self {
            name,
            equatorial_pos,
            angular_size,
            magnitude,
        })
    }

    /// The object's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geocentric equatorial position.
    pub fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.equatorial_pos
    }

    /// Apparent angular diameter in radians.
    pub fn angular_size(&self) -> f64 {
        self.angular_size
    }

    /// Apparent magnitude.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

impl fmt::Display for ObjectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> EquatorialCoordinates {
        EquatorialCoordinates::new(1.0, 0.5).unwrap()
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(matches!(
            ObjectRecord::new("", pos(), 0.1, 2.0),
            Err(ObjectError::EmptyName)
        ));
    }

    #[test]
    fn test_rejects_negative_angular_size() {
        assert!(matches!(
            ObjectRecord::new("Vega", pos(), -0.1, 2.0),
            Err(ObjectError::NegativeAngularSize(_))
        ));
    }

    #[test]
    fn test_accessors() {
        let record = ObjectRecord::new("Vega", pos(), 0.0, 0.03).unwrap();
        assert_eq!(record.name(), "Vega");
        assert_eq!(record.angular_size(), 0.0);
        assert_eq!(record.magnitude(), 0.03);
        assert_eq!(record.to_string(), "Vega");
    }
}
