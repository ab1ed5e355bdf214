//! The Sun as seen from Earth at one instant.

use std::fmt;

use skymap_coords::{EclipticCoordinates, EquatorialCoordinates};

use crate::errors::ObjectResult;
use crate::record::ObjectRecord;

/// Apparent magnitude of the Sun, fixed for every snapshot.
const SUN_MAGNITUDE: f64 = -26.7;

/// The Sun at a given instant.
///
/// Keeps the ecliptic position and mean anomaly alongside the common record
/// because the lunar model needs both as inputs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sun {
    record: ObjectRecord,
    ecliptic_pos: EclipticCoordinates,
    mean_anomaly: f64,
}

impl Sun {
    /// Builds the Sun from its computed positions, apparent angular size and
    /// mean anomaly.
    pub fn new(
        ecliptic_pos: EclipticCoordinates,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        mean_anomaly: f64,
    ) -> ObjectResult<Self> {
        Ok(Self {
            record: ObjectRecord::new("Sun", equatorial_pos, angular_size, SUN_MAGNITUDE)?,
            ecliptic_pos,
            mean_anomaly,
        })
    }

    /// The common object attributes.
    pub fn record(&self) -> &ObjectRecord {
        &self.record
    }

    /// Geocentric ecliptic position.
    pub fn ecliptic_pos(&self) -> &EclipticCoordinates {
        &self.ecliptic_pos
    }

    /// Mean anomaly in radians.
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }
}

impl fmt::Display for Sun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.record.fmt(f)
    }
}
