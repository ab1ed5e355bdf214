//! The Moon as seen from Earth at one instant.

use std::fmt;

use skymap_coords::EquatorialCoordinates;
use skymap_core::ClosedInterval;

use crate::errors::ObjectResult;
use crate::record::ObjectRecord;

const PHASE_INTERVAL: ClosedInterval = ClosedInterval::of_const(0.0, 1.0);

/// The Moon at a given instant, with its illuminated phase in `[0, 1]`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Moon {
    record: ObjectRecord,
    phase: f64,
}

impl Moon {
    /// Builds the Moon from its computed position, apparent angular size,
    /// magnitude and phase. The phase is the illuminated fraction of the
    /// disc and must lie in `[0, 1]`.
    pub fn new(
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
        phase: f64,
    ) -> ObjectResult<Self> {
        let phase = PHASE_INTERVAL.check(phase)?;
        Ok(Self {
            record: ObjectRecord::new("Moon", equatorial_pos, angular_size, magnitude)?,
            phase,
        })
    }

    /// The common object attributes.
    pub fn record(&self) -> &ObjectRecord {
        &self.record
    }

    /// Illuminated fraction of the disc, in `[0, 1]`.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl fmt::Display for Moon {
    /// Formats as the name followed by the phase as a percentage with one
    /// decimal, e.g. `Moon (37.5%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}%)", self.record.name(), self.phase * 100.0)
    }
}
