//! A catalogued star.

use std::fmt;

use skymap_coords::EquatorialCoordinates;
use skymap_core::ClosedInterval;

use crate::errors::ObjectResult;
use crate::record::ObjectRecord;

const COLOR_INDEX_INTERVAL: ClosedInterval = ClosedInterval::of_const(-0.5, 5.5);

/// A star from the catalogue: a point object (angular size zero) with a
/// Hipparcos identifier and a B-V color index.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Star {
    record: ObjectRecord,
    hipparcos_id: u32,
    color_index: f64,
}

impl Star {
    /// Builds a star. The color index is the B-V value from the catalogue
    /// and must lie in `[-0.5, 5.5]`; stars without one in the source data
    /// conventionally carry `0.0`.
    pub fn new(
        hipparcos_id: u32,
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        magnitude: f64,
        color_index: f64,
    ) -> ObjectResult<Self> {
        let color_index = COLOR_INDEX_INTERVAL.check(color_index)?;
        Ok(Self {
            record: ObjectRecord::new(name, equatorial_pos, 0.0, magnitude)?,
            hipparcos_id,
            color_index,
        })
    }

    /// The common object attributes.
    pub fn record(&self) -> &ObjectRecord {
        &self.record
    }

    /// Hipparcos catalogue number, `0` when the star has none.
    pub fn hipparcos_id(&self) -> u32 {
        self.hipparcos_id
    }

    /// Approximate surface color temperature in kelvins, derived from the
    /// B-V index by Ballesteros' formula and truncated to a whole degree.
    pub fn color_temperature(&self) -> i32 {
        let shifted = 0.92 * self.color_index;
        let kelvins = 4600.0 * (1.0 / (shifted + 1.7) + 1.0 / (shifted + 0.62));
        kelvins as i32
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.record.fmt(f)
    }
}
