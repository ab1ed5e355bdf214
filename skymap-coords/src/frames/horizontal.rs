//! Horizontal coordinates: azimuth and altitude over a local horizon.

use std::fmt;

use skymap_core::angle;
use skymap_core::{ClosedInterval, RightOpenInterval};

use super::{LATITUDE_INTERVAL, LONGITUDE_INTERVAL};
use crate::errors::CoordResult;

const AZ_INTERVAL_DEG: RightOpenInterval = RightOpenInterval::of_const(0.0, 360.0);
const ALT_INTERVAL_DEG: ClosedInterval = ClosedInterval::of_const(-90.0, 90.0);

/// Position over an observer's horizon: azimuth measured from north through
/// east, altitude from the horizon toward the zenith.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorizontalCoordinates {
    az: f64,
    alt: f64,
}

impl HorizontalCoordinates {
    /// Creates horizontal coordinates from an azimuth ∈ [0, τ) and an
    /// altitude ∈ [-π/2, π/2], both in radians.
    pub fn new(az: f64, alt: f64) -> CoordResult<Self> {
        Ok(Self {
            az: LONGITUDE_INTERVAL.check(az)?,
            alt: LATITUDE_INTERVAL.check(alt)?,
        })
    }

    /// Creates horizontal coordinates from degrees: azimuth ∈ [0, 360),
    /// altitude ∈ [-90, 90].
    pub fn from_deg(az_deg: f64, alt_deg: f64) -> CoordResult<Self> {
        Ok(Self {
            az: angle::from_deg(AZ_INTERVAL_DEG.check(az_deg)?),
            alt: angle::from_deg(ALT_INTERVAL_DEG.check(alt_deg)?),
        })
    }

    /// Azimuth in radians.
    pub fn az(&self) -> f64 {
        self.az
    }

    /// Azimuth in degrees.
    pub fn az_deg(&self) -> f64 {
        angle::to_deg(self.az)
    }

    /// Altitude in radians.
    pub fn alt(&self) -> f64 {
        self.alt
    }

    /// Altitude in degrees.
    pub fn alt_deg(&self) -> f64 {
        angle::to_deg(self.alt)
    }

    /// Name of the octant the azimuth falls in, assembled from the four
    /// cardinal-point labels (e.g. `az_octant_name("N", "E", "S", "O")` in a
    /// French UI).
    pub fn az_octant_name(&self, n: &str, e: &str, s: &str, w: &str) -> String {
        // Shifted so each octant is centered on its cardinal direction.
        let octant = (((self.az_deg() + 22.5) / 45.0).floor() as usize) % 8;
        match octant {
            0 => n.to_string(),
            1 => format!("{n}{e}"),
            2 => e.to_string(),
            3 => format!("{s}{e}"),
            4 => s.to_string(),
            5 => format!("{s}{w}"),
            6 => w.to_string(),
            _ => format!("{n}{w}"),
        }
    }

    /// Angular distance to `other`, in radians.
    pub fn angular_distance_to(&self, other: &HorizontalCoordinates) -> f64 {
        (self.alt.sin() * other.alt.sin()
            + self.alt.cos() * other.alt.cos() * (self.az - other.az).cos())
        .acos()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az={:.4}°, alt={:.4}°)", self.az_deg(), self.alt_deg())
    }
}
