//! Equatorial coordinates: right ascension and declination.

use std::fmt;

use skymap_core::angle;

use super::{LATITUDE_INTERVAL, LONGITUDE_INTERVAL};
use crate::errors::CoordResult;

/// Position referenced to Earth's rotational axis.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquatorialCoordinates {
    ra: f64,
    dec: f64,
}

impl EquatorialCoordinates {
    /// Creates equatorial coordinates from right ascension ∈ [0, τ) and
    /// declination ∈ [-π/2, π/2], both in radians.
    pub fn new(ra: f64, dec: f64) -> CoordResult<Self> {
        Ok(Self {
            ra: LONGITUDE_INTERVAL.check(ra)?,
            dec: LATITUDE_INTERVAL.check(dec)?,
        })
    }

    /// Right ascension in radians.
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Right ascension in degrees.
    pub fn ra_deg(&self) -> f64 {
        angle::to_deg(self.ra)
    }

    /// Right ascension in hours.
    pub fn ra_hr(&self) -> f64 {
        angle::to_hr(self.ra)
    }

    /// Declination in radians.
    pub fn dec(&self) -> f64 {
        self.dec
    }

    /// Declination in degrees.
    pub fn dec_deg(&self) -> f64 {
        angle::to_deg(self.dec)
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra={:.4}h, dec={:.4}°)", self.ra_hr(), self.dec_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_valid_construction() {
        let eq = EquatorialCoordinates::new(PI, -FRAC_PI_2).unwrap();
        assert_eq!(eq.ra(), PI);
        assert_eq!(eq.dec(), -FRAC_PI_2);
        assert_abs_diff_eq!(eq.ra_hr(), 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.dec_deg(), -90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_out_of_interval() {
        assert!(EquatorialCoordinates::new(-0.1, 0.0).is_err());
        assert!(EquatorialCoordinates::new(skymap_core::constants::TAU, 0.0).is_err());
        assert!(EquatorialCoordinates::new(0.0, FRAC_PI_2 + 0.01).is_err());
    }

    #[test]
    fn test_display() {
        let eq = EquatorialCoordinates::new(angle::from_hr(1.5), angle::from_deg(45.0)).unwrap();
        assert_eq!(eq.to_string(), "(ra=1.5000h, dec=45.0000°)");
    }
}
