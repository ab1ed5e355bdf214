//! Ecliptic coordinates: longitude and latitude referenced to Earth's
//! orbital plane.

use std::fmt;

use skymap_core::angle;

use super::{LATITUDE_INTERVAL, LONGITUDE_INTERVAL};
use crate::errors::CoordResult;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EclipticCoordinates {
    lon: f64,
    lat: f64,
}

impl EclipticCoordinates {
    /// Creates ecliptic coordinates from a longitude ∈ [0, τ) and a
    /// latitude ∈ [-π/2, π/2], both in radians.
    pub fn new(lon: f64, lat: f64) -> CoordResult<Self> {
        Ok(Self {
            lon: LONGITUDE_INTERVAL.check(lon)?,
            lat: LATITUDE_INTERVAL.check(lat)?,
        })
    }

    /// Ecliptic longitude in radians.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Ecliptic longitude in degrees.
    pub fn lon_deg(&self) -> f64 {
        angle::to_deg(self.lon)
    }

    /// Ecliptic latitude in radians.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Ecliptic latitude in degrees.
    pub fn lat_deg(&self) -> f64 {
        angle::to_deg(self.lat)
    }
}

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(λ={:.4}°, β={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}
