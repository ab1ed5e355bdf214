//! Geographic coordinates: an observer's place on Earth.

use std::fmt;

use skymap_core::angle;
use skymap_core::{ClosedInterval, RightOpenInterval};

use crate::errors::CoordResult;

const LON_INTERVAL_DEG: RightOpenInterval = RightOpenInterval::of_const(-180.0, 180.0);
const LAT_INTERVAL_DEG: ClosedInterval = ClosedInterval::of_const(-90.0, 90.0);

/// Observer location on Earth's surface: east-positive longitude ∈ [-π, π),
/// latitude ∈ [-π/2, π/2].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeographicCoordinates {
    lon: f64,
    lat: f64,
}

impl GeographicCoordinates {
    /// Creates geographic coordinates from degrees: longitude ∈ [-180, 180),
    /// latitude ∈ [-90, 90].
    pub fn from_deg(lon_deg: f64, lat_deg: f64) -> CoordResult<Self> {
        Ok(Self {
            lon: angle::from_deg(LON_INTERVAL_DEG.check(lon_deg)?),
            lat: angle::from_deg(LAT_INTERVAL_DEG.check(lat_deg)?),
        })
    }

    /// True if `lon_deg` is a valid longitude in degrees.
    pub fn is_valid_lon_deg(lon_deg: f64) -> bool {
        LON_INTERVAL_DEG.contains(lon_deg)
    }

    /// True if `lat_deg` is a valid latitude in degrees.
    pub fn is_valid_lat_deg(lat_deg: f64) -> bool {
        LAT_INTERVAL_DEG.contains(lat_deg)
    }

    /// Longitude in radians, east-positive.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Longitude in degrees.
    pub fn lon_deg(&self) -> f64 {
        angle::to_deg(self.lon)
    }

    /// Latitude in radians.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Latitude in degrees.
    pub fn lat_deg(&self) -> f64 {
        angle::to_deg(self.lat)
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon={:.4}°, lat={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_deg() {
        let geneva = GeographicCoordinates::from_deg(6.15, 46.22).unwrap();
        assert_abs_diff_eq!(geneva.lon_deg(), 6.15, epsilon = 1e-12);
        assert_abs_diff_eq!(geneva.lat_deg(), 46.22, epsilon = 1e-12);
    }

    #[test]
    fn test_longitude_right_open() {
        assert!(GeographicCoordinates::from_deg(-180.0, 0.0).is_ok());
        assert!(GeographicCoordinates::from_deg(180.0, 0.0).is_err());
    }

    #[test]
    fn test_latitude_closed() {
        assert!(GeographicCoordinates::from_deg(0.0, 90.0).is_ok());
        assert!(GeographicCoordinates::from_deg(0.0, -90.0).is_ok());
        assert!(GeographicCoordinates::from_deg(0.0, 90.1).is_err());
    }

    #[test]
    fn test_validators() {
        assert!(GeographicCoordinates::is_valid_lon_deg(-180.0));
        assert!(!GeographicCoordinates::is_valid_lon_deg(180.0));
        assert!(GeographicCoordinates::is_valid_lat_deg(90.0));
        assert!(!GeographicCoordinates::is_valid_lat_deg(-90.5));
    }
}
