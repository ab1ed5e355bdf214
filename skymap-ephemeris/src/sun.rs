//! Analytic model of the Sun's apparent geocentric position.

use skymap_core::angle;
use skymap_core::constants::{RAD_PER_DEG, TAU};
use skymap_coords::{EclipticCoordinates, EclipticToEquatorial};
use skymap_objects::Sun;

use crate::errors::EphemerisResult;
use crate::model::CelestialObjectModel;

/// Geometric mean ecliptic longitude at J2010.
const LON_AT_EPOCH: f64 = 279.557208 * RAD_PER_DEG;
/// Ecliptic longitude of the perigee.
const LON_PERIGEE: f64 = 283.112438 * RAD_PER_DEG;
/// Eccentricity of the Sun-Earth orbit.
const ECCENTRICITY: f64 = 0.016705;
/// Apparent angular size at a distance of one semi-major axis.
const ANGULAR_SIZE_1AU: f64 = 0.533128 * RAD_PER_DEG;
/// Mean orbital angular speed, radians per day.
const MEAN_MOTION: f64 = TAU / 365.242191;

/// The model of the Sun.
///
/// A simple elliptic model: the mean anomaly grows linearly with time and
/// the equation of center is approximated by its first term.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunModel;

impl SunModel {
    /// Mean and true anomaly at the given instant, both unnormalized.
    pub(crate) fn anomalies(days_since_j2010: f64) -> (f64, f64) {
        let mean = MEAN_MOTION * days_since_j2010 + LON_AT_EPOCH - LON_PERIGEE;
        let true_anomaly = mean + 2.0 * ECCENTRICITY * mean.sin();
        (mean, true_anomaly)
    }

    /// Geocentric ecliptic longitude at the given instant, in `[0, τ)`.
    pub(crate) fn ecliptic_lon(days_since_j2010: f64) -> f64 {
        let (_, true_anomaly) = Self::anomalies(days_since_j2010);
        angle::normalize_positive(true_anomaly + LON_PERIGEE)
    }
}

impl CelestialObjectModel for SunModel {
    type Object = Sun;

    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorial,
    ) -> EphemerisResult<Sun> {
        let (mean_anomaly, true_anomaly) = Self::anomalies(days_since_j2010);
        let lon = angle::normalize_positive(true_anomaly + LON_PERIGEE);

        let angular_size = ANGULAR_SIZE_1AU
            * ((1.0 + ECCENTRICITY * true_anomaly.cos())
                / (1.0 - ECCENTRICITY * ECCENTRICITY));

        let ecliptic_pos = EclipticCoordinates::new(lon, 0.0)?;
        let equatorial_pos = conversion.apply(&ecliptic_pos)?;
        Ok(Sun::new(
            ecliptic_pos,
            equatorial_pos,
            angular_size,
            mean_anomaly,
        )?)
    }
}
