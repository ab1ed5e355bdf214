//! Analytic model of the Moon's apparent geocentric position.

use skymap_core::angle;
use skymap_core::constants::RAD_PER_DEG;
use skymap_core::math::asin_safe;
use skymap_coords::{EclipticCoordinates, EclipticToEquatorial};
use skymap_objects::Moon;

use crate::errors::EphemerisResult;
use crate::model::CelestialObjectModel;
use crate::sun::SunModel;

/// Mean ecliptic longitude at J2010.
const MEAN_LON: f64 = 91.929336 * RAD_PER_DEG;
/// Mean longitude of the perigee at J2010.
const MEAN_LON_PERIGEE: f64 = 130.143076 * RAD_PER_DEG;
/// Longitude of the ascending node at J2010.
const ASCENDING_NODE_LON: f64 = 291.682547 * RAD_PER_DEG;
/// Inclination of the orbit on the ecliptic.
const INCLINATION: f64 = 5.145396 * RAD_PER_DEG;
/// Eccentricity of the orbit.
const ECCENTRICITY: f64 = 0.0549;
/// Apparent angular size at the mean Earth-Moon distance.
const ANGULAR_SIZE_MEAN_DIST: f64 = 0.5181 * RAD_PER_DEG;

/// The model of the Moon.
///
/// A mean elliptic orbit corrected for evection, the annual equation and
/// variation, the dominant periodic perturbations from the Sun. The solar
/// position it needs is computed internally from [`SunModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonModel;

impl CelestialObjectModel for MoonModel {
    type Object = Moon;

    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorial,
    ) -> EphemerisResult<Moon> {
        let (sun_mean_anomaly, _) = SunModel::anomalies(days_since_j2010);
        let sun_lon = SunModel::ecliptic_lon(days_since_j2010);
        let sin_sun_mean_anomaly = sun_mean_anomaly.sin();

        let mean_lon = 13.1763966 * RAD_PER_DEG * days_since_j2010 + MEAN_LON;
        let mean_anomaly =
            mean_lon - 0.1114041 * RAD_PER_DEG * days_since_j2010 - MEAN_LON_PERIGEE;

        let evection =
            1.2739 * RAD_PER_DEG * (2.0 * (mean_lon - sun_lon) - mean_anomaly).sin();
        let annual_equation = 0.1858 * RAD_PER_DEG * sin_sun_mean_anomaly;
        let third_correction = 0.37 * RAD_PER_DEG * sin_sun_mean_anomaly;

        let corrected_anomaly = mean_anomaly + evection - annual_equation - third_correction;
        let equation_of_center = 6.2886 * RAD_PER_DEG * corrected_anomaly.sin();
        let fourth_correction = 0.214 * RAD_PER_DEG * (2.0 * corrected_anomaly).sin();

        let corrected_lon =
            mean_lon + evection + equation_of_center - annual_equation + fourth_correction;
        let variation = 0.6583 * RAD_PER_DEG * (2.0 * (corrected_lon - sun_lon)).sin();
        let true_lon = corrected_lon + variation;

        let node_lon = ASCENDING_NODE_LON - 0.0529539 * RAD_PER_DEG * days_since_j2010;
        let corrected_node_lon = node_lon - 0.16 * RAD_PER_DEG * sin_sun_mean_anomaly;

        let lon_from_node = true_lon - corrected_node_lon;
        let (sin_lon_from_node, cos_lon_from_node) = lon_from_node.sin_cos();
        let ecliptic_lon = angle::normalize_positive(
            f64::atan2(sin_lon_from_node * INCLINATION.cos(), cos_lon_from_node)
                + corrected_node_lon,
        );
        let ecliptic_lat = asin_safe(sin_lon_from_node * INCLINATION.sin());

        let phase = (1.0 - (true_lon - sun_lon).cos()) / 2.0;

        let distance_ratio = (1.0 - ECCENTRICITY * ECCENTRICITY)
            / (1.0 + ECCENTRICITY * (corrected_anomaly + equation_of_center).cos());
        let angular_size = ANGULAR_SIZE_MEAN_DIST / distance_ratio;

        let ecliptic_pos = EclipticCoordinates::new(ecliptic_lon, ecliptic_lat)?;
        let equatorial_pos = conversion.apply(&ecliptic_pos)?;
        Ok(Moon::new(equatorial_pos, angular_size, 0.0, phase)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Utc};
    use skymap_time::Epoch;

    #[test]
    fn test_moon_position_textbook() {
        // 2003-09-01 00:00 UTC, expected λ ≈ 214.862515°, β ≈ 1.716257°.
        let when = Utc.with_ymd_and_hms(2003, 9, 1, 0, 0, 0).unwrap();
        let days = Epoch::J2010.days_until(when);
        let conversion = EclipticToEquatorial::new(when);

        let moon = MoonModel.at(days, &conversion).unwrap();
        let expected = conversion
            .apply(
                &EclipticCoordinates::new(
                    angle::from_deg(214.862515),
                    angle::from_deg(1.716257),
                )
                .unwrap(),
            )
            .unwrap();
        assert_abs_diff_eq!(
            moon.record().equatorial_pos().ra(),
            expected.ra(),
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            moon.record().equatorial_pos().dec(),
            expected.dec(),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_phase_is_in_unit_interval_over_a_month() {
        let when = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorial::new(when);
        let start = Epoch::J2010.days_until(when);
        for day in 0..30 {
            let moon = MoonModel.at(start + f64::from(day), &conversion).unwrap();
            assert!((0.0..=1.0).contains(&moon.phase()));
        }
    }

    #[test]
    fn test_moon_attributes() {
        let when = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorial::new(when);
        let moon = MoonModel
            .at(Epoch::J2010.days_until(when), &conversion)
            .unwrap();
        assert_eq!(moon.record().name(), "Moon");
        assert_eq!(moon.record().magnitude(), 0.0);
        assert!(moon.record().angular_size() > 0.0);
    }
}
