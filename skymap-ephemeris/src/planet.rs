//! Analytic models of the apparent geocentric positions of the planets.

use skymap_core::angle;
use skymap_core::constants::{PI, RAD_PER_ARCSEC, RAD_PER_DEG, TAU};
use skymap_core::math::asin_safe;
use skymap_coords::{EclipticCoordinates, EclipticToEquatorial};
use skymap_objects::Planet;

use crate::errors::EphemerisResult;
use crate::model::CelestialObjectModel;

/// Mean orbital angular speed of the Earth, radians per day.
const MEAN_MOTION: f64 = TAU / 365.242191;

/// The elliptic model of one planet.
///
/// Each planet is a set of orbital elements referred to J2010; evaluating the
/// model also evaluates the [`EARTH`](Self::EARTH) elements at the same
/// instant, since the apparent position depends on where the Earth is on its
/// own orbit. Inner planets (Mercury, Venus) use a different geocentric
/// longitude formula than the outer ones.
#[derive(Debug, Clone, Copy)]
pub struct PlanetModel {
    name: &'static str,
    tropical_year: f64,
    lon_at_epoch: f64,
    lon_perigee: f64,
    eccentricity: f64,
    semi_major_axis: f64,
    inclination: f64,
    ascending_node_lon: f64,
    angular_size_1au: f64,
    magnitude_1au: f64,
    inner: bool,
}

impl PlanetModel {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        name: &'static str,
        inner: bool,
        tropical_year: f64,
        lon_at_epoch_deg: f64,
        lon_perigee_deg: f64,
        eccentricity: f64,
        semi_major_axis: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        angular_size_arcsec: f64,
        magnitude_1au: f64,
    ) -> Self {
        Self {
            name,
            tropical_year,
            lon_at_epoch: lon_at_epoch_deg * RAD_PER_DEG,
            lon_perigee: lon_perigee_deg * RAD_PER_DEG,
            eccentricity,
            semi_major_axis,
            inclination: inclination_deg * RAD_PER_DEG,
            ascending_node_lon: ascending_node_deg * RAD_PER_DEG,
            angular_size_1au: angular_size_arcsec * RAD_PER_ARCSEC,
            magnitude_1au,
            inner,
        }
    }

    pub const MERCURY: PlanetModel = PlanetModel::new(
        "Mercury", true, 0.24085, 75.5671, 77.612, 0.205627, 0.387098, 7.0051, 48.449, 6.74,
        -0.42,
    );
    pub const VENUS: PlanetModel = PlanetModel::new(
        "Venus", true, 0.615207, 272.30044, 131.54, 0.006812, 0.723329, 3.3947, 76.769, 16.92,
        -4.40,
    );
    /// The Earth's own elements, only ever evaluated as the observer's orbit.
    pub const EARTH: PlanetModel = PlanetModel::new(
        "Earth", false, 0.999996, 99.556772, 103.2055, 0.016671, 0.999985, 0.0, 0.0, 0.0, 0.0,
    );
    pub const MARS: PlanetModel = PlanetModel::new(
        "Mars", false, 1.880765, 109.09646, 336.217, 0.093348, 1.523689, 1.8497, 49.632, 9.36,
        -1.52,
    );
    pub const JUPITER: PlanetModel = PlanetModel::new(
        "Jupiter", false, 11.857911, 337.917132, 14.6633, 0.048907, 5.20278, 1.3035, 100.595,
        196.74, -9.40,
    );
    pub const SATURN: PlanetModel = PlanetModel::new(
        "Saturn", false, 29.310579, 172.398316, 89.567, 0.053853, 9.51134, 2.4873, 113.752,
        165.60, -8.88,
    );
    pub const URANUS: PlanetModel = PlanetModel::new(
        "Uranus", false, 84.039492, 356.135400, 172.884833, 0.046321, 19.21814, 0.773059,
        73.926961, 65.80, -7.19,
    );
    pub const NEPTUNE: PlanetModel = PlanetModel::new(
        "Neptune", false, 165.84539, 326.895127, 23.07, 0.010483, 30.1985, 1.7673, 131.879,
        62.20, -6.87,
    );

    /// All eight models, in order of distance from the Sun.
    pub const ALL: [PlanetModel; 8] = [
        Self::MERCURY,
        Self::VENUS,
        Self::EARTH,
        Self::MARS,
        Self::JUPITER,
        Self::SATURN,
        Self::URANUS,
        Self::NEPTUNE,
    ];

    /// The seven planets observable from Earth, in order of distance from
    /// the Sun.
    pub const OBSERVABLE: [PlanetModel; 7] = [
        Self::MERCURY,
        Self::VENUS,
        Self::MARS,
        Self::JUPITER,
        Self::SATURN,
        Self::URANUS,
        Self::NEPTUNE,
    ];

    /// The planet's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Heliocentric orbital radius (in AU) and ecliptic longitude at the
    /// given instant.
    fn orbital_position(&self, days_since_j2010: f64) -> (f64, f64) {
        let mean_anomaly = MEAN_MOTION * (days_since_j2010 / self.tropical_year)
            + self.lon_at_epoch
            - self.lon_perigee;
        let true_anomaly = mean_anomaly + 2.0 * self.eccentricity * mean_anomaly.sin();
        let radius = self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
            / (1.0 + self.eccentricity * true_anomaly.cos());
        (radius, true_anomaly + self.lon_perigee)
    }
}

impl CelestialObjectModel for PlanetModel {
    type Object = Planet;

    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorial,
    ) -> EphemerisResult<Planet> {
        let (radius, helio_lon) = self.orbital_position(days_since_j2010);

        let lon_from_node = helio_lon - self.ascending_node_lon;
        let helio_lat = asin_safe(lon_from_node.sin() * self.inclination.sin());
        let projected_radius = radius * helio_lat.cos();
        let projected_lon = f64::atan2(
            lon_from_node.sin() * self.inclination.cos(),
            lon_from_node.cos(),
        ) + self.ascending_node_lon;

        let (earth_radius, earth_lon) = Self::EARTH.orbital_position(days_since_j2010);

        let geo_lon = if self.inner {
            PI + earth_lon
                + f64::atan2(
                    projected_radius * (earth_lon - projected_lon).sin(),
                    earth_radius - projected_radius * (earth_lon - projected_lon).cos(),
                )
        } else {
            projected_lon
                + f64::atan2(
                    earth_radius * (projected_lon - earth_lon).sin(),
                    projected_radius - earth_radius * (projected_lon - earth_lon).cos(),
                )
        };
        let geo_lat = (projected_radius * helio_lat.tan() * (geo_lon - projected_lon).sin()
            / (earth_radius * (projected_lon - earth_lon).sin()))
        .atan();

        let distance = (earth_radius * earth_radius + radius * radius
            - 2.0 * earth_radius * radius * (helio_lon - earth_lon).cos() * helio_lat.cos())
        .sqrt();
        let angular_size = self.angular_size_1au / distance;

        let phase = (1.0 + (geo_lon - helio_lon).cos()) / 2.0;
        let magnitude = self.magnitude_1au + 5.0 * (radius * distance / phase.sqrt()).log10();

        let ecliptic_pos =
            EclipticCoordinates::new(angle::normalize_positive(geo_lon), geo_lat)?;
        let equatorial_pos = conversion.apply(&ecliptic_pos)?;
        Ok(Planet::new(self.name, equatorial_pos, angular_size, magnitude)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Utc};
    use skymap_time::Epoch;

    fn nov_22_2003() -> (f64, EclipticToEquatorial) {
        let when = Utc.with_ymd_and_hms(2003, 11, 22, 0, 0, 0).unwrap();
        (Epoch::J2010.days_until(when), EclipticToEquatorial::new(when))
    }

    #[test]
    fn test_outer_planet_textbook() {
        // Jupiter on 2003-11-22: α ≈ 11h11m14s, δ ≈ 6°21'25".
        let (days, conversion) = nov_22_2003();
        let jupiter = PlanetModel::JUPITER.at(days, &conversion).unwrap();

        assert_abs_diff_eq!(
            jupiter.record().equatorial_pos().ra_hr(),
            11.187154,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            jupiter.record().equatorial_pos().dec_deg(),
            6.356635,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_inner_planet_textbook() {
        // Mercury on 2003-11-22: α ≈ 16h49m12s, δ ≈ -24°30'9".
        let (days, conversion) = nov_22_2003();
        let mercury = PlanetModel::MERCURY.at(days, &conversion).unwrap();

        assert_abs_diff_eq!(
            mercury.record().equatorial_pos().ra_hr(),
            16.820074,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            mercury.record().equatorial_pos().dec_deg(),
            -24.500872,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_jupiter_size_and_magnitude() {
        let (days, conversion) = nov_22_2003();
        let jupiter = PlanetModel::JUPITER.at(days, &conversion).unwrap();

        assert_abs_diff_eq!(
            jupiter.record().angular_size() / RAD_PER_ARCSEC,
            35.111411,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(jupiter.record().magnitude(), -1.988565, epsilon = 1e-3);
    }

    #[test]
    fn test_observable_excludes_earth() {
        assert_eq!(PlanetModel::OBSERVABLE.len(), 7);
        assert!(PlanetModel::OBSERVABLE.iter().all(|p| p.name() != "Earth"));
        assert_eq!(PlanetModel::ALL.len(), 8);
    }
}
