//! The two coordinate conversions used to place objects on the sky.
//!
//! Both are built once per observation instant (and location), precompute the
//! trigonometry that does not depend on the converted point, and are then
//! pure: the same input always maps to the same output. A single instance is
//! meant to be reused across every object of one sky snapshot.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};

use skymap_core::angle;
use skymap_core::math::asin_safe;
use skymap_core::Polynomial;
use skymap_time::{sidereal, Epoch};

use crate::errors::CoordResult;
use crate::frames::{
    EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
};

/// Obliquity of the ecliptic in radians, as a polynomial in Julian centuries
/// since J2000.
static OBLIQUITY_POLYNOMIAL: LazyLock<Polynomial> = LazyLock::new(|| {
    Polynomial::new(
        angle::from_arcsec(0.00181),
        &[
            -angle::from_arcsec(0.0006),
            -angle::from_arcsec(46.815),
            angle::from_dms(23, 26, 21.45).expect("constant DMS components are valid"),
        ],
    )
    .expect("constant coefficients are valid")
});

/// Converts ecliptic to equatorial coordinates at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct EclipticToEquatorial {
    sin_obliquity: f64,
    cos_obliquity: f64,
}

impl EclipticToEquatorial {
    /// Builds the conversion for the instant `when`, evaluating the ecliptic
    /// obliquity once.
    pub fn new(when: DateTime<Utc>) -> Self {
        let centuries = Epoch::J2000.julian_centuries_until(when);
        let obliquity = OBLIQUITY_POLYNOMIAL.at(centuries);
        let (sin_obliquity, cos_obliquity) = obliquity.sin_cos();
        Self {
            sin_obliquity,
            cos_obliquity,
        }
    }

    /// Maps ecliptic (λ, β) to equatorial (α, δ) by the standard spherical
    /// rotation about the obliquity, right ascension normalized to [0, τ).
    pub fn apply(&self, ecl: &EclipticCoordinates) -> CoordResult<EquatorialCoordinates> {
        let (sin_lon, cos_lon) = ecl.lon().sin_cos();

        let ra = f64::atan2(
            sin_lon * self.cos_obliquity - ecl.lat().tan() * self.sin_obliquity,
            cos_lon,
        );
        let dec = asin_safe(
            ecl.lat().sin() * self.cos_obliquity + ecl.lat().cos() * self.sin_obliquity * sin_lon,
        );

        EquatorialCoordinates::new(angle::normalize_positive(ra), dec)
    }
}

/// Converts equatorial to horizontal coordinates for a fixed instant and
/// observer location.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialToHorizontal {
    local_sidereal: f64,
    sin_lat: f64,
    cos_lat: f64,
}

impl EquatorialToHorizontal {
    /// Builds the conversion for the instant `when` and the observer at
    /// `location`, computing the local sidereal time once.
    pub fn new(when: DateTime<Utc>, location: &GeographicCoordinates) -> Self {
        let (sin_lat, cos_lat) = location.lat().sin_cos();
        Self {
            local_sidereal: sidereal::local(when, location.lon()),
            sin_lat,
            cos_lat,
        }
    }

    /// Maps equatorial (α, δ) to horizontal (azimuth, altitude) via the
    /// hour-angle rotation, azimuth normalized to [0, τ).
    pub fn apply(&self, equ: &EquatorialCoordinates) -> CoordResult<HorizontalCoordinates> {
        let (sin_dec, cos_dec) = equ.dec().sin_cos();
        let hour_angle = self.local_sidereal - equ.ra();

        let sin_alt = sin_dec * self.sin_lat + cos_dec * self.cos_lat * hour_angle.cos();
        let azimuth = f64::atan2(
            -cos_dec * self.cos_lat * hour_angle.sin(),
            sin_dec - self.sin_lat * sin_alt,
        );

        HorizontalCoordinates::new(angle::normalize_positive(azimuth), asin_safe(sin_alt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    #[test]
    fn test_ecliptic_to_equatorial_textbook() {
        // 2009-07-06 00:00 UTC, λ = 139°41'10", β = 4°52'31"
        // expects α ≈ 9h34m53.32s, δ ≈ 19°32'6.01".
        let when = Utc.with_ymd_and_hms(2009, 7, 6, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorial::new(when);

        let ecl = EclipticCoordinates::new(
            angle::from_dms(139, 41, 10.0).unwrap(),
            angle::from_dms(4, 52, 31.0).unwrap(),
        )
        .unwrap();
        let equ = conversion.apply(&ecl).unwrap();

        let expected_ra_hr = 9.0 + 34.0 / 60.0 + 53.32 / 3600.0;
        let expected_dec_deg = 19.0 + 32.0 / 60.0 + 6.01 / 3600.0;
        assert_abs_diff_eq!(equ.ra_hr(), expected_ra_hr, epsilon = 1e-3);
        assert_abs_diff_eq!(equ.dec_deg(), expected_dec_deg, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_latitude_on_equinox_direction() {
        // The vernal-equinox direction (λ = 0, β = 0) maps to α = 0, δ = 0.
        let when = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let conversion = EclipticToEquatorial::new(when);
        let equ = conversion
            .apply(&EclipticCoordinates::new(0.0, 0.0).unwrap())
            .unwrap();
        assert_abs_diff_eq!(equ.ra(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(equ.dec(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equatorial_to_horizontal_pole() {
        // From the north pole the celestial pole sits at the zenith, for any
        // instant.
        let when = Utc.with_ymd_and_hms(2020, 3, 20, 21, 0, 0).unwrap();
        let pole = GeographicCoordinates::from_deg(0.0, 90.0).unwrap();
        let conversion = EquatorialToHorizontal::new(when, &pole);

        let ncp = EquatorialCoordinates::new(0.0, skymap_core::constants::HALF_PI).unwrap();
        let hor = conversion.apply(&ncp).unwrap();
        assert_abs_diff_eq!(hor.alt_deg(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equatorial_to_horizontal_is_deterministic() {
        let when = Utc.with_ymd_and_hms(2021, 6, 1, 2, 30, 0).unwrap();
        let location = GeographicCoordinates::from_deg(6.15, 46.22).unwrap();
        let conversion = EquatorialToHorizontal::new(when, &location);

        let equ = EquatorialCoordinates::new(1.2, 0.4).unwrap();
        let a = conversion.apply(&equ).unwrap();
        let b = conversion.apply(&equ).unwrap();
        assert_eq!(a.az(), b.az());
        assert_eq!(a.alt(), b.alt());
    }
}
