//! Angle unit conversions and normalization.
//!
//! Every angular quantity in the workspace is an `f64` in **radians**; the
//! functions here convert at the boundaries:
//!
//! | Function | Converts |
//! |----------|----------|
//! | [`from_deg`] / [`to_deg`] | degrees ↔ radians |
//! | [`from_hr`] / [`to_hr`] | hours (24h = τ) ↔ radians |
//! | [`from_arcsec`] | arcseconds → radians |
//! | [`from_dms`] | degrees/arcminutes/arcseconds → radians (validated) |
//! | [`normalize_positive`] | any radians → `[0, τ)` |
//!
//! Normalization goes through [`RightOpenInterval::reduce`], which guarantees
//! both containment in `[0, τ)` and periodicity:
//! `normalize_positive(r + τ) == normalize_positive(r)` up to rounding.

use crate::constants::{
    MINUTES_PER_DEGREE, RAD_PER_ARCSEC, RAD_PER_DEG, RAD_PER_HOUR, SECONDS_PER_MINUTE, TAU,
};
use crate::errors::{MathError, MathResult};
use crate::interval::RightOpenInterval;

const FULL_TURN: RightOpenInterval = RightOpenInterval::of_const(0.0, TAU);
const SEXAGESIMAL: RightOpenInterval = RightOpenInterval::of_const(0.0, 60.0);

/// Reduces any radian value into `[0, τ)`.
#[inline]
pub fn normalize_positive(rad: f64) -> f64 {
    FULL_TURN.reduce(rad)
}

/// Converts degrees to radians.
#[inline]
pub fn from_deg(deg: f64) -> f64 {
    deg * RAD_PER_DEG
}

/// Converts radians to degrees.
#[inline]
pub fn to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Converts hours to radians (24 hours per turn).
#[inline]
pub fn from_hr(hr: f64) -> f64 {
    hr * RAD_PER_HOUR
}

/// Converts radians to hours.
#[inline]
pub fn to_hr(rad: f64) -> f64 {
    rad / RAD_PER_HOUR
}

/// Converts arcseconds to radians.
#[inline]
pub fn from_arcsec(arcsec: f64) -> f64 {
    arcsec * RAD_PER_ARCSEC
}

/// Converts a degrees/arcminutes/arcseconds triple to radians.
///
/// Fails if `deg` is negative or if `min` or `sec` lies outside `[0, 60)`.
pub fn from_dms(deg: i32, min: i32, sec: f64) -> MathResult<f64> {
    if deg < 0 {
        return Err(MathError::NegativeDegrees(deg));
    }

    let mut total_arcsec = SEXAGESIMAL.check(sec)?;
    total_arcsec += SEXAGESIMAL.check(f64::from(min))? * SECONDS_PER_MINUTE;
    total_arcsec += f64::from(deg) * MINUTES_PER_DEGREE * SECONDS_PER_MINUTE;

    Ok(total_arcsec * RAD_PER_ARCSEC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_positive_range() {
        for r in [-10.0, -PI, -0.1, 0.0, 0.1, PI, 10.0, 100.0] {
            let n = normalize_positive(r);
            assert!((0.0..TAU).contains(&n), "normalize({r}) = {n}");
        }
    }

    #[test]
    fn test_normalize_positive_periodic() {
        for r in [-5.0, -0.5, 0.0, 1.0, 3.0] {
            assert_abs_diff_eq!(
                normalize_positive(r + TAU),
                normalize_positive(r),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_deg_round_trip() {
        assert_abs_diff_eq!(from_deg(180.0), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(to_deg(PI / 2.0), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hr_is_fifteen_degrees() {
        assert_abs_diff_eq!(from_hr(1.0), from_deg(15.0), epsilon = 1e-15);
        assert_abs_diff_eq!(to_hr(from_deg(30.0)), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arcsec() {
        assert_abs_diff_eq!(from_arcsec(3600.0), from_deg(1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_dms() {
        // 1°30'00" = 1.5°
        assert_abs_diff_eq!(from_dms(1, 30, 0.0).unwrap(), from_deg(1.5), epsilon = 1e-15);
        // obliquity-style value
        assert_abs_diff_eq!(
            from_dms(23, 26, 21.45).unwrap(),
            from_deg(23.0 + 26.0 / 60.0 + 21.45 / 3600.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dms_rejects_invalid_components() {
        assert!(from_dms(-1, 0, 0.0).is_err());
        assert!(from_dms(0, 60, 0.0).is_err());
        assert!(from_dms(0, -1, 0.0).is_err());
        assert!(from_dms(0, 0, 60.0).is_err());
        assert!(from_dms(0, 0, -0.5).is_err());
    }
}
