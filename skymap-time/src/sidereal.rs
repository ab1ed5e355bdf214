//! Greenwich and local sidereal time.
//!
//! The Greenwich value is the classic two-part formula: a cubic polynomial in
//! Julian centuries since J2000, evaluated at the instant's UTC midnight,
//! plus the elapsed time since that midnight scaled by the sidereal rate.
//! Both results are radians in `[0, τ)`.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};

use skymap_core::angle;
use skymap_core::constants::MILLIS_PER_HOUR;
use skymap_core::Polynomial;

use crate::epoch::Epoch;

/// Sidereal hours elapse faster than solar hours by this factor.
const SIDEREAL_RATE: f64 = 1.002737909;

/// Cubic correction in hours, evaluated at Julian centuries since J2000.
static MIDNIGHT_POLYNOMIAL: LazyLock<Polynomial> = LazyLock::new(|| {
    Polynomial::new(0.000025862, &[2400.051336, 6.697374558])
        .expect("constant coefficients are valid")
});

/// Greenwich sidereal time at `when`, in radians in `[0, τ)`.
pub fn greenwich(when: DateTime<Utc>) -> f64 {
    let midnight = when
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time of day")
        .and_utc();

    let centuries_at_midnight = Epoch::J2000.julian_centuries_until(midnight);
    let hours_since_midnight =
        when.signed_duration_since(midnight).num_milliseconds() as f64 / MILLIS_PER_HOUR;

    let sidereal_hours =
        MIDNIGHT_POLYNOMIAL.at(centuries_at_midnight) + SIDEREAL_RATE * hours_since_midnight;

    angle::normalize_positive(angle::from_hr(sidereal_hours))
}

/// Local sidereal time at `when` for an observer at the given east-positive
/// longitude (radians), in radians in `[0, τ)`.
pub fn local(when: DateTime<Utc>, longitude: f64) -> f64 {
    angle::normalize_positive(greenwich(when) + longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;
    use skymap_core::constants::TAU;

    fn textbook_instant() -> DateTime<Utc> {
        // 1980-04-22 14:36:51.67 UTC, the classic worked example.
        Utc.with_ymd_and_hms(1980, 4, 22, 14, 36, 51)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(670))
            .unwrap()
    }

    #[test]
    fn test_greenwich_textbook_value() {
        // Expected GST: 4h 40m 5.23s.
        let expected_hours = 4.0 + 40.0 / 60.0 + 5.23 / 3600.0;
        let gst = greenwich(textbook_instant());
        assert_abs_diff_eq!(angle::to_hr(gst), expected_hours, epsilon = 1e-4);
    }

    #[test]
    fn test_greenwich_in_range() {
        for day in [1, 100, 200, 300] {
            let when = Utc.with_ymd_and_hms(2020, 1, 1, 3, 17, 9).unwrap()
                + chrono::Duration::days(day);
            let gst = greenwich(when);
            assert!((0.0..TAU).contains(&gst), "gst({day}) = {gst}");
        }
    }

    #[test]
    fn test_local_adds_longitude() {
        let when = textbook_instant();
        let lon = angle::from_deg(-64.0);
        assert_abs_diff_eq!(
            local(when, lon),
            angle::normalize_positive(greenwich(when) + lon),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_local_at_greenwich_is_greenwich() {
        let when = textbook_instant();
        assert_eq!(local(when, 0.0), greenwich(when));
    }
}
