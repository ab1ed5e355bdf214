//! The J2000 and J2010 reference epochs.

use chrono::{DateTime, TimeZone, Utc};

use skymap_core::constants::{DAYS_PER_JULIAN_CENTURY, MILLIS_PER_DAY};

/// A fixed reference instant used as the time origin of astronomical
/// formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Epoch {
    /// 2000-01-01 12:00:00 UTC.
    J2000,
    /// 2009-12-31 00:00:00 UTC.
    J2010,
}

impl Epoch {
    /// The calendar instant of this epoch.
    pub fn instant(self) -> DateTime<Utc> {
        let (year, month, day, hour) = match self {
            Epoch::J2000 => (2000, 1, 1, 12),
            Epoch::J2010 => (2009, 12, 31, 0),
        };
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .expect("epoch instants are valid calendar dates")
    }

    /// Signed number of days between this epoch and `when`, positive when
    /// `when` is later.
    ///
    /// Computed at millisecond resolution, then scaled.
    pub fn days_until(self, when: DateTime<Utc>) -> f64 {
        let millis = when.signed_duration_since(self.instant()).num_milliseconds();
        millis as f64 / MILLIS_PER_DAY
    }

    /// Signed number of Julian centuries (36 525 days) between this epoch and
    /// `when`.
    pub fn julian_centuries_until(self, when: DateTime<Utc>) -> f64 {
        self.days_until(when) / DAYS_PER_JULIAN_CENTURY
    }
}
