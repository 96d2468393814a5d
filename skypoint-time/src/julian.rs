//! Julian Day numbers.

use std::fmt;

use skypoint_core::constants::{
    HOURS_PER_DAY, J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY_F64,
};

use crate::calendar::CalendarTime;

/// A continuous Julian Day number: days since noon UTC, 4713 BCE
/// (proleptic Julian calendar). The fractional part encodes time of day,
/// with `.0` at noon.
///
/// A single `f64` resolves the modern era to well under a microsecond,
/// which is orders of magnitude tighter than the sidereal polynomial
/// downstream needs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDay(f64);

impl JulianDay {
    /// The J2000.0 epoch, 2000-01-01 12:00:00 UTC.
    pub const J2000: Self = Self(J2000_JD);

    /// Wraps a raw Julian Day value.
    #[inline]
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Converts a calendar timestamp via the Fliegel–Van Flandern integer
    /// day-number algorithm.
    ///
    /// The day-number terms stay in exact `i64` arithmetic (with
    /// `div_euclid` supplying mathematical floor division, which matters
    /// for proleptic years before 4800 BCE); only the time-of-day fraction
    /// goes through real division.
    pub fn from_calendar(t: &CalendarTime) -> Self {
        let month = i64::from(t.month());
        let a = (14 - month).div_euclid(12);
        let y = i64::from(t.year()) + 4800 - a;
        let m = month + 12 * a - 3;

        let jdn = i64::from(t.day())
            + (153 * m + 2).div_euclid(5)
            + 365 * y
            + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;

        let day_fraction = (f64::from(t.hour()) - 12.0) / HOURS_PER_DAY
            + f64::from(t.minute()) / MINUTES_PER_DAY
            + t.second() / SECONDS_PER_DAY_F64;

        Self(jdn as f64 + day_fraction)
    }

    /// The raw Julian Day value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The Julian Day of the midnight preceding this instant (a value
    /// ending in `.5`, since Julian days roll over at noon).
    #[inline]
    pub fn preceding_midnight(self) -> Self {
        Self((self.0 + 0.5).floor() - 0.5)
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    #[inline]
    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000_JD
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.0)
    }
}

impl From<f64> for JulianDay {
    fn from(jd: f64) -> Self {
        Self(jd)
    }
}
