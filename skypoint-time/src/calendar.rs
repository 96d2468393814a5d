//! Civil UTC timestamps.
//!
//! [`CalendarTime`] is the validated entry point of the time pipeline: a
//! Gregorian date plus time-of-day, already in UTC. Validation happens
//! once, at construction, so the Julian Day arithmetic downstream can
//! assume a real calendar instant. There is no timezone machinery
//! anywhere in this workspace; callers with local times convert before
//! constructing.

use std::fmt;

use crate::errors::{TimeError, TimeResult};

/// A validated Gregorian UTC date and time.
///
/// Fields are private; [`new`](Self::new) enforces that the combination
/// names a real instant (month 1-12, day valid for the month and year,
/// hour < 24, minute < 60, second < 60). Years outside the familiar
/// range are accepted as proleptic Gregorian dates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
}

impl CalendarTime {
    /// Creates a timestamp, rejecting combinations that name no real
    /// civil instant.
    ///
    /// Seconds are a real number to admit fractional timestamps, but must
    /// stay below 60: civil time has no representation for leap seconds.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidTimestamp(format!(
                "month {month} out of range 1-12"
            )));
        }

        let month_days = days_in_month(year, month);
        if !(1..=month_days).contains(&day) {
            return Err(TimeError::InvalidTimestamp(format!(
                "day {day} out of range for {year:04}-{month:02}"
            )));
        }

        if hour > 23 {
            return Err(TimeError::InvalidTimestamp(format!(
                "hour {hour} out of range 0-23"
            )));
        }

        if minute > 59 {
            return Err(TimeError::InvalidTimestamp(format!(
                "minute {minute} out of range 0-59"
            )));
        }

        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTimestamp(format!(
                "second {second} out of range [0, 60)"
            )));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> f64 {
        self.second
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:",
            self.year, self.month, self.day, self.hour, self.minute
        )?;
        if self.second.fract() == 0.0 {
            write!(f, "{:02}", self.second as u8)
        } else {
            write!(f, "{:06.3}", self.second)
        }
    }
}

/// Gregorian leap-year rule, valid for proleptic years as well.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
