//! Greenwich Mean Sidereal Time.

use std::fmt;

use skypoint_core::constants::{DAYS_PER_JULIAN_CENTURY, DEG_PER_HOUR};
use skypoint_core::wrap_0_360;

use crate::calendar::CalendarTime;
use crate::errors::{TimeError, TimeResult};
use crate::julian::JulianDay;

/// Beyond this many days from J2000 the polynomial loses all meaning.
const MAX_DAYS_FROM_J2000: f64 = 1e12;

/// Greenwich Mean Sidereal Time, held in degrees in [0, 360).
///
/// Evaluated from the Meeus polynomial. The linear rotation term takes the
/// Julian Day of the instant, while the small centennial terms take
/// centuries counted from the preceding midnight; the mixed form is kept
/// deliberately so results stay bit-compatible with the reference
/// reduction this pipeline pins its golden values against.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gmst(f64);

impl Gmst {
    /// Evaluates GMST for a Julian Day (UTC).
    ///
    /// # Errors
    ///
    /// [`TimeError::Calculation`] when the Julian Day is not finite or so
    /// far from J2000 that the polynomial terms overwhelm each other.
    pub fn from_julian_day(jd: JulianDay) -> TimeResult<Self> {
        let days = jd.days_since_j2000();
        if !days.is_finite() || days.abs() > MAX_DAYS_FROM_J2000 {
            return Err(TimeError::Calculation(format!(
                "Julian Day {} out of usable range for sidereal time",
                jd.value()
            )));
        }

        let t = jd.preceding_midnight().days_since_j2000() / DAYS_PER_JULIAN_CENTURY;

        let gmst = 280.46061837 + 360.98564736629 * days + 0.000387933 * t * t
            - t * t * t / 38_710_000.0;

        Ok(Self(wrap_0_360(gmst)))
    }

    /// Evaluates GMST for a calendar instant (UTC).
    pub fn from_calendar(time: &CalendarTime) -> TimeResult<Self> {
        Self::from_julian_day(JulianDay::from_calendar(time))
    }

    /// GMST in degrees, [0, 360).
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// GMST in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// GMST as a sidereal clock reading in hours, [0, 24).
    #[inline]
    pub fn hours(self) -> f64 {
        self.0 / DEG_PER_HOUR
    }
}

impl fmt::Display for Gmst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GMST {:.6}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gmst_at(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Gmst {
        let t = CalendarTime::new(year, month, day, hour, minute, second).unwrap();
        Gmst::from_calendar(&t).unwrap()
    }

    #[test]
    fn test_gmst_at_j2000() {
        // Published GMST at the J2000.0 epoch is 280.46061837°; only the
        // tiny quadratic/cubic midnight terms perturb the constant.
        let gmst = Gmst::from_julian_day(JulianDay::J2000).unwrap();
        assert!(
            (gmst.degrees() - 280.46061837).abs() < 1e-9,
            "GMST at J2000 should be ~280.4606°: {}",
            gmst.degrees()
        );

        // ~18.7 sidereal hours.
        assert!((gmst.hours() - 18.697374558).abs() < 1e-6);
    }

    #[test]
    fn test_gmst_solstice_noon_2024() {
        let gmst = gmst_at(2024, 6, 21, 12, 0, 0.0);
        assert!(
            (gmst.degrees() - 90.17680149711668).abs() < 1e-9,
            "GMST 2024-06-21 12:00 UTC: {}",
            gmst.degrees()
        );
    }

    #[test]
    fn test_gmst_2024_new_year_midnight() {
        let gmst = gmst_at(2024, 1, 1, 0, 0, 0.0);
        assert!((gmst.degrees() - 100.15262992680073).abs() < 1e-9);
    }

    #[test]
    fn test_gmst_always_reduced() {
        // A date decades from J2000 accumulates thousands of turns.
        let gmst = gmst_at(2063, 4, 5, 18, 30, 0.0);
        assert!((0.0..360.0).contains(&gmst.degrees()));

        // And one before it winds the polynomial negative.
        let gmst = gmst_at(1957, 10, 4, 19, 28, 34.0);
        assert!((0.0..360.0).contains(&gmst.degrees()));
    }

    #[test]
    fn test_gmst_advances_faster_than_solar_time() {
        // Sidereal gains ~0.9856°/day over the 360°/day solar clock.
        let a = gmst_at(2024, 6, 21, 12, 0, 0.0);
        let b = gmst_at(2024, 6, 22, 12, 0, 0.0);
        let gain = wrap_0_360(b.degrees() - a.degrees());
        assert!(
            (gain - 0.98564736629).abs() < 1e-4,
            "daily sidereal gain should be ~0.9856°: {gain}"
        );
    }

    #[test]
    fn test_rejects_unusable_julian_day() {
        assert!(Gmst::from_julian_day(JulianDay::new(f64::NAN)).is_err());
        assert!(Gmst::from_julian_day(JulianDay::new(f64::INFINITY)).is_err());

        let err = Gmst::from_julian_day(JulianDay::new(1e15)).unwrap_err();
        assert!(err.to_string().contains("out of usable range"));
    }

    #[test]
    fn test_display() {
        let gmst = Gmst::from_julian_day(JulianDay::J2000).unwrap();
        let text = gmst.to_string();
        assert!(text.starts_with("GMST 280.4606"));
        assert!(text.ends_with('°'));
    }
}
