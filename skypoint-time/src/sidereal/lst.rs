//! Local Sidereal Time.

use std::fmt;

use skypoint_core::constants::DEG_PER_HOUR;
use skypoint_core::{wrap_0_360, Angle, Location};

use crate::calendar::CalendarTime;
use crate::errors::TimeResult;

use super::gmst::Gmst;

/// Local Sidereal Time: GMST offset by the observer's east longitude,
/// held in degrees and deliberately *not* reduced into [0, 360).
///
/// Western sites carry negative values (Mauna Kea sits near GMST − 155°),
/// and the right-ascension computation downstream subtracts the hour angle
/// from this raw value before taking its own modulo. Reducing here would
/// change nothing mathematically but would break bit-compatibility with
/// the reference arithmetic the golden tests pin; [`reduced`](Self::reduced)
/// exists for display.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiderealTime(f64);

impl SiderealTime {
    /// Computes LST for a site at a calendar instant (UTC).
    pub fn local(site: &Location, time: &CalendarTime) -> TimeResult<Self> {
        let gmst = Gmst::from_calendar(time)?;
        Ok(Self::from_gmst(gmst, site.longitude()))
    }

    /// Offsets a Greenwich value by an east longitude.
    pub fn from_gmst(gmst: Gmst, east_longitude: Angle) -> Self {
        Self(gmst.degrees() + east_longitude.degrees())
    }

    /// Wraps a raw LST value in degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    /// LST in degrees, unreduced.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// LST in radians, unreduced.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// LST reduced into [0, 360) degrees, for display.
    #[inline]
    pub fn reduced(self) -> f64 {
        wrap_0_360(self.0)
    }

    /// LST as a sidereal clock reading in hours, [0, 24).
    #[inline]
    pub fn hours(self) -> f64 {
        self.reduced() / DEG_PER_HOUR
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LST {:.6}° ({:.6}h)", self.reduced(), self.hours())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solstice_noon() -> CalendarTime {
        CalendarTime::new(2024, 6, 21, 12, 0, 0.0).unwrap()
    }

    fn keck() -> Location {
        Location::from_degrees(19.8260, -155.4681).unwrap()
    }

    #[test]
    fn test_lst_at_greenwich_equals_gmst() {
        let time = solstice_noon();
        let gmst = Gmst::from_calendar(&time).unwrap();
        let lst = SiderealTime::local(&Location::greenwich(), &time).unwrap();
        assert_eq!(lst.degrees(), gmst.degrees());
    }

    #[test]
    fn test_western_site_goes_negative_unreduced() {
        let time = CalendarTime::new(2024, 1, 1, 0, 0, 0.0).unwrap();
        let lst = SiderealTime::local(&keck(), &time).unwrap();

        // GMST is ~100.15°; Keck sits 155.47° west of Greenwich.
        assert!(
            (lst.degrees() - (-55.315470073199265)).abs() < 1e-9,
            "unreduced Keck LST should be negative: {}",
            lst.degrees()
        );

        // The display form wraps onto the positive branch.
        assert!((lst.reduced() - (360.0 - 55.315470073199265)).abs() < 1e-9);
        assert!((0.0..24.0).contains(&lst.hours()));
    }

    #[test]
    fn test_longitude_offset_is_linear() {
        let time = solstice_noon();
        let gmst = Gmst::from_calendar(&time).unwrap();

        // 15° of east longitude is one sidereal hour, uncapped.
        let east = SiderealTime::from_gmst(gmst, Angle::from_degrees(15.0));
        let west = SiderealTime::from_gmst(gmst, Angle::from_degrees(-15.0));
        assert!((east.degrees() - gmst.degrees() - 15.0).abs() < 1e-12);
        assert!((west.degrees() - gmst.degrees() + 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_unreduced_value_may_exceed_full_turn() {
        // A [0, 360) longitude convention can push LST past 360°.
        let site = Location::from_degrees(19.8260, 350.0).unwrap();
        let lst = SiderealTime::local(&site, &solstice_noon()).unwrap();
        assert!(lst.degrees() > 360.0);
        assert!((0.0..360.0).contains(&lst.reduced()));
    }

    #[test]
    fn test_radians_track_degrees() {
        let lst = SiderealTime::from_degrees(-55.315);
        assert!((lst.radians() - (-55.315_f64).to_radians()).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        let lst = SiderealTime::from_degrees(90.0);
        assert_eq!(lst.to_string(), "LST 90.000000° (6.000000h)");
    }
}
