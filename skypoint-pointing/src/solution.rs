//! The composed pointing pipeline and its result value.

use std::fmt;

use serde::Serialize;
use skypoint_coords::{EquatorialPosition, GalacticPosition, HorizontalPosition};
use skypoint_core::Location;
use skypoint_time::{CalendarTime, JulianDay, SiderealTime};

use crate::error::Result;

/// One resolved pointing: the inputs echoed alongside every intermediate
/// and final value of the conversion chain.
///
/// Built by [`resolve`](Self::resolve), which runs the pipeline in its
/// fixed order: timestamp → Julian Day → LST; (LST, pointing, site) →
/// equatorial; equatorial → galactic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointingSolution {
    site: Location,
    pointing: HorizontalPosition,
    time: CalendarTime,
    julian_day: JulianDay,
    sidereal: SiderealTime,
    equatorial: EquatorialPosition,
    galactic: GalacticPosition,
}

impl PointingSolution {
    /// Resolves a horizontal pointing at a site and UTC instant.
    pub fn resolve(
        site: Location,
        pointing: HorizontalPosition,
        time: CalendarTime,
    ) -> Result<Self> {
        let julian_day = JulianDay::from_calendar(&time);
        let sidereal = SiderealTime::local(&site, &time)?;
        let equatorial = pointing.to_equatorial(&site, sidereal)?;
        let galactic = equatorial.to_galactic()?;

        Ok(Self {
            site,
            pointing,
            time,
            julian_day,
            sidereal,
            equatorial,
            galactic,
        })
    }

    #[inline]
    pub fn site(&self) -> Location {
        self.site
    }

    #[inline]
    pub fn pointing(&self) -> HorizontalPosition {
        self.pointing
    }

    #[inline]
    pub fn time(&self) -> CalendarTime {
        self.time
    }

    #[inline]
    pub fn julian_day(&self) -> JulianDay {
        self.julian_day
    }

    #[inline]
    pub fn sidereal(&self) -> SiderealTime {
        self.sidereal
    }

    #[inline]
    pub fn equatorial(&self) -> EquatorialPosition {
        self.equatorial
    }

    #[inline]
    pub fn galactic(&self) -> GalacticPosition {
        self.galactic
    }

    /// The flat, serializable form the CLI's JSON output uses.
    pub fn report(&self) -> Report {
        Report {
            latitude_deg: self.site.latitude_degrees(),
            longitude_deg: self.site.longitude_degrees(),
            altitude_deg: self.pointing.altitude().degrees(),
            azimuth_deg: self.pointing.azimuth().degrees(),
            time_utc: self.time.to_string(),
            julian_day: self.julian_day.value(),
            lst_deg: self.sidereal.reduced(),
            ra_deg: self.equatorial.right_ascension().degrees(),
            dec_deg: self.equatorial.declination().degrees(),
            galactic_l_deg: self.galactic.longitude().degrees(),
            galactic_b_deg: self.galactic.latitude().degrees(),
        }
    }
}

impl fmt::Display for PointingSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Observation site: {}", self.site)?;
        writeln!(f, "Pointing: {}", self.pointing)?;
        writeln!(f, "Observation time: {} UTC", self.time)?;
        writeln!(f, "Julian Day: {}", self.julian_day)?;
        writeln!(f, "Local Sidereal Time: {}", self.sidereal)?;
        writeln!(f, "RESULTS:")?;
        writeln!(
            f,
            "Right Ascension (in degree): {:.2}",
            self.equatorial.right_ascension().degrees()
        )?;
        writeln!(
            f,
            "Declination (in degree): {:.2}",
            self.equatorial.declination().degrees()
        )?;
        writeln!(
            f,
            "Galactic Longitude (in degree): {:.2}",
            self.galactic.longitude().degrees()
        )?;
        write!(
            f,
            "Galactic Latitude (in degree): {:.2}",
            self.galactic.latitude().degrees()
        )
    }
}

/// Flat record of one solution, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub time_utc: String,
    pub julian_day: f64,
    pub lst_deg: f64,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub galactic_l_deg: f64,
    pub galactic_b_deg: f64,
}
