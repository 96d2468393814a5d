//! Observing sites on Earth's surface.
//!
//! A [`Location`] is the pair of angles the pointing pipeline needs from an
//! observer: geodetic latitude (fixes the horizon-to-equator rotation) and
//! east longitude (offsets Greenwich sidereal time to local). Heights and
//! ellipsoid corrections are not modelled; nothing downstream consumes
//! them.

use std::fmt;

use crate::angle::Angle;
use crate::errors::SkyResult;

/// An observing site: geodetic latitude and east longitude.
///
/// Latitude is validated into [-90°, +90°] on construction. Longitude only
/// has to be finite; [-180, 180], [0, 360), or any other convention passes
/// through unchanged, since sidereal-time arithmetic is insensitive to the
/// branch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    latitude: Angle,
    longitude: Angle,
}

impl Location {
    /// Creates a site from validated angles.
    pub fn new(latitude: Angle, longitude: Angle) -> SkyResult<Self> {
        let latitude = latitude.validate_latitude()?;
        let longitude = longitude.validate_longitude()?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a site from degrees, the usual human-facing form.
    ///
    /// # Errors
    ///
    /// Returns an error if the latitude is outside [-90, 90] or either
    /// value is not finite.
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> SkyResult<Self> {
        Self::new(Angle::from_degrees(lat_deg), Angle::from_degrees(lon_deg))
    }

    /// The Royal Observatory Greenwich, where LST equals GMST.
    pub fn greenwich() -> Self {
        Self {
            latitude: Angle::from_degrees(51.4769),
            longitude: Angle::ZERO,
        }
    }

    /// Geodetic latitude, positive north.
    #[inline]
    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// East longitude, as supplied.
    #[inline]
    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    /// Latitude in degrees.
    #[inline]
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.degrees()
    }

    /// East longitude in degrees, as supplied (no branch change).
    #[inline]
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.degrees()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat = self.latitude.degrees();
        let lat_hemisphere = if lat < 0.0 { 'S' } else { 'N' };

        // Render longitude on the [-180, 180) branch for the E/W letter,
        // whatever convention the site was entered in.
        let lon = self.longitude.wrapped().degrees();
        let lon_hemisphere = if lon < 0.0 { 'W' } else { 'E' };

        write!(
            f,
            "{:.4}°{}, {:.4}°{}",
            lat.abs(),
            lat_hemisphere,
            lon.abs(),
            lon_hemisphere
        )
    }
}
