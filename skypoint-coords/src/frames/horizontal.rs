//! Horizontal (altitude/azimuth) positions and the conversion to the
//! equatorial frame.

use std::fmt;

use skypoint_core::constants::{HALF_PI, TWOPI};
use skypoint_core::math::{checked_acos, checked_asin};
use skypoint_core::{wrap_0_2pi, Angle, Location};
use skypoint_time::SiderealTime;

use crate::constants::POLAR_DENOMINATOR_EPS;
use crate::errors::CoordResult;

use super::equatorial::EquatorialPosition;

/// A pointing in the observer's horizontal frame.
///
/// Altitude is the angle above the horizon in [-90°, +90°] (negative
/// pointings are legal; nothing here models the ground). Azimuth is
/// measured from North through East and normalizes into [0, 360°).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalPosition {
    altitude: Angle,
    azimuth: Angle,
}

impl HorizontalPosition {
    /// Creates a position from validated angles.
    pub fn new(altitude: Angle, azimuth: Angle) -> CoordResult<Self> {
        let altitude = altitude.validate_altitude()?;
        let azimuth = azimuth.validate_azimuth()?;
        Ok(Self { altitude, azimuth })
    }

    /// Creates a position from degrees.
    pub fn from_degrees(alt_deg: f64, az_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(alt_deg), Angle::from_degrees(az_deg))
    }

    #[inline]
    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    #[inline]
    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    /// Angular distance from the zenith.
    pub fn zenith_angle(&self) -> Angle {
        Angle::from_radians(HALF_PI - self.altitude.radians())
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude.radians() > 0.0
    }

    /// Converts to the equatorial frame for a site and sidereal instant.
    ///
    /// Spherical-triangle solution: declination from the altitude/latitude/
    /// azimuth identity, then the hour angle from its cosine, reflected
    /// into [180°, 360°) when the azimuth's sine is positive (object east
    /// of the meridian), and finally RA = LST − H reduced into [0, 360°).
    ///
    /// When cos(lat)·cos(dec) vanishes (observer at a geographic pole, or
    /// pointing at a celestial pole) the hour-angle quotient is 0/0; the
    /// limit value 90° is substituted instead of dividing. Arguments pushed
    /// marginally past ±1 by rounding are clamped; anything further out
    /// reports an error rather than a NaN.
    pub fn to_equatorial(
        &self,
        observer: &Location,
        lst: SiderealTime,
    ) -> CoordResult<EquatorialPosition> {
        let (sin_alt, cos_alt) = self.altitude.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_lat, cos_lat) = observer.latitude().sin_cos();

        let sin_dec = sin_alt * sin_lat + cos_alt * cos_lat * cos_az;
        let dec = checked_asin("declination", sin_dec)?;

        let denominator = cos_lat * dec.cos();
        let hour_angle = if denominator.abs() < POLAR_DENOMINATOR_EPS {
            HALF_PI
        } else {
            let cos_h = (sin_alt - sin_lat * dec.sin()) / denominator;
            checked_acos("hour angle", cos_h)?
        };

        // Eastern sky: reflect the principal value across the meridian.
        let hour_angle = if sin_az > 0.0 {
            TWOPI - hour_angle
        } else {
            hour_angle
        };

        let ra = wrap_0_2pi(lst.radians() - hour_angle);

        EquatorialPosition::new(Angle::from_radians(ra), Angle::from_radians(dec))
    }
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alt {:.4}°, Az {:.4}°",
            self.altitude.degrees(),
            self.azimuth.degrees()
        )
    }
}
