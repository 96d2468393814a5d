//! Galactic (l/b) positions, the end of the conversion chain.

use std::fmt;

use skypoint_core::Angle;

use crate::errors::CoordResult;

/// A direction in Galactic coordinates: longitude along the Galactic
/// plane from the Galactic center, latitude toward the North Galactic
/// Pole.
///
/// Longitude wraps into [0°, 360°) on construction, so values built from
/// the arcsine branch of the conversion (which can dip below zero) come
/// out canonical. Latitude must sit in [-90°, +90°].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalacticPosition {
    longitude: Angle,
    latitude: Angle,
}

impl GalacticPosition {
    /// Creates a position from validated angles.
    pub fn new(longitude: Angle, latitude: Angle) -> CoordResult<Self> {
        let longitude = longitude.validate_galactic_longitude()?;
        let latitude = latitude.validate_galactic_latitude()?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Creates a position from degrees.
    pub fn from_degrees(l_deg: f64, b_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(l_deg), Angle::from_degrees(b_deg))
    }

    #[inline]
    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// Whether the direction lies within |b| < 10°, the rough extent of
    /// the Galactic disk on the sky.
    pub fn is_in_galactic_plane(&self) -> bool {
        self.latitude.degrees().abs() < 10.0
    }
}

impl fmt::Display for GalacticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "l {:.4}°, b {:+.4}°",
            self.longitude.degrees(),
            self.latitude.degrees()
        )
    }
}
