//! Context-specific validation methods on [`Angle`].
//!
//! Each coordinate role has its own rule: polar quantities (latitude,
//! declination, altitude) must sit inside ±90°, cyclic quantities (right
//! ascension, azimuth) accept any finite value and normalize, and
//! geographic longitude only has to be finite. The methods return the
//! validated (possibly normalized) angle so construction sites can chain
//! them with `?`.

use super::core::Angle;
use crate::constants::HALF_PI;
use crate::errors::{MathErrorKind, SkyError, SkyResult};

impl Angle {
    /// Validates a geographic latitude, range [-90°, +90°].
    pub fn validate_latitude(self) -> SkyResult<Self> {
        self.polar_range("validate_latitude", "latitude")
    }

    /// Validates a declination, range [-90°, +90°].
    pub fn validate_declination(self) -> SkyResult<Self> {
        self.polar_range("validate_declination", "declination")
    }

    /// Validates an altitude above/below the horizon, range [-90°, +90°].
    pub fn validate_altitude(self) -> SkyResult<Self> {
        self.polar_range("validate_altitude", "altitude")
    }

    /// Validates a right ascension, normalizing to [0, 360)°.
    ///
    /// RA is cyclic, so any finite angle is accepted.
    pub fn validate_right_ascension(self) -> SkyResult<Self> {
        self.cyclic("validate_right_ascension", "right ascension")
    }

    /// Validates an azimuth, normalizing to [0, 360)°.
    ///
    /// Azimuth is measured from North through East and is cyclic like RA.
    pub fn validate_azimuth(self) -> SkyResult<Self> {
        self.cyclic("validate_azimuth", "azimuth")
    }

    /// Validates a Galactic longitude, normalizing to [0, 360)°.
    pub fn validate_galactic_longitude(self) -> SkyResult<Self> {
        self.cyclic("validate_galactic_longitude", "galactic longitude")
    }

    /// Validates a Galactic latitude, range [-90°, +90°].
    pub fn validate_galactic_latitude(self) -> SkyResult<Self> {
        self.polar_range("validate_galactic_latitude", "galactic latitude")
    }

    /// Validates a geographic east longitude.
    ///
    /// Only finiteness is required: sidereal-time arithmetic accepts
    /// longitudes in [-180, 180], [0, 360), or any other convention
    /// unchanged.
    pub fn validate_longitude(self) -> SkyResult<Self> {
        if self.is_finite() {
            return Ok(self);
        }

        Err(SkyError::math_error(
            "validate_longitude",
            MathErrorKind::NotFinite,
            "longitude is not finite",
        ))
    }

    fn polar_range(self, operation: &str, quantity: &str) -> SkyResult<Self> {
        let rad = self.radians();
        if !rad.is_finite() {
            return Err(SkyError::math_error(
                operation,
                MathErrorKind::NotFinite,
                &format!("{quantity} is not finite"),
            ));
        }

        if (-HALF_PI..=HALF_PI).contains(&rad) {
            return Ok(self);
        }

        Err(SkyError::math_error(
            operation,
            MathErrorKind::OutOfRange,
            &format!(
                "{quantity} {:.2}° out of range [-90°, +90°]",
                self.degrees()
            ),
        ))
    }

    fn cyclic(self, operation: &str, quantity: &str) -> SkyResult<Self> {
        if self.is_finite() {
            return Ok(self.normalized());
        }

        Err(SkyError::math_error(
            operation,
            MathErrorKind::NotFinite,
            &format!("{quantity} is not finite"),
        ))
    }
}
