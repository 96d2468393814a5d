//! The [`Angle`] type underlying every coordinate in the workspace.
//!
//! Angles are stored as radians (`f64`) because that is what the
//! trigonometric functions consume; the degree- and hour-based constructors
//! and accessors exist for the human-facing boundaries (site coordinates,
//! printed reports, sidereal clocks). Keeping one representation internally
//! avoids unit mistakes in the conversion formulas, which mix altitude,
//! azimuth, latitude, and sidereal values in a single expression.

use crate::constants::{HALF_PI, PI};

/// An angular measurement stored as radians.
///
/// `Eq`/`Ord` are deliberately absent: the payload is an `f64` and may be
/// NaN until validated.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Half turn (180°).
    pub const PI: Self = Self { rad: PI };

    /// Quarter turn (90°), the pole declination and zenith altitude.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Creates an angle from radians. The only `const` constructor,
    /// radians being the internal representation.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from hours of the 24h sidereal clock (1h = 15°).
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * 15.0).to_radians(),
        }
    }

    /// The angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// The angle in hours (24h = 360°).
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Both sine and cosine, for formulas that consume the pair.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Whether the underlying value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// The equivalent angle wrapped to [-pi, +pi).
    ///
    /// Use for longitude-like quantities where the discontinuity belongs at
    /// the anti-meridian.
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }

    /// The equivalent angle normalized to [0, 2*pi).
    ///
    /// Use for right ascension, azimuth, and other conventionally
    /// non-negative quantities.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TWOPI;

    #[test]
    fn test_degree_radian_round_trip() {
        let angle = Angle::from_degrees(51.5);
        assert_eq!(angle.degrees(), 51.5);
        assert!((angle.radians() - 0.8988445647770796).abs() < 1e-15);
    }

    #[test]
    fn test_quarter_turn_is_exact() {
        // 90.0_f64.to_radians() lands exactly on HALF_PI, so pole
        // comparisons against the constant are safe.
        assert_eq!(Angle::from_degrees(90.0), Angle::HALF_PI);
        assert_eq!(Angle::from_degrees(180.0), Angle::PI);
    }

    #[test]
    fn test_hours() {
        let ra = Angle::from_hours(6.0);
        assert!((ra.degrees() - 90.0).abs() < 1e-12);
        assert!((Angle::from_degrees(180.0).hours() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_sin_cos_pair() {
        let angle = Angle::from_degrees(30.0);
        let (sin, cos) = angle.sin_cos();
        assert!((sin - 0.5).abs() < 1e-10);
        assert!((cos - 0.8660254037844387).abs() < 1e-10);
    }

    #[test]
    fn test_normalized() {
        let angle = Angle::from_degrees(-90.0).normalized();
        assert!((angle.degrees() - 270.0).abs() < 1e-10);

        // A full turn comes back as exactly zero.
        assert_eq!(Angle::from_degrees(360.0).normalized(), Angle::ZERO);
    }

    #[test]
    fn test_wrapped() {
        let angle = Angle::from_degrees(270.0).wrapped();
        assert!((angle.degrees() + 90.0).abs() < 1e-10);
        assert!(Angle::from_radians(TWOPI).wrapped().radians().abs() < 1e-15);
    }

    #[test]
    fn test_is_finite() {
        assert!(Angle::from_degrees(45.0).is_finite());
        assert!(!Angle::from_radians(f64::NAN).is_finite());
        assert!(!Angle::from_radians(f64::INFINITY).is_finite());
    }
}
