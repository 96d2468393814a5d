//! Angle wrapping for cyclic quantities.
//!
//! The pipeline needs three reductions:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth | [0, 2pi) rad | [`wrap_0_2pi`] |
//! | GMST | [0, 360)° | [`wrap_0_360`] |
//! | Longitude display | [-pi, +pi) rad | [`wrap_pm_pi`] |
//!
//! All three reduce via `libm::fmod` (through [`crate::math::fmod`]) and
//! then adjust the sign, rather than using `rem_euclid`. `fmod` keeps the
//! dividend's sign (`fmod(-1.0, 360.0) = -1.0`), so "`fmod`, then add the
//! modulus if negative" reproduces the mathematical modulo exactly, with
//! the same rounding as the textbook sidereal-time reductions these
//! functions implement. `rem_euclid` computes the adjustment differently
//! and can disagree in the last ulp, which matters when results are pinned
//! against reference values.

use crate::constants::{DEGREES_PER_TURN, PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle in radians to [0, 2pi).
///
/// Used for right ascension (negative values wrap around the equinox:
/// -0.5 rad is the same direction as 2pi - 0.5) and azimuth.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps an angle in degrees to [0, 360).
///
/// Degree-space twin of [`wrap_0_2pi`], for sidereal time values that are
/// carried in degrees.
#[inline]
pub fn wrap_0_360(x: f64) -> f64 {
    let w = fmod(x, DEGREES_PER_TURN);
    if w < 0.0 {
        w + DEGREES_PER_TURN
    } else {
        w
    }
}

/// Wraps an angle in radians to [-pi, +pi).
///
/// Puts the discontinuity at the anti-meridian, the conventional form for
/// displaying geographic longitude with hemisphere letters.
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w.abs() >= PI {
        return w - TWOPI.copysign(x);
    }

    w
}
