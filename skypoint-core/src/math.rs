use crate::errors::{MathErrorKind, SkyError, SkyResult};

/// Slack admitted beyond ±1 for inverse-trig arguments.
///
/// Spherical-trigonometry identities evaluate to sines and cosines that can
/// land a few ulps outside [-1, 1]. Arguments within this slack are clamped;
/// anything further out is a real domain violation and is reported.
pub const INVERSE_TRIG_SLACK: f64 = 1e-9;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Arcsine with rounding-slack clamping.
///
/// Returns the principal value in [-pi/2, +pi/2]. Arguments beyond
/// ±(1 + [`INVERSE_TRIG_SLACK`]) mean the caller fed physically
/// inconsistent values into an identity, and produce an
/// [`OutOfRange`](MathErrorKind::OutOfRange) error labelled with
/// `operation`.
pub fn checked_asin(operation: &str, x: f64) -> SkyResult<f64> {
    Ok(unit_interval(operation, x)?.asin())
}

/// Arccosine with rounding-slack clamping.
///
/// Returns the principal value in [0, pi]. Same domain policy as
/// [`checked_asin`].
pub fn checked_acos(operation: &str, x: f64) -> SkyResult<f64> {
    Ok(unit_interval(operation, x)?.acos())
}

fn unit_interval(operation: &str, x: f64) -> SkyResult<f64> {
    if !x.is_finite() {
        return Err(SkyError::math_error(
            operation,
            MathErrorKind::NotFinite,
            &format!("inverse trig argument {x} is not finite"),
        ));
    }

    if x.abs() <= 1.0 {
        return Ok(x);
    }

    if x.abs() <= 1.0 + INVERSE_TRIG_SLACK {
        return Ok(x.clamp(-1.0, 1.0));
    }

    Err(SkyError::math_error(
        operation,
        MathErrorKind::OutOfRange,
        &format!("inverse trig argument {x} outside [-1, 1]"),
    ))
}
