//! Error types shared by the pointing pipeline.
//!
//! Everything numeric in this workspace funnels through [`SkyError`]: angle
//! validation, geographic bounds checks, and the guarded inverse-trig calls
//! in [`crate::math`]. Functions return [`SkyResult<T>`], and the
//! [`math_error`](SkyError::math_error) constructor keeps error creation
//! uniform:
//!
//! ```
//! use skypoint_core::{MathErrorKind, SkyError};
//!
//! fn checked_latitude(deg: f64) -> Result<f64, SkyError> {
//!     if deg.abs() > 90.0 {
//!         return Err(SkyError::math_error(
//!             "checked_latitude",
//!             MathErrorKind::OutOfRange,
//!             "latitude outside [-90, 90]",
//!         ));
//!     }
//!     Ok(deg)
//! }
//! ```

use thiserror::Error;

/// Classification of numeric failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Value is NaN or infinite.
    NotFinite,
    /// Value outside the domain the operation accepts
    /// (e.g. latitude beyond ±90°, arcsine argument beyond ±1).
    OutOfRange,
}

/// Numeric error carrying the operation that rejected the value.
///
/// The `operation` label names the validation or computation step, so a
/// failure deep in a conversion chain still reads as e.g.
/// `Math error in validate_declination (OutOfRange): ...`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyError {
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, SkyError>`.
pub type SkyResult<T> = Result<T, SkyError>;

impl SkyError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// The numeric failure classification.
    pub fn kind(&self) -> MathErrorKind {
        match self {
            Self::MathError { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_display() {
        let err = SkyError::math_error(
            "validate_latitude",
            MathErrorKind::OutOfRange,
            "latitude 95 outside [-90, 90]",
        );
        assert_eq!(
            err.to_string(),
            "Math error in validate_latitude (OutOfRange): latitude 95 outside [-90, 90]"
        );
    }

    #[test]
    fn test_kind_accessor() {
        let err = SkyError::math_error("acos", MathErrorKind::NotFinite, "argument is NaN");
        assert_eq!(err.kind(), MathErrorKind::NotFinite);
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<SkyError>();
        _assert_sync::<SkyError>();
    }
}
