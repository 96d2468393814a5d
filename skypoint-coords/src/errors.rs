use skypoint_core::SkyError;
use skypoint_time::TimeError;
use thiserror::Error;

/// Convenience alias for `Result<T, CoordError>`.
pub type CoordResult<T> = Result<T, CoordError>;

/// Failures constructing or converting coordinate positions.
#[derive(Debug, Error)]
pub enum CoordError {
    /// A position component failed validation, or a conversion identity
    /// produced a value outside its domain.
    #[error("invalid coordinate: {source}")]
    InvalidCoordinate {
        #[from]
        source: SkyError,
    },

    /// Sidereal-time input to a conversion was unusable.
    #[error("sidereal time error: {source}")]
    SiderealTime {
        #[from]
        source: TimeError,
    },

    /// A conversion produced a result no valid position can hold.
    #[error("conversion failed: {message}")]
    Conversion { message: String },
}

impl CoordError {
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skypoint_core::MathErrorKind;

    #[test]
    fn test_wraps_core_error() {
        let core = SkyError::math_error("validate_altitude", MathErrorKind::OutOfRange, "95°");
        let err = CoordError::from(core);
        assert!(err.to_string().starts_with("invalid coordinate:"));
        assert!(err.to_string().contains("validate_altitude"));
    }

    #[test]
    fn test_wraps_time_error() {
        let err = CoordError::from(TimeError::Calculation("bad JD".to_string()));
        assert!(err.to_string().contains("bad JD"));
    }

    #[test]
    fn test_conversion_message() {
        let err = CoordError::conversion("no real solution");
        assert_eq!(err.to_string(), "conversion failed: no real solution");
    }
}
