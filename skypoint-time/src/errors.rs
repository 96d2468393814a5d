use thiserror::Error;

/// Failures in timestamp handling and sidereal-time computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Timestamp text does not match the accepted pattern.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Timestamp fields form no real civil instant (February 30, hour 25).
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Sidereal arithmetic was handed an unusable Julian Day.
    #[error("Calculation error: {0}")]
    Calculation(String),
}

/// Convenience alias for `Result<T, TimeError>`.
pub type TimeResult<T> = Result<T, TimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TimeError::Parse("Invalid year: '20a0'".to_string());
        assert_eq!(err.to_string(), "Parse error: Invalid year: '20a0'");

        let err = TimeError::InvalidTimestamp("day 30 out of range for 2023-02".to_string());
        assert!(err.to_string().starts_with("Invalid timestamp:"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<TimeError>();
        _assert_sync::<TimeError>();
    }
}
