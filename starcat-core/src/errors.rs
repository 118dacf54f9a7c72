//! Error types for the astrometric core.
//!
//! The numeric code is total over finite input, so the only failure is
//! text that does not read as an angle. Fallible functions return
//! [`CoreResult<T>`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Text could not be read as an angle.
    #[error("Invalid angle '{text}': {message}")]
    InvalidAngle { text: String, message: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn invalid_angle(text: &str, reason: &str) -> Self {
        Self::InvalidAngle {
            text: text.to_string(),
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_angle_message() {
        let err = CoreError::invalid_angle("12 xx", "non-numeric field");
        assert_eq!(err.to_string(), "Invalid angle '12 xx': non-numeric field");
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let err = crate::angle::parse_sexagesimal("").unwrap_err();
        assert!(matches!(err, CoreError::InvalidAngle { .. }));
    }
}
