//! Custom error types for Cravox
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cravox operations
#[derive(Error, Debug)]
pub enum CravoxError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Preference store errors (unknown keys, worker gone, injected failures)
    #[error("Preference error: {0}")]
    Preference(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CravoxError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the persistence layer
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Preference(_) | Self::Io(_))
    }
}

impl From<std::io::Error> for CravoxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CravoxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Cravox operations
pub type CravoxResult<T> = Result<T, CravoxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CravoxError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_preference_error_is_storage() {
        let err = CravoxError::Preference("store offline".into());
        assert_eq!(err.to_string(), "Preference error: store offline");
        assert!(err.is_storage());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CravoxError = io_err.into();
        assert!(matches!(err, CravoxError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CravoxError = json_err.into();
        assert!(matches!(err, CravoxError::Json(_)));
    }
}
