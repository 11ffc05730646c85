//! Error types for projtrack

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type alias using projtrack's Error
pub type Result<T> = std::result::Result<T, Error>;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the offending field in the request body
    pub field: String,
    /// Human-readable failure message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Error taxonomy exposed to the boundary layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Configuration,
    Unhandled,
}

impl ErrorKind {
    /// Name used in error response bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Configuration => "ConfigurationError",
            ErrorKind::Unhandled => "UnhandledError",
        }
    }

    /// Suggested HTTP status code for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Configuration | ErrorKind::Unhandled => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// projtrack error types
#[derive(Error, Debug)]
pub enum Error {
    // Input errors (E100-E199)
    #[error("{message}")]
    Validation {
        message: String,
        failures: Vec<FieldError>,
    },

    // Entity errors (E200-E299)
    #[error("{0}")]
    NotFound(String),

    // Config errors (E300-E399)
    #[error("{0}")]
    Configuration(String),

    // Database errors (E400-E499)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // Summarizer errors (E500-E599)
    #[error("Network error: {0}. Check your internet connection.")]
    Network(#[from] reqwest::Error),

    #[error("Summarizer error: {0}")]
    Summarizer(String),
}

impl Error {
    /// Validation error carrying a single message and no field list
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            failures: Vec::new(),
        }
    }

    /// Validation error built from collected field failures
    pub fn invalid_fields(failures: Vec<FieldError>) -> Self {
        let message = match failures.as_slice() {
            [single] => single.message.clone(),
            _ => format!("{} fields failed validation", failures.len()),
        };
        Self::Validation { message, failures }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Field failures attached to a validation error
    pub fn failures(&self) -> &[FieldError] {
        match self {
            Self::Validation { failures, .. } => failures,
            _ => &[],
        }
    }

    /// Classify this error for the boundary layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Database(_)
            | Self::Network(_)
            | Self::Summarizer(_) => ErrorKind::Unhandled,
        }
    }

    /// Suggested HTTP status code
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "E100",
            Self::NotFound(_) => "E200",
            Self::Configuration(_) => "E300",
            Self::Database(_) => "E400",
            Self::Network(_) => "E500",
            Self::Summarizer(_) => "E501",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_kind() {
        let err = Error::validation("End date is required when status is Completed");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code(), "E100");
        assert_eq!(err.to_string(), "End date is required when status is Completed");
        assert!(err.failures().is_empty());
    }

    #[test]
    fn test_invalid_fields_single_failure_uses_its_message() {
        let err = Error::invalid_fields(vec![FieldError::new("status", "Invalid status")]);
        assert_eq!(err.to_string(), "Invalid status");
        assert_eq!(err.failures().len(), 1);
        assert_eq!(err.failures()[0].field, "status");
    }

    #[test]
    fn test_invalid_fields_many_failures() {
        let err = Error::invalid_fields(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("status", "Invalid status"),
        ]);
        assert_eq!(err.to_string(), "2 fields failed validation");
        assert_eq!(err.failures().len(), 2);
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::not_found("Project not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.kind().as_str(), "NotFoundError");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_configuration_error() {
        let err = Error::configuration("API key not configured");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.kind().as_str(), "ConfigurationError");
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_other_errors_are_unhandled() {
        let err = Error::Summarizer("quota exhausted".to_string());
        assert_eq!(err.kind(), ErrorKind::Unhandled);
        assert_eq!(err.kind().as_str(), "UnhandledError");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.code(), "E501");
    }
}
