//! Custom error types and handling
//!
//! This module defines the application's error types. The grading pipeline
//! itself never fails past its own boundary (execution failures become
//! per-test diagnostics); these errors cover validation, lookup, and storage.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation("x".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::NotFound("x".into()).error_code(), "NOT_FOUND");
        assert_eq!(AppError::Storage("x".into()).error_code(), "STORAGE_ERROR");
    }
}
