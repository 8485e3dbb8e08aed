//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Domain-specific errors in the core crate convert into these at the
/// application boundary; the variants map one-to-one onto the error
/// kinds callers are expected to branch on.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found (department, material, or charge transaction).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error on caller-supplied input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// G/L account resolution failed for a department.
    #[error("G/L resolution error: {0}")]
    Resolution(String),

    /// An operation was attempted outside its required lifecycle state.
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// Conflict (e.g., duplicate identifier).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration error at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Resolution(_) | Self::InvalidStateTransition(_) => 422,
            Self::Conflict(_) => 409,
            Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Resolution(_) => "RESOLUTION_ERROR",
            Self::InvalidStateTransition(_) => "INVALID_STATE_TRANSITION",
            Self::Conflict(_) => "CONFLICT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
