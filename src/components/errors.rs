//! # Acceptance Errors

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for the acceptance pipeline
pub type AcceptResult<T> = Result<T, AcceptError>;

/// Reasons submitted code is refused.
///
/// The set is closed so callers can map each reason to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("code exceeds 200KB limit")]
    TooLarge,

    #[error("imports are not allowed")]
    ImportsDisallowed,
}

impl ValidationError {
    /// Stable machine-readable tag
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::TooLarge => "too_large",
            ValidationError::ImportsDisallowed => "imports_disallowed",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        400
    }
}

/// The secure randomness source could not produce an identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("id generation failed: {0}")]
pub struct GenerationFailure(pub String);

impl GenerationFailure {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        500
    }
}

/// Errors produced by [`accept`](super::accept)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcceptError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationFailure),
}

impl AcceptError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            AcceptError::Validation(e) => e.status_code(),
            AcceptError::Generation(e) => e.status_code(),
        }
    }
}
