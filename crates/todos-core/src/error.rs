//! # Error Types
//!
//! Validation error types for todos-core.
//!
//! Database failures are a separate concern and live in todos-db's `DbError`;
//! the web layer translates both into user-facing messages.

use thiserror::Error;

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before the store is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
