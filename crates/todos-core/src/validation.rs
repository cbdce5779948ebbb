//! # Validation Module
//!
//! Input validation for list and todo titles.
//!
//! Validation runs in the calling layer before the store is touched; the
//! database still enforces NOT NULL and UNIQUE constraints underneath, so a
//! caller that skips validation gets a constraint error instead of a panic.
//!
//! ## Usage
//! ```rust
//! use todos_core::validation::validate_list_title;
//!
//! let title = validate_list_title("  groceries  ").unwrap();
//! assert_eq!(title, "groceries");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_TITLE_LEN;

/// Validates a list title.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_TITLE_LEN`] characters
///
/// ## Returns
/// The trimmed title.
pub fn validate_list_title(title: &str) -> ValidationResult<String> {
    validate_title(title, "list title")
}

/// Validates a todo title. Same rules as list titles.
pub fn validate_todo_title(title: &str) -> ValidationResult<String> {
    validate_title(title, "todo title")
}

fn validate_title(title: &str, field: &str) -> ValidationResult<String> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(title.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
