//! Argument validation for queries and mutations.

use crate::error::{BookqlError, Result};

/// Maximum allowed length for an author or book name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Unwraps an id argument the schema declares nullable but lookups need.
pub fn require_id(id: Option<i32>) -> Result<i32> {
    id.ok_or_else(|| BookqlError::Validation("Argument `id` is required".to_string()))
}

/// Validates an author or book name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BookqlError::Validation("Name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(BookqlError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}
