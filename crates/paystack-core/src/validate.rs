//! Required field checks.

use crate::error::{Result, ValidationError};

/// Ensure a required text field is present and not blank.
///
/// `message` becomes the error text, e.g. "Customer's email is required to charge".
///
/// # Errors
///
/// Returns [`ValidationError::InvalidData`] when `value` is empty or only
/// whitespace.
pub fn require_field<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidData(message.to_string()));
    }
    Ok(value)
}
