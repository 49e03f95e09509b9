//! Merchant transaction references.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ValidationError};

/// A merchant-chosen transaction reference.
///
/// Paystack requires references to be unique per integration. Only
/// alphanumerics and `-`, `.`, `=` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionReference(String);

impl TransactionReference {
    /// Wrap a reference after checking its characters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidData`] for blank references or
    /// references with characters Paystack rejects.
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(ValidationError::InvalidData(
                "transaction reference cannot be blank".into(),
            ));
        }
        if !reference
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '='))
        {
            return Err(ValidationError::InvalidData(format!(
                "transaction reference {reference:?} may only contain alphanumerics, '-', '.' and '='"
            )));
        }
        Ok(Self(reference))
    }

    /// Generate a fresh random reference.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TransactionReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
