//! Charge amounts in currency subunits.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};

/// A positive amount in the currency subunit (kobo, pesewas, cents).
///
/// The only way to obtain one is through validation, so a request payload
/// holding an `Amount` never carries a zero or negative charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AmountRequired`] when `subunits` is zero.
    pub fn new(subunits: u64) -> Result<Self> {
        if subunits == 0 {
            return Err(ValidationError::AmountRequired);
        }
        Ok(Self(subunits))
    }

    /// Return the amount in subunits.
    #[must_use]
    pub const fn subunits(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::AmountRequired);
        }
        match trimmed.parse::<i128>() {
            Ok(value) if value < 0 => Err(ValidationError::NegativeAmount),
            Ok(value) => u64::try_from(value)
                .map_err(|_| ValidationError::NotANumber(s.to_string()))
                .and_then(Self::new),
            Err(_) => Err(ValidationError::NotANumber(s.to_string())),
        }
    }
}

/// Conversion into a validated [`Amount`].
///
/// Implemented for the integer types callers usually hold and for text, so
/// resource methods accept `100_000`, `100_000_u64` or `"100000"` alike.
pub trait IntoAmount {
    /// Validate and convert.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the value is zero, negative or not
    /// a whole number.
    fn into_amount(self) -> Result<Amount>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> Result<Amount> {
        Ok(self)
    }
}

impl IntoAmount for u64 {
    fn into_amount(self) -> Result<Amount> {
        Amount::new(self)
    }
}

impl IntoAmount for u32 {
    fn into_amount(self) -> Result<Amount> {
        Amount::new(u64::from(self))
    }
}

impl IntoAmount for i64 {
    fn into_amount(self) -> Result<Amount> {
        if self < 0 {
            return Err(ValidationError::NegativeAmount);
        }
        Amount::new(self.unsigned_abs())
    }
}

impl IntoAmount for i32 {
    fn into_amount(self) -> Result<Amount> {
        i64::from(self).into_amount()
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Amount> {
        self.parse()
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<Amount> {
        self.parse()
    }
}

/// Validate an amount to be charged.
///
/// # Errors
///
/// - [`ValidationError::AmountRequired`] for zero or empty input
/// - [`ValidationError::NegativeAmount`] for values below zero
/// - [`ValidationError::NotANumber`] for text that is not a whole number
pub fn validate_amount<A: IntoAmount>(amount: A) -> Result<Amount> {
    amount.into_amount()
}
