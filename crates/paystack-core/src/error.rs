//! Validation error types.

/// Result type for input validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised when request input is rejected before any HTTP traffic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Amount is zero, empty or missing.
    #[error("amount to be charged is required")]
    AmountRequired,

    /// Amount is below zero.
    #[error("negative amount is not allowed")]
    NegativeAmount,

    /// Amount text is not a whole number.
    #[error("amount must be a number: {0:?}")]
    NotANumber(String),

    /// Plan interval is not one Paystack accepts.
    #[error("invalid interval {given:?}, choose from: {allowed}")]
    InvalidInterval {
        /// The rejected value.
        given: String,
        /// Comma separated list of accepted intervals.
        allowed: String,
    },

    /// Currency code is not supported.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Payment channel is not supported.
    #[error("unsupported payment channel: {0}")]
    UnsupportedChannel(String),

    /// A required field is blank.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
