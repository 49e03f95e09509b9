//! Core types and input validation for the Paystack client.
//!
//! This crate holds everything that can be checked before a request leaves the
//! process:
//!
//! - **Amounts**: `Amount`, `validate_amount`
//! - **Plans**: `Interval`, `validate_interval`
//! - **Payments**: `Currency`, `Channel`, `TransactionStatus`
//! - **References**: `TransactionReference`
//! - **Fields**: `require_field`
//!
//! # Amount Unit
//!
//! Paystack amounts are integers in the currency subunit:
//!
//! - NGN 1,000.00 → `100000` kobo
//! - GHS 5.00 → `500` pesewas

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod amount;
pub mod error;
pub mod payment;
pub mod plan;
pub mod reference;
pub mod validate;

pub use amount::{validate_amount, Amount, IntoAmount};
pub use error::{Result, ValidationError};
pub use payment::{Channel, Currency, TransactionStatus};
pub use plan::{validate_interval, Interval, IntoInterval};
pub use reference::TransactionReference;
pub use validate::require_field;
