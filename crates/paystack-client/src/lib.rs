//! Paystack Client SDK.
//!
//! This crate provides an async client for the Paystack payments API:
//! transactions, transfers, customers, plans and subscriptions.
//!
//! Every call returns an [`ApiResponse`] carrying the HTTP status code,
//! Paystack's `status` flag, its `message` and the decoded `data`. Failed
//! answers (`4xx`/`5xx`) come back the same way with `status == false`; use
//! [`ApiResponse::into_result`] to turn them into errors.
//!
//! # Example
//!
//! ```no_run
//! use paystack_client::{InitializeOptions, PaystackClient};
//!
//! # async fn example() -> Result<(), paystack_client::ClientError> {
//! let client = PaystackClient::new("sk_test_xxx")?;
//!
//! // Start a NGN 1,000.00 checkout
//! let response = client
//!     .transactions()
//!     .initialize("customer@example.com", 100_000, InitializeOptions::default())
//!     .await?;
//!
//! let checkout = response.into_result()?;
//! println!("Redirect to {}", checkout.authorization_url);
//!
//! // Later, confirm the payment
//! let (status_code, status, message, transaction) = client
//!     .transactions()
//!     .verify(&checkout.reference)
//!     .await?
//!     .into_parts();
//! println!("{status_code} {status} {message}: {transaction:?}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod resources;
mod response;
mod types;
pub mod webhook;

pub use client::PaystackClient;
pub use config::{
    ClientOptions, PaystackConfig, AUTH_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS,
    SECRET_KEY_ENV,
};
pub use error::ClientError;
pub use paystack_core::{
    validate_amount, validate_interval, Amount, Channel, Currency, Interval, IntoAmount,
    IntoInterval, TransactionReference, TransactionStatus, ValidationError,
};
pub use reqwest::Method;
pub use resources::{
    ChargeOptions, CustomerDetails, Customers, InitializeOptions, ListParams, PlanOptions, Plans,
    RecipientOptions, TransactionListParams, Transactions, TransferOptions, DEFAULT_PER_PAGE,
};
pub use response::{ApiResponse, PageMeta, NOT_FOUND_MESSAGE};
pub use types::*;
pub use webhook::WebhookEvent;
