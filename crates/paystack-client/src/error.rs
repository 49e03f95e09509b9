//! Client error types.

use paystack_core::ValidationError;

/// Errors that can occur when using the Paystack client.
///
/// A non-2xx answer from Paystack is not an error by itself: it comes back
/// inside [`ApiResponse`](crate::ApiResponse). [`ClientError::Api`] is only
/// produced by [`ApiResponse::into_result`](crate::ApiResponse::into_result).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request input was rejected before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Paystack answered with a failure.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the response body.
        message: String,
        /// `errors` object from the response body, if any.
        errors: Option<serde_json::Value>,
    },

    /// A successful response carried no `data`.
    #[error("response carried no data: {message}")]
    MissingData {
        /// Message from the response body.
        message: String,
    },

    /// No secret key was supplied or found in the environment.
    #[error("missing Paystack authorization key; set PAYSTACK_AUTHORIZATION_KEY or pass one explicitly")]
    MissingAuthKey,

    /// HTTP verb other than GET, POST, PUT or DELETE.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Webhook signature did not match the payload.
    #[error("invalid webhook signature")]
    InvalidSignature,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
