//! Webhook signature verification.
//!
//! Paystack signs every webhook body with HMAC-SHA512 keyed by the secret key
//! and sends the hex digest in the `x-paystack-signature` header.

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha512;

use crate::error::ClientError;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// A verified webhook delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    /// Event name, e.g. `charge.success` or `transfer.failed`.
    pub event: String,
    /// Event payload.
    #[serde(default)]
    pub data: serde_json::Value,
}

fn mac_for(secret: &str, payload: &[u8]) -> Result<HmacSha512, ClientError> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| ClientError::Configuration(format!("invalid webhook key: {e}")))?;
    mac.update(payload);
    Ok(mac)
}

/// Compute the hex-encoded signature Paystack would send for `payload`.
///
/// # Errors
///
/// Only fails if the HMAC implementation rejects the key.
pub fn compute_signature(secret: &str, payload: &[u8]) -> Result<String, ClientError> {
    Ok(hex::encode(mac_for(secret, payload)?.finalize().into_bytes()))
}

/// Check a webhook signature in constant time.
///
/// # Errors
///
/// Returns [`ClientError::InvalidSignature`] if the signature is not valid
/// hex or does not match the payload.
pub fn verify_webhook_signature(
    secret: &str,
    payload: &[u8],
    signature: &str,
) -> Result<(), ClientError> {
    let expected = hex::decode(signature.trim()).map_err(|_| ClientError::InvalidSignature)?;
    mac_for(secret, payload)?
        .verify_slice(&expected)
        .map_err(|_| ClientError::InvalidSignature)
}

/// Verify a webhook delivery and decode its body.
///
/// # Errors
///
/// Returns [`ClientError::InvalidSignature`] on mismatch, or
/// [`ClientError::Serialization`] if the body is not an event.
pub fn parse_webhook_event(
    secret: &str,
    payload: &[u8],
    signature: &str,
) -> Result<WebhookEvent, ClientError> {
    verify_webhook_signature(secret, payload, signature)?;
    Ok(serde_json::from_slice(payload)?)
}
