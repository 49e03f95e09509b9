//! Normalized Paystack responses.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// Message reported for a `404` response; the body is not consulted.
pub const NOT_FOUND_MESSAGE: &str = "The object request cannot be found";

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of records.
    #[serde(default)]
    pub total: Option<u64>,
    /// Records skipped before this page.
    #[serde(default)]
    pub skipped: Option<u64>,
    /// Page size.
    #[serde(default)]
    pub per_page: Option<u64>,
    /// Current page, starting at 1.
    #[serde(default)]
    pub page: Option<u64>,
    /// Number of pages.
    #[serde(default)]
    pub page_count: Option<u64>,
}

/// Result of one Paystack call: status code, success flag, message and data.
///
/// Every resource method returns this shape, including for `4xx`/`5xx`
/// answers. On failure `data` is `None` and the body's `errors` object is
/// kept in `errors`.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code.
    pub status_code: u16,
    /// `status` flag from the body.
    pub status: bool,
    /// `message` from the body.
    pub message: String,
    /// `data` from the body, for `200`/`201` answers.
    pub data: Option<T>,
    /// Pagination, for list endpoints.
    pub meta: Option<PageMeta>,
    /// Error details, for failed answers.
    pub errors: Option<Value>,
}

impl<T> ApiResponse<T> {
    /// Whether Paystack reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status && (200..300).contains(&self.status_code)
    }

    /// Split into the `(status_code, status, message, data)` tuple.
    #[must_use]
    pub fn into_parts(self) -> (u16, bool, String, Option<T>) {
        (self.status_code, self.status, self.message, self.data)
    }

    /// Convert into the data on success or a [`ClientError`] otherwise.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] when Paystack reported a failure
    /// - [`ClientError::MissingData`] when a success carried no data
    pub fn into_result(self) -> Result<T, ClientError> {
        if !self.is_success() {
            return Err(ClientError::Api {
                status: self.status_code,
                message: self.message,
                errors: self.errors,
            });
        }
        self.data.ok_or(ClientError::MissingData {
            message: self.message,
        })
    }

    pub(crate) fn not_found() -> Self {
        Self {
            status_code: 404,
            status: false,
            message: NOT_FOUND_MESSAGE.to_string(),
            data: None,
            meta: None,
            errors: None,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: bool,
    #[serde(default)]
    message: String,
    data: Option<T>,
    #[serde(default)]
    meta: Option<PageMeta>,
}

/// Normalize a status code and raw body into an [`ApiResponse`].
pub(crate) fn normalize<T: DeserializeOwned>(
    status_code: u16,
    body: &[u8],
) -> Result<ApiResponse<T>, ClientError> {
    match status_code {
        404 => Ok(ApiResponse::not_found()),
        200 | 201 => {
            let envelope: Envelope<T> = serde_json::from_slice(body)?;
            Ok(ApiResponse {
                status_code,
                status: envelope.status,
                message: envelope.message,
                data: envelope.data,
                meta: envelope.meta,
                errors: None,
            })
        }
        _ => Ok(failure(status_code, body)),
    }
}

fn failure<T>(status_code: u16, body: &[u8]) -> ApiResponse<T> {
    let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
        return ApiResponse {
            status_code,
            status: false,
            message: String::new(),
            data: None,
            meta: None,
            errors: None,
        };
    };

    let status = fields
        .get("status")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let message = fields
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let errors = match fields.remove("errors") {
        Some(errors) => Some(errors),
        None => Some(Value::Object(fields)),
    };

    ApiResponse {
        status_code,
        status,
        message,
        data: None,
        meta: None,
        errors,
    }
}
