//! Paystack HTTP client implementation.

use paystack_core::{require_field, ValidationError};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::config::{ClientOptions, PaystackConfig};
use crate::error::ClientError;
use crate::resources::{Customers, Plans, Transactions};
use crate::response::{normalize, ApiResponse};
use crate::webhook::{self, WebhookEvent};

/// Paystack API client.
///
/// Cheap to clone; clones share the underlying connection pool. Resource
/// groups are reached through [`transactions`](Self::transactions),
/// [`customers`](Self::customers) and [`plans`](Self::plans).
#[derive(Clone)]
pub struct PaystackClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl fmt::Debug for PaystackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PaystackClient {
    /// Create a new client against the live API.
    ///
    /// # Arguments
    ///
    /// * `secret_key` - Paystack secret key (`sk_test_...` or `sk_live_...`)
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAuthKey`] for a blank key, or a
    /// configuration error if the HTTP client cannot be built.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(secret_key, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAuthKey`] for a blank key, or a
    /// configuration error for a zero timeout, an unparsable base URL, or
    /// when the HTTP client cannot be built.
    pub fn with_options(
        secret_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let secret_key = secret_key.into();
        if secret_key.trim().is_empty() {
            return Err(ClientError::MissingAuthKey);
        }
        if options.timeout_seconds == 0 {
            return Err(ClientError::Configuration(
                "timeout must be at least one second".to_string(),
            ));
        }
        let base_url = options.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base URL {base_url:?}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            secret_key,
        })
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// See [`with_options`](Self::with_options).
    pub fn from_config(config: &PaystackConfig) -> Result<Self, ClientError> {
        Self::with_options(config.secret_key.clone(), config.options())
    }

    /// Create a client from a secrets file or the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAuthKey`] when no key is configured.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(&PaystackConfig::from_env()?)
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Transaction, transfer and subscription endpoints.
    #[must_use]
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }

    /// Customer endpoints.
    #[must_use]
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    /// Plan endpoints.
    #[must_use]
    pub fn plans(&self) -> Plans<'_> {
        Plans::new(self)
    }

    /// Verify and decode a webhook delivery signed with this client's key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidSignature`] on mismatch, or a
    /// serialization error if the body is not a webhook event.
    pub fn parse_webhook(&self, payload: &[u8], signature: &str) -> Result<WebhookEvent, ClientError> {
        webhook::parse_webhook_event(&self.secret_key, payload, signature)
    }

    /// Send a request to any endpoint.
    ///
    /// `path` is appended to the base URL. Only GET, POST, PUT and DELETE are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnsupportedMethod`] for other verbs (before any
    /// I/O), [`ClientError::Http`] on transport failure, or
    /// [`ClientError::Serialization`] when a successful body does not decode.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<ApiResponse<T>, ClientError> {
        if ![Method::GET, Method::POST, Method::PUT, Method::DELETE].contains(&method) {
            return Err(ClientError::UnsupportedMethod(method.to_string()));
        }
        let url = self.url(path, &[])?;
        self.send(method, url, &[], payload).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, ClientError> {
        let url = self.url(path, &[])?;
        self.send(Method::GET, url, query, None).await
    }

    /// GET `path/{id}` with `id` sent as a single escaped segment.
    pub(crate) async fn get_item<T: DeserializeOwned>(
        &self,
        path: &str,
        id: &str,
    ) -> Result<ApiResponse<T>, ClientError> {
        let url = self.url(path, &[id])?;
        self.send(Method::GET, url, &[], None).await
    }

    pub(crate) async fn post<T: DeserializeOwned, P: Serialize>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<ApiResponse<T>, ClientError> {
        let body = serde_json::to_value(payload)?;
        let url = self.url(path, &[])?;
        self.send(Method::POST, url, &[], Some(body)).await
    }

    /// PUT `path/{id}` with `id` sent as a single escaped segment.
    pub(crate) async fn put_item<T: DeserializeOwned, P: Serialize>(
        &self,
        path: &str,
        id: &str,
        payload: &P,
    ) -> Result<ApiResponse<T>, ClientError> {
        let body = serde_json::to_value(payload)?;
        let url = self.url(path, &[id])?;
        self.send(Method::PUT, url, &[], Some(body)).await
    }

    /// Join `path` onto the base URL, then append each of `ids` as one
    /// percent-encoded path segment. `/`, `?` and `#` inside an id never
    /// change the endpoint.
    fn url(&self, path: &str, ids: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ClientError::Configuration(format!("invalid request URL: {e}")))?;
        if ids.is_empty() {
            return Ok(url);
        }

        for id in ids {
            let id = require_field(id, "resource identifier is required")?;
            if id == "." || id == ".." {
                return Err(ValidationError::InvalidData(format!(
                    "resource identifier {id:?} is not allowed"
                ))
                .into());
            }
        }
        url.path_segments_mut()
            .map_err(|()| ClientError::Configuration("base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(ids);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, String)],
        payload: Option<Value>,
    ) -> Result<ApiResponse<T>, ClientError> {
        let path = url.path().to_string();
        tracing::debug!(method = %method, path = %path, "Sending Paystack request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.secret_key)
            .header("Content-Type", "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = payload {
            request = request.json(&payload);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        let normalized = normalize(status, &body)?;

        if normalized.is_success() {
            tracing::debug!(method = %method, path = %path, status, "Paystack request succeeded");
        } else {
            tracing::warn!(
                method = %method,
                path = %path,
                status,
                message = %normalized.message,
                "Paystack request failed"
            );
        }

        Ok(normalized)
    }
}
