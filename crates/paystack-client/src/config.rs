//! Client configuration.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::ClientError;

/// Paystack API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Environment variable holding the secret key.
pub const AUTH_KEY_ENV: &str = "PAYSTACK_AUTHORIZATION_KEY";

/// Alternative environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "PAYSTACK_SECRET_KEY";

const SECRET_PATHS: [&str; 3] = [
    ".secrets/paystack.json",
    "../.secrets/paystack.json",
    "../../.secrets/paystack.json",
];

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// API base URL (default: `https://api.paystack.co`).
    pub base_url: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientOptions {
    /// Create options pointing at another base URL (mock servers, proxies).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override the request timeout. Must be at least one second.
    #[must_use]
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

/// Client configuration loaded from a secrets file or the environment.
#[derive(Clone)]
pub struct PaystackConfig {
    /// Secret key (`sk_test_...` or `sk_live_...`).
    pub secret_key: String,
    /// API base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl fmt::Debug for PaystackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackConfig")
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Paystack secrets file structure.
#[derive(Debug, Deserialize)]
struct PaystackSecrets {
    secret_key: String,
    #[serde(default)]
    base_url: Option<String>,
}

impl PaystackConfig {
    /// Configuration with the given key and default options.
    #[must_use]
    pub fn new(secret_key: impl Into<String>) -> Self {
        let options = ClientOptions::default();
        Self {
            secret_key: secret_key.into(),
            base_url: options.base_url,
            timeout_seconds: options.timeout_seconds,
        }
    }

    /// Load configuration from a secrets file or environment variables.
    ///
    /// The key is taken from the first `.secrets/paystack.json` found, then
    /// from `PAYSTACK_AUTHORIZATION_KEY`, then from `PAYSTACK_SECRET_KEY`.
    /// `PAYSTACK_BASE_URL` and `PAYSTACK_TIMEOUT_SECONDS` override defaults;
    /// a timeout that is zero or not a number is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAuthKey`] when no key is found.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::load(&SECRET_PATHS, |name| std::env::var(name).ok())
    }

    /// Load configuration from one secrets file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds a
    /// blank key.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let secrets: PaystackSecrets = serde_json::from_str(&contents)?;
        if secrets.secret_key.trim().is_empty() {
            return Err(ClientError::MissingAuthKey);
        }

        let mut config = Self::new(secrets.secret_key);
        if let Some(base_url) = secrets.base_url {
            config.base_url = base_url;
        }
        Ok(config)
    }

    fn load<P, F>(paths: &[P], env: F) -> Result<Self, ClientError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let mut from_file = None;
        for path in paths {
            let path: &Path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded Paystack secrets from file");
                    from_file = Some(config);
                    break;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable Paystack secrets file");
                }
            }
        }

        let mut config = if let Some(config) = from_file {
            config
        } else {
            tracing::debug!("Paystack secrets file not found, using environment variables");
            let key = env(AUTH_KEY_ENV)
                .or_else(|| env(SECRET_KEY_ENV))
                .filter(|key| !key.trim().is_empty())
                .ok_or(ClientError::MissingAuthKey)?;
            Self::new(key)
        };

        if let Some(base_url) = env("PAYSTACK_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = env("PAYSTACK_TIMEOUT_SECONDS") {
            match raw.trim().parse::<u64>() {
                Ok(timeout) if timeout > 0 => config.timeout_seconds = timeout,
                _ => tracing::warn!(
                    value = %raw,
                    default = config.timeout_seconds,
                    "Ignoring invalid PAYSTACK_TIMEOUT_SECONDS"
                ),
            }
        }
        Ok(config)
    }

    /// Options half of this configuration.
    #[must_use]
    pub fn options(&self) -> ClientOptions {
        ClientOptions {
            timeout_seconds: self.timeout_seconds,
            base_url: self.base_url.clone(),
        }
    }
}
