//! Common test utilities for Paystack client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use paystack_client::{ClientOptions, PaystackClient};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Secret key the harness client is built with.
pub const TEST_KEY: &str = "sk_test_harness";

/// Expected `Authorization` header value.
pub const BEARER: &str = "Bearer sk_test_harness";

/// Test harness: a mock Paystack server and a client pointed at it.
pub struct TestHarness {
    /// The mock server.
    pub server: MockServer,
    /// Client talking to the mock server.
    pub client: PaystackClient,
}

impl TestHarness {
    /// Start a fresh mock server.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = PaystackClient::with_options(TEST_KEY, ClientOptions::with_base_url(server.uri()))
            .expect("Failed to create client");
        Self { server, client }
    }

    /// Number of requests the server has seen.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    /// JSON body of the most recent request.
    pub async fn last_body(&self) -> Value {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording is enabled");
        let last = requests.last().expect("no request received");
        serde_json::from_slice(&last.body).expect("request body is JSON")
    }

    /// Raw (still percent-encoded) path of the most recent request.
    pub async fn last_path(&self) -> String {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording is enabled");
        let last = requests.last().expect("no request received");
        last.url.path().to_string()
    }

    /// Query pairs of the most recent request.
    pub async fn last_query(&self) -> Vec<(String, String)> {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording is enabled");
        let last = requests.last().expect("no request received");
        last.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// Successful Paystack envelope.
pub fn envelope(message: &str, data: Value) -> Value {
    json!({
        "status": true,
        "message": message,
        "data": data,
    })
}
