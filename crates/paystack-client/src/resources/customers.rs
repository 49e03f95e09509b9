//! Customer endpoints.

use paystack_core::require_field;
use serde::Serialize;
use serde_json::Value;

use super::{non_blank, non_empty, ListParams};
use crate::client::PaystackClient;
use crate::error::ClientError;
use crate::response::ApiResponse;
use crate::types::Customer;

/// Optional customer profile fields.
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Arbitrary metadata.
    pub metadata: Option<Value>,
}

#[derive(Serialize)]
struct CustomerPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
}

impl<'a> CustomerPayload<'a> {
    fn new(email: Option<&'a str>, details: CustomerDetails) -> Self {
        Self {
            email,
            first_name: non_blank(details.first_name),
            last_name: non_blank(details.last_name),
            phone: non_blank(details.phone),
            metadata: non_empty(details.metadata),
        }
    }
}

/// Customer endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a PaystackClient,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank email, before any request is
    /// sent.
    pub async fn create(
        &self,
        email: &str,
        details: CustomerDetails,
    ) -> Result<ApiResponse<Customer>, ClientError> {
        let email = require_field(email, "Customer's email is required for creation")?;
        let payload = CustomerPayload::new(Some(email), details);
        self.client.post("/customer", &payload).await
    }

    /// Update a customer's profile.
    ///
    /// `id_or_code` is the numeric ID or the `CUS_...` code. Fields left as
    /// `None` are not touched.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank identifier.
    pub async fn update(
        &self,
        id_or_code: &str,
        email: Option<&str>,
        details: CustomerDetails,
    ) -> Result<ApiResponse<Customer>, ClientError> {
        let id_or_code = require_field(id_or_code, "Customer ID or code is required to update")?;
        let email = email.filter(|e| !e.trim().is_empty());
        let payload = CustomerPayload::new(email, details);
        self.client.put_item("/customer", id_or_code, &payload).await
    }

    /// List customers.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn list(&self, params: ListParams) -> Result<ApiResponse<Vec<Customer>>, ClientError> {
        self.client.get("/customer", &params.query()).await
    }

    /// Fetch one customer by ID, code or email.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank identifier.
    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse<Customer>, ClientError> {
        let id_or_code = require_field(id_or_code, "Customer ID or code is required to fetch")?;
        self.client.get_item("/customer", id_or_code).await
    }
}
