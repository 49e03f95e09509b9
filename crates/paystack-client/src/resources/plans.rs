//! Plan endpoints.

use paystack_core::{
    require_field, validate_amount, Amount, Currency, Interval, IntoAmount, IntoInterval,
};
use serde::Serialize;

use super::{non_blank, ListParams};
use crate::client::PaystackClient;
use crate::error::ClientError;
use crate::response::ApiResponse;
use crate::types::Plan;

/// Optional plan fields.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Description.
    pub description: Option<String>,
    /// Email invoices to subscribers.
    pub send_invoices: Option<bool>,
    /// Send SMS notifications to subscribers.
    pub send_sms: Option<bool>,
    /// Publish a hosted subscription page.
    pub hosted_page: Option<bool>,
    /// URL of the hosted page.
    pub hosted_page_url: Option<String>,
    /// Summary shown on the hosted page.
    pub hosted_page_summary: Option<String>,
    /// Plan currency.
    pub currency: Option<Currency>,
}

#[derive(Serialize)]
struct PlanPayload<'a> {
    name: &'a str,
    amount: Amount,
    interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hosted_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hosted_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hosted_page_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<Currency>,
}

impl<'a> PlanPayload<'a> {
    fn build(
        name: &'a str,
        amount: impl IntoAmount,
        interval: impl IntoInterval,
        options: PlanOptions,
    ) -> Result<Self, ClientError> {
        let name = require_field(name, "Plan name is required")?;
        let amount = validate_amount(amount)?;
        let interval = interval.into_interval()?;

        Ok(Self {
            name,
            amount,
            interval,
            description: non_blank(options.description),
            send_invoices: options.send_invoices,
            send_sms: options.send_sms,
            hosted_page: options.hosted_page,
            hosted_page_url: non_blank(options.hosted_page_url),
            hosted_page_summary: non_blank(options.hosted_page_summary),
            currency: options.currency,
        })
    }
}

/// Plan endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Plans<'a> {
    client: &'a PaystackClient,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Create a subscription plan.
    ///
    /// # Arguments
    ///
    /// * `name` - Plan name
    /// * `amount` - Amount per interval in subunits
    /// * `interval` - Billing interval, as [`Interval`] or its name
    /// * `options` - Description, notifications, hosted page and currency
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, an invalid amount or an
    /// unknown interval, before any request is sent.
    pub async fn create(
        &self,
        name: &str,
        amount: impl IntoAmount,
        interval: impl IntoInterval,
        options: PlanOptions,
    ) -> Result<ApiResponse<Plan>, ClientError> {
        let payload = PlanPayload::build(name, amount, interval, options)?;
        self.client.post("/plan", &payload).await
    }

    /// Update a plan, identified by numeric ID or `PLN_...` code.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank identifier or name, an invalid
    /// amount or an unknown interval.
    pub async fn update(
        &self,
        id_or_code: &str,
        name: &str,
        amount: impl IntoAmount,
        interval: impl IntoInterval,
        options: PlanOptions,
    ) -> Result<ApiResponse<Plan>, ClientError> {
        let id_or_code = require_field(id_or_code, "Plan ID or code is required to update")?;
        let payload = PlanPayload::build(name, amount, interval, options)?;
        self.client.put_item("/plan", id_or_code, &payload).await
    }

    /// List plans.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn list(&self, params: ListParams) -> Result<ApiResponse<Vec<Plan>>, ClientError> {
        self.client.get("/plan", &params.query()).await
    }

    /// Fetch one plan by ID or code.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank identifier.
    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse<Plan>, ClientError> {
        let id_or_code = require_field(id_or_code, "Plan ID or code is required to fetch")?;
        self.client.get_item("/plan", id_or_code).await
    }
}
