//! Transaction, transfer and subscription endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use paystack_core::{
    require_field, validate_amount, Amount, Channel, Currency, IntoAmount, TransactionReference,
    TransactionStatus,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::{non_blank, non_empty, ListParams};
use crate::client::PaystackClient;
use crate::error::ClientError;
use crate::response::ApiResponse;
use crate::types::{
    Bank, InitializedTransaction, Transaction, TransactionTotals, Transfer, TransferRecipient,
};

/// Filters for listing transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionListParams {
    /// Page size and page number.
    pub paging: ListParams,
    /// Only transactions with this status.
    pub status: Option<TransactionStatus>,
    /// Only transactions created at or after this instant.
    pub from: Option<DateTime<Utc>>,
    /// Only transactions created at or before this instant.
    pub to: Option<DateTime<Utc>>,
}

impl From<ListParams> for TransactionListParams {
    fn from(paging: ListParams) -> Self {
        Self {
            paging,
            ..Self::default()
        }
    }
}

impl TransactionListParams {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.paging.query();
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        if let Some(from) = self.from {
            query.push(("from", from.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        if let Some(to) = self.to {
            query.push(("to", to.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        query
    }
}

/// Optional fields for [`Transactions::initialize`].
#[derive(Debug, Clone, Default)]
pub struct InitializeOptions {
    /// Plan code to subscribe the customer to.
    pub plan: Option<String>,
    /// Channels to offer on the checkout page.
    pub channels: Vec<Channel>,
    /// URL to redirect to after payment.
    pub callback_url: Option<String>,
    /// Merchant reference; Paystack generates one when absent.
    pub reference: Option<TransactionReference>,
    /// Arbitrary metadata, sent as given.
    pub metadata: Option<Value>,
    /// Currency; the integration default applies when absent.
    pub currency: Option<Currency>,
}

/// Optional fields for [`Transactions::charge_authorization`].
#[derive(Debug, Clone, Default)]
pub struct ChargeOptions {
    /// Merchant reference.
    pub reference: Option<TransactionReference>,
    /// Custom fields, sent as `metadata.custom_fields`.
    pub metadata: Option<Value>,
}

/// Optional fields for [`Transactions::create_transfer_recipient`].
#[derive(Debug, Clone, Default)]
pub struct RecipientOptions {
    /// Recipient currency (default: NGN).
    pub currency: Option<Currency>,
    /// Free text description.
    pub description: Option<String>,
}

/// Optional fields for [`Transactions::transfer`].
#[derive(Debug, Clone, Default)]
pub struct TransferOptions {
    /// Merchant reference.
    pub reference: Option<TransactionReference>,
    /// Transfer currency (default: NGN).
    pub currency: Option<Currency>,
}

#[derive(Serialize)]
struct InitializePayload<'a> {
    email: &'a str,
    amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    channels: Vec<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<TransactionReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<Currency>,
}

#[derive(Serialize)]
struct ChargePayload<'a> {
    authorization_code: &'a str,
    email: &'a str,
    amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<TransactionReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
}

#[derive(Serialize)]
struct RecipientPayload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    currency: Currency,
    bank_code: &'a str,
    account_number: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Serialize)]
struct TransferPayload<'a> {
    amount: Amount,
    reason: &'a str,
    recipient: &'a str,
    source: &'static str,
    currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<TransactionReference>,
}

#[derive(Serialize)]
struct DisableSubscriptionPayload<'a> {
    code: &'a str,
    token: &'a str,
}

/// Transaction, transfer and subscription endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    client: &'a PaystackClient,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// List transactions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn list(
        &self,
        params: &TransactionListParams,
    ) -> Result<ApiResponse<Vec<Transaction>>, ClientError> {
        self.client.get("/transaction", &params.query()).await
    }

    /// Fetch one transaction by its Paystack ID.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn fetch(&self, transaction_id: u64) -> Result<ApiResponse<Transaction>, ClientError> {
        self.client
            .get_item("/transaction", &transaction_id.to_string())
            .await
    }

    /// Total volume and count of transactions.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn totals(&self) -> Result<ApiResponse<TransactionTotals>, ClientError> {
        self.client.get("/transaction/totals", &[]).await
    }

    /// Start a transaction and get a checkout URL for the customer.
    ///
    /// # Arguments
    ///
    /// * `email` - Customer's email address
    /// * `amount` - Amount to charge in subunits
    /// * `options` - Plan, channels, callback URL, reference and metadata
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid amount or a blank email,
    /// before any request is sent.
    pub async fn initialize(
        &self,
        email: &str,
        amount: impl IntoAmount,
        options: InitializeOptions,
    ) -> Result<ApiResponse<InitializedTransaction>, ClientError> {
        let amount = validate_amount(amount)?;
        let email = require_field(email, "Customer's email is required for initialization")?;

        let payload = InitializePayload {
            email,
            amount,
            plan: non_blank(options.plan),
            channels: options.channels,
            callback_url: non_blank(options.callback_url),
            reference: options.reference,
            metadata: non_empty(options.metadata),
            currency: options.currency,
        };

        self.client.post("/transaction/initialize", &payload).await
    }

    /// Charge a customer again using a saved authorization.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid amount, a blank email or a
    /// blank authorization code, before any request is sent.
    pub async fn charge_authorization(
        &self,
        email: &str,
        authorization_code: &str,
        amount: impl IntoAmount,
        options: ChargeOptions,
    ) -> Result<ApiResponse<Transaction>, ClientError> {
        let amount = validate_amount(amount)?;
        let email = require_field(email, "Customer's email is required to charge")?;
        let authorization_code = require_field(
            authorization_code,
            "Customer's authorization code is required to charge",
        )?;

        let payload = ChargePayload {
            authorization_code,
            email,
            amount,
            reference: options.reference,
            metadata: non_empty(options.metadata).map(|fields| json!({ "custom_fields": fields })),
        };

        self.client
            .post("/transaction/charge_authorization", &payload)
            .await
    }

    /// Verify a transaction by its reference.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank reference.
    pub async fn verify(&self, reference: &str) -> Result<ApiResponse<Transaction>, ClientError> {
        let reference = require_field(reference, "Transaction reference is required to verify")?;
        self.client.get_item("/transaction/verify", reference).await
    }

    /// List banks that can receive transfers.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn list_banks(&self) -> Result<ApiResponse<Vec<Bank>>, ClientError> {
        self.client.get("/bank", &[]).await
    }

    /// Register a bank account (NUBAN) as a transfer recipient.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the bank code, account number or
    /// account name is blank.
    pub async fn create_transfer_recipient(
        &self,
        bank_code: &str,
        account_number: &str,
        account_name: &str,
        options: RecipientOptions,
    ) -> Result<ApiResponse<TransferRecipient>, ClientError> {
        let payload = RecipientPayload {
            kind: "nuban",
            currency: options.currency.unwrap_or_default(),
            bank_code: require_field(bank_code, "Bank code is required for a transfer recipient")?,
            account_number: require_field(
                account_number,
                "Account number is required for a transfer recipient",
            )?,
            name: require_field(account_name, "Account name is required for a transfer recipient")?,
            description: non_blank(options.description),
        };

        self.client.post("/transferrecipient", &payload).await
    }

    /// Send money from the integration balance to a recipient.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid amount or a blank recipient
    /// code.
    pub async fn transfer(
        &self,
        recipient_code: &str,
        amount: impl IntoAmount,
        reason: &str,
        options: TransferOptions,
    ) -> Result<ApiResponse<Transfer>, ClientError> {
        let amount = validate_amount(amount)?;
        let recipient = require_field(recipient_code, "Recipient code is required to transfer")?;

        let payload = TransferPayload {
            amount,
            reason,
            recipient,
            source: "balance",
            currency: options.currency.unwrap_or_default(),
            reference: options.reference,
        };

        self.client.post("/transfer", &payload).await
    }

    /// Disable a customer's subscription to a plan.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the subscription code or email token is
    /// blank.
    pub async fn cancel_subscription(
        &self,
        subscription_code: &str,
        email_token: &str,
    ) -> Result<ApiResponse<Value>, ClientError> {
        let payload = DisableSubscriptionPayload {
            code: require_field(subscription_code, "Subscription code is required to cancel")?,
            token: require_field(email_token, "Email token is required to cancel a subscription")?,
        };

        self.client.post("/subscription/disable", &payload).await
    }
}
