//! Paystack resource models.
//!
//! These mirror what Paystack returns. Apart from identifiers every field is
//! optional, and fields not modelled here are kept in `extra` so nothing in
//! the response is lost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Paystack transaction ID.
    #[serde(default)]
    pub id: u64,
    /// Merchant reference.
    #[serde(default)]
    pub reference: Option<String>,
    /// `success`, `failed`, `abandoned`, ...
    #[serde(default)]
    pub status: Option<String>,
    /// Amount in subunits.
    #[serde(default)]
    pub amount: Option<u64>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Channel the customer paid with.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message from the processor.
    #[serde(default)]
    pub gateway_response: Option<String>,
    /// Fees charged, in subunits.
    #[serde(default)]
    pub fees: Option<u64>,
    /// When the transaction was paid.
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    /// When the transaction was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Paying customer.
    #[serde(default)]
    pub customer: Option<Customer>,
    /// Reusable card/bank authorization.
    #[serde(default)]
    pub authorization: Option<Authorization>,
    /// Metadata supplied at initialization.
    #[serde(default)]
    pub metadata: Value,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Data returned by transaction initialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitializedTransaction {
    /// Checkout page to redirect the customer to.
    pub authorization_url: String,
    /// Access code for inline checkout.
    #[serde(default)]
    pub access_code: Option<String>,
    /// Reference of the new transaction.
    pub reference: String,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Volume for one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyVolume {
    /// Currency code.
    pub currency: String,
    /// Volume in subunits.
    pub amount: u64,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregate transaction figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionTotals {
    /// Number of transactions.
    #[serde(default)]
    pub total_transactions: u64,
    /// Distinct paying customers.
    #[serde(default)]
    pub unique_customers: Option<u64>,
    /// Total volume in subunits.
    #[serde(default)]
    pub total_volume: u64,
    /// Volume split per currency.
    #[serde(default)]
    pub total_volume_by_currency: Vec<CurrencyVolume>,
    /// Transfers awaiting settlement, in subunits.
    #[serde(default)]
    pub pending_transfers: u64,
    /// Pending transfers split per currency.
    #[serde(default)]
    pub pending_transfers_by_currency: Vec<CurrencyVolume>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A reusable payment authorization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    /// Code used to charge the customer again.
    #[serde(default)]
    pub authorization_code: Option<String>,
    /// Card BIN.
    #[serde(default)]
    pub bin: Option<String>,
    /// Last four card digits.
    #[serde(default)]
    pub last4: Option<String>,
    /// Expiry month.
    #[serde(default)]
    pub exp_month: Option<String>,
    /// Expiry year.
    #[serde(default)]
    pub exp_year: Option<String>,
    /// Channel.
    #[serde(default)]
    pub channel: Option<String>,
    /// Card type.
    #[serde(default)]
    pub card_type: Option<String>,
    /// Issuing bank.
    #[serde(default)]
    pub bank: Option<String>,
    /// Country code.
    #[serde(default)]
    pub country_code: Option<String>,
    /// Card brand.
    #[serde(default)]
    pub brand: Option<String>,
    /// Whether the authorization can be charged again.
    #[serde(default)]
    pub reusable: Option<bool>,
    /// Card signature.
    #[serde(default)]
    pub signature: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Paystack customer ID.
    #[serde(default)]
    pub id: u64,
    /// Customer code (`CUS_...`).
    #[serde(default)]
    pub customer_code: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Metadata.
    #[serde(default)]
    pub metadata: Value,
    /// Risk action (`default`, `allow`, `deny`).
    #[serde(default)]
    pub risk_action: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A subscription plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Paystack plan ID.
    #[serde(default)]
    pub id: u64,
    /// Plan code (`PLN_...`).
    #[serde(default)]
    pub plan_code: Option<String>,
    /// Plan name.
    #[serde(default)]
    pub name: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Amount per interval in subunits.
    #[serde(default)]
    pub amount: Option<u64>,
    /// Billing interval.
    #[serde(default)]
    pub interval: Option<String>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether invoices are emailed.
    #[serde(default)]
    pub send_invoices: Option<bool>,
    /// Whether SMS notifications are sent.
    #[serde(default)]
    pub send_sms: Option<bool>,
    /// Whether a hosted subscription page exists.
    #[serde(default)]
    pub hosted_page: Option<bool>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A bank transfers can be sent to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    /// Paystack bank ID.
    #[serde(default)]
    pub id: u64,
    /// Bank name.
    #[serde(default)]
    pub name: Option<String>,
    /// Slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Bank code used for transfer recipients.
    #[serde(default)]
    pub code: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Account type (`nuban`, `mobile_money`, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Whether the bank is active.
    #[serde(default)]
    pub active: Option<bool>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Account details of a transfer recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipientDetails {
    /// Account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// Account holder name.
    #[serde(default)]
    pub account_name: Option<String>,
    /// Bank code.
    #[serde(default)]
    pub bank_code: Option<String>,
    /// Bank name.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A beneficiary for transfers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferRecipient {
    /// Paystack recipient ID.
    #[serde(default)]
    pub id: u64,
    /// Recipient code (`RCP_...`) used when transferring.
    #[serde(default)]
    pub recipient_code: Option<String>,
    /// Recipient name.
    #[serde(default)]
    pub name: Option<String>,
    /// Recipient type.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the recipient is active.
    #[serde(default)]
    pub active: Option<bool>,
    /// Bank account details.
    #[serde(default)]
    pub details: Option<RecipientDetails>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A transfer out of the integration balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Paystack transfer ID.
    #[serde(default)]
    pub id: u64,
    /// Transfer code (`TRF_...`).
    #[serde(default)]
    pub transfer_code: Option<String>,
    /// Merchant reference.
    #[serde(default)]
    pub reference: Option<String>,
    /// Amount in subunits.
    #[serde(default)]
    pub amount: Option<u64>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// `pending`, `success`, `otp`, ...
    #[serde(default)]
    pub status: Option<String>,
    /// Reason shown to the recipient.
    #[serde(default)]
    pub reason: Option<String>,
    /// Recipient ID or object.
    #[serde(default)]
    pub recipient: Value,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
