//! Currencies, payment channels and transaction status filters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Settlement currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Nigerian naira.
    #[default]
    Ngn,
    /// Ghanaian cedi.
    Ghs,
    /// South African rand.
    Zar,
    /// Kenyan shilling.
    Kes,
    /// West African CFA franc.
    Xof,
    /// US dollar.
    Usd,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ngn => "NGN",
            Self::Ghs => "GHS",
            Self::Zar => "ZAR",
            Self::Kes => "KES",
            Self::Xof => "XOF",
            Self::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NGN" => Ok(Self::Ngn),
            "GHS" => Ok(Self::Ghs),
            "ZAR" => Ok(Self::Zar),
            "KES" => Ok(Self::Kes),
            "XOF" => Ok(Self::Xof),
            "USD" => Ok(Self::Usd),
            _ => Err(ValidationError::UnsupportedCurrency(s.to_string())),
        }
    }
}

/// Payment channel offered on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Debit or credit card.
    Card,
    /// Direct bank debit.
    Bank,
    /// USSD short code.
    Ussd,
    /// QR code.
    Qr,
    /// Mobile money wallet.
    MobileMoney,
    /// Bank transfer to a dedicated account.
    BankTransfer,
    /// Electronic funds transfer.
    Eft,
    /// Apple Pay.
    ApplePay,
}

impl FromStr for Channel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "bank" => Ok(Self::Bank),
            "ussd" => Ok(Self::Ussd),
            "qr" => Ok(Self::Qr),
            "mobile_money" => Ok(Self::MobileMoney),
            "bank_transfer" => Ok(Self::BankTransfer),
            "eft" => Ok(Self::Eft),
            "apple_pay" => Ok(Self::ApplePay),
            _ => Err(ValidationError::UnsupportedChannel(s.to_string())),
        }
    }
}

/// Status filter for transaction listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Paid.
    Success,
    /// Declined or errored.
    Failed,
    /// Started but never completed.
    Abandoned,
}

impl TransactionStatus {
    /// Query string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
