//! Subscription plan intervals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};

/// Billing interval of a subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// Every hour.
    Hourly,
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every three months.
    Quarterly,
    /// Every six months.
    Biannually,
    /// Every year.
    Annually,
}

impl Interval {
    /// All intervals Paystack accepts, shortest first.
    pub const ALL: [Self; 7] = [
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Biannually,
        Self::Annually,
    ];

    /// Wire name of the interval.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Biannually => "biannually",
            Self::Annually => "annually",
        }
    }

    fn allowed() -> String {
        Self::ALL
            .into_iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str() == wanted)
            .ok_or_else(|| ValidationError::InvalidInterval {
                given: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

/// Conversion into a validated [`Interval`].
pub trait IntoInterval {
    /// Validate and convert.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidInterval`] for unknown names.
    fn into_interval(self) -> Result<Interval>;
}

impl IntoInterval for Interval {
    fn into_interval(self) -> Result<Interval> {
        Ok(self)
    }
}

impl IntoInterval for &str {
    fn into_interval(self) -> Result<Interval> {
        self.parse()
    }
}

impl IntoInterval for String {
    fn into_interval(self) -> Result<Interval> {
        self.parse()
    }
}

/// Validate a plan interval given as text.
///
/// Matching ignores case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInterval`] listing the accepted values.
pub fn validate_interval(interval: &str) -> Result<Interval> {
    interval.parse()
}
