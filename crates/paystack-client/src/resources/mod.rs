//! Resource groups, one per Paystack API area.

mod customers;
mod plans;
mod transactions;

pub use customers::{CustomerDetails, Customers};
pub use plans::{PlanOptions, Plans};
pub use transactions::{
    ChargeOptions, InitializeOptions, RecipientOptions, TransactionListParams, Transactions,
    TransferOptions,
};

use serde_json::Value;

/// Default page size for list endpoints.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Paging for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Records per page (default: 10).
    pub per_page: u32,
    /// Page to fetch, starting at 1.
    pub page: Option<u32>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: None,
        }
    }
}

impl ListParams {
    /// Page size only.
    #[must_use]
    pub fn per_page(per_page: u32) -> Self {
        Self {
            per_page,
            page: None,
        }
    }

    pub(crate) fn query(self) -> Vec<(&'static str, String)> {
        let mut query = vec![("perPage", self.per_page.to_string())];
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

/// Drop blank optional text so it is left out of the payload.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Drop null or empty metadata so it is left out of the payload.
pub(crate) fn non_empty(value: Option<Value>) -> Option<Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    })
}
