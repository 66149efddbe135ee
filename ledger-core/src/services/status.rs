//! Status service - registry summaries

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::money::format_money;
use crate::services::AccountRegistry;

/// Status service for account summaries
#[derive(Debug, Default)]
pub struct StatusService;

impl StatusService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize every account in the registry
    pub fn summarize(&self, registry: &AccountRegistry) -> StatusSummary {
        let accounts: Vec<AccountSummary> = registry
            .list_accounts()
            .iter()
            .map(|a| AccountSummary {
                account_number: a.account_number().to_string(),
                owner_name: a.owner_name.clone(),
                email: a.email.clone(),
                balance: a.balance(),
                opened_at: a.opened_at,
            })
            .collect();

        StatusSummary {
            total_accounts: accounts.len() as i64,
            total_balance: accounts.iter().map(|a| a.balance).sum(),
            accounts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_accounts: i64,
    pub total_balance: Decimal,
    pub accounts: Vec<AccountSummary>,
}

impl StatusSummary {
    pub fn total_balance_display(&self) -> String {
        format_money(self.total_balance)
    }
}

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub account_number: String,
    pub owner_name: String,
    pub email: String,
    pub balance: Decimal,
    pub opened_at: DateTime<Utc>,
}
