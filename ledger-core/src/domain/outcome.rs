//! Transaction outcomes
//!
//! Deposits, withdrawals and balance inquiries never fail hard. They return an
//! [`Outcome`]: either a [`Receipt`] carrying the new balance, or one of the
//! named [`TransactionError`] kinds. Both sides render to the fixed messages
//! the shell shows to the user.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::format_money;
use super::AccountNumber;

/// Operation a receipt or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    BalanceInquiry,
}

impl TransactionKind {
    fn noun(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::BalanceInquiry => "Balance inquiry",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::BalanceInquiry => "balance_inquiry",
        }
    }
}

/// Wording used for malformed amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    /// "Invalid amount."
    #[default]
    Legacy,
    /// "Invalid deposit amount."
    Refined,
}

impl std::str::FromStr for MessageStyle {
    type Err = super::result::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "refined" => Ok(Self::Refined),
            other => Err(super::result::Error::config(format!("unknown message style: {other}"))),
        }
    }
}

impl MessageStyle {
    fn invalid_amount(self) -> &'static str {
        match self {
            MessageStyle::Legacy => "Invalid amount.",
            MessageStyle::Refined => "Invalid deposit amount.",
        }
    }
}

/// Recoverable failure of a transactional operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionError {
    #[error("{}", .0.invalid_amount())]
    InvalidAmount(MessageStyle),

    #[error("Account not found.")]
    AccountNotFound,

    #[error("{} amount must be greater than zero.", .0.noun())]
    NonPositiveAmount(TransactionKind),

    #[error("Insufficient funds for this withdrawal.")]
    InsufficientFunds,

    #[error("Deposit would exceed the maximum supported balance.")]
    BalanceOverflow,
}

impl TransactionError {
    /// Stable machine-readable name, used by the activity log
    pub fn code(&self) -> &'static str {
        match self {
            TransactionError::InvalidAmount(_) => "invalid_amount",
            TransactionError::AccountNotFound => "account_not_found",
            TransactionError::NonPositiveAmount(_) => "non_positive_amount",
            TransactionError::InsufficientFunds => "insufficient_funds",
            TransactionError::BalanceOverflow => "balance_overflow",
        }
    }
}

/// Successful transaction with the balance after it was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub kind: TransactionKind,
    pub account_number: AccountNumber,
    pub balance: Decimal,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let balance = format_money(self.balance);
        match self.kind {
            TransactionKind::Deposit => write!(f, "Deposit successful. New balance: {balance}"),
            TransactionKind::Withdrawal => {
                write!(f, "Withdrawal successful. New balance: {balance}")
            }
            TransactionKind::BalanceInquiry => write!(f, "Current balance: {balance}"),
        }
    }
}

pub type Outcome = std::result::Result<Receipt, TransactionError>;

/// Render an outcome as the message shown to the user
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Ok(receipt) => receipt.to_string(),
        Err(e) => e.to_string(),
    }
}
