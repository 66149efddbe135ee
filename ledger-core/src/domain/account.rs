//! Account domain model

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Prefix shared by every account number
const PREFIX: &str = "ACC-";

/// Lowest and highest numeric suffix an account number may carry
pub(crate) const SUFFIX_MIN: u32 = 100_000;
pub(crate) const SUFFIX_MAX: u32 = 999_999;

/// Opaque account identifier of the form `ACC-######`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Build an account number from a six digit suffix
    ///
    /// Returns `None` when the suffix is outside 100000..=999999.
    pub fn from_suffix(suffix: u32) -> Option<Self> {
        if (SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix) {
            Some(Self(format!("{PREFIX}{suffix}")))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for AccountNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A ledger entry owned by one person
///
/// The balance can only move through [`Account::credit`] and
/// [`Account::debit`], both of which are crate-private so that every change
/// goes through the registry's validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    account_number: AccountNumber,
    pub owner_name: String,
    /// Uniqueness key for account creation (case-sensitive)
    pub email: String,
    balance: Decimal,
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with a zero balance
    pub(crate) fn open(
        account_number: AccountNumber,
        owner_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account_number,
            owner_name: owner_name.into(),
            email: email.into(),
            balance: Decimal::ZERO,
            opened_at: Utc::now(),
        }
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add `amount`, returning `false` and leaving the balance untouched
    /// if the result would not fit in a `Decimal`
    pub(crate) fn credit(&mut self, amount: Decimal) -> bool {
        debug_assert!(amount > Decimal::ZERO);
        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    pub(crate) fn debit(&mut self, amount: Decimal) {
        debug_assert!(amount > Decimal::ZERO && amount <= self.balance);
        self.balance -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_from_suffix() {
        assert_eq!(AccountNumber::from_suffix(123456).unwrap().as_str(), "ACC-123456");
        assert!(AccountNumber::from_suffix(99_999).is_none());
        assert!(AccountNumber::from_suffix(1_000_000).is_none());
    }

    #[test]
    fn test_new_account_starts_empty() {
        let number = AccountNumber::from_suffix(555555).unwrap();
        let mut account = Account::open(number, "John Doe", "john@x.com");
        assert_eq!(account.balance(), Decimal::ZERO);

        assert!(account.credit(Decimal::new(2500, 2)));
        account.debit(Decimal::new(500, 2));
        assert_eq!(account.balance(), Decimal::new(2000, 2));
    }

    #[test]
    fn test_credit_overflow_keeps_balance() {
        let number = AccountNumber::from_suffix(555555).unwrap();
        let mut account = Account::open(number, "John Doe", "john@x.com");
        assert!(account.credit(Decimal::MAX));

        assert!(!account.credit(Decimal::ONE));
        assert_eq!(account.balance(), Decimal::MAX);
    }
}
