//! Account registry - the in-memory owner of every account
//!
//! Every balance change is a validate-then-mutate sequence over a single
//! account record. Creation problems fail hard ([`Error`]); transactional
//! problems come back as an [`Outcome`] the caller displays and moves past.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::adapters::RandomAccountNumbers;
use crate::domain::money::parse_amount;
use crate::domain::result::{Error, Result};
use crate::domain::{
    Account, AccountNumber, MessageStyle, Outcome, Receipt, TransactionError, TransactionKind,
};
use crate::ports::AccountNumberSource;

/// Candidates drawn before giving up under [`AccountNumberPolicy::Unique`]
pub const MAX_NUMBER_ATTEMPTS: usize = 64;

/// How freshly drawn account numbers are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountNumberPolicy {
    /// Redraw when a candidate is already taken
    #[default]
    Unique,
    /// Accept the first candidate, even if it collides
    Unchecked,
}

impl std::str::FromStr for AccountNumberPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "unique" => Ok(Self::Unique),
            "unchecked" => Ok(Self::Unchecked),
            other => Err(Error::config(format!("unknown account number policy: {other}"))),
        }
    }
}

/// In-memory registry of accounts, in creation order
pub struct AccountRegistry {
    accounts: Vec<Account>,
    numbers: Box<dyn AccountNumberSource>,
    policy: AccountNumberPolicy,
    message_style: MessageStyle,
}

impl AccountRegistry {
    /// Registry with random account numbers and default settings
    pub fn new() -> Self {
        Self::with_source(Box::new(RandomAccountNumbers::new()))
    }

    /// Registry drawing account numbers from the given source
    pub fn with_source(numbers: Box<dyn AccountNumberSource>) -> Self {
        Self {
            accounts: Vec::new(),
            numbers,
            policy: AccountNumberPolicy::default(),
            message_style: MessageStyle::default(),
        }
    }

    pub fn with_policy(mut self, policy: AccountNumberPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_message_style(mut self, style: MessageStyle) -> Self {
        self.message_style = style;
        self
    }

    pub fn policy(&self) -> AccountNumberPolicy {
        self.policy
    }

    pub fn message_style(&self) -> MessageStyle {
        self.message_style
    }

    /// Create a new account with a zero balance
    ///
    /// Fails with [`Error::DuplicateAccount`] if an account with exactly the
    /// same email exists; nothing is added in that case.
    pub fn create_account(&mut self, owner_name: &str, email: &str) -> Result<&Account> {
        if self.find_by_email(email).is_some() {
            debug!("rejected account creation: duplicate email");
            return Err(Error::DuplicateAccount);
        }

        let account_number = self.next_account_number()?;
        debug!(account_number = %account_number, "account created");

        let index = self.accounts.len();
        self.accounts.push(Account::open(account_number, owner_name, email));
        Ok(&self.accounts[index])
    }

    /// Deposit a parsed amount
    pub fn deposit(&mut self, account_number: &str, amount: Decimal) -> Outcome {
        let account = self.find_mut(account_number)?;
        if amount <= Decimal::ZERO {
            return Err(TransactionError::NonPositiveAmount(TransactionKind::Deposit));
        }

        if !account.credit(amount) {
            return Err(TransactionError::BalanceOverflow);
        }
        Ok(receipt(TransactionKind::Deposit, account))
    }

    /// Deposit amount text as typed by the user
    ///
    /// Malformed text is rejected before the account is even looked up.
    pub fn deposit_input(&mut self, account_number: &str, raw_amount: &str) -> Outcome {
        let amount =
            parse_amount(raw_amount).ok_or(TransactionError::InvalidAmount(self.message_style))?;
        self.deposit(account_number, amount)
    }

    /// Withdraw a parsed amount
    pub fn withdraw(&mut self, account_number: &str, amount: Decimal) -> Outcome {
        let account = self.find_mut(account_number)?;
        if amount <= Decimal::ZERO {
            return Err(TransactionError::NonPositiveAmount(TransactionKind::Withdrawal));
        }
        if account.balance() < amount {
            return Err(TransactionError::InsufficientFunds);
        }

        account.debit(amount);
        Ok(receipt(TransactionKind::Withdrawal, account))
    }

    /// Withdraw amount text as typed by the user
    ///
    /// Unlike deposits, the account lookup comes first; malformed text is
    /// only reported for an existing account.
    pub fn withdraw_input(&mut self, account_number: &str, raw_amount: &str) -> Outcome {
        if self.get(account_number).is_none() {
            return Err(TransactionError::AccountNotFound);
        }
        let amount =
            parse_amount(raw_amount).ok_or(TransactionError::InvalidAmount(MessageStyle::Legacy))?;
        self.withdraw(account_number, amount)
    }

    /// Report the current balance
    pub fn view_balance(&self, account_number: &str) -> Outcome {
        let account = self.get(account_number).ok_or(TransactionError::AccountNotFound)?;
        Ok(receipt(TransactionKind::BalanceInquiry, account))
    }

    /// All accounts, in creation order
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.account_number() == account_number)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.email == email)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn find_mut(&mut self, account_number: &str) -> std::result::Result<&mut Account, TransactionError> {
        self.accounts
            .iter_mut()
            .find(|a| a.account_number() == account_number)
            .ok_or(TransactionError::AccountNotFound)
    }

    fn next_account_number(&mut self) -> Result<AccountNumber> {
        let taken: HashSet<&AccountNumber> = match self.policy {
            AccountNumberPolicy::Unique => self.accounts.iter().map(Account::account_number).collect(),
            AccountNumberPolicy::Unchecked => HashSet::new(),
        };

        for _ in 0..MAX_NUMBER_ATTEMPTS {
            let suffix = self.numbers.next_suffix();
            let Some(candidate) = AccountNumber::from_suffix(suffix) else {
                warn!(suffix, "account number source produced an out-of-range suffix");
                continue;
            };
            if !taken.contains(&candidate) {
                return Ok(candidate);
            }
            debug!(account_number = %candidate, "account number collision, drawing again");
        }

        Err(Error::AccountNumbersExhausted(MAX_NUMBER_ATTEMPTS))
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn receipt(kind: TransactionKind, account: &Account) -> Receipt {
    Receipt {
        kind,
        account_number: account.account_number().clone(),
        balance: account.balance(),
    }
}
