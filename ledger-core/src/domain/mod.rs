//! Core domain entities
//!
//! All ledger entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

pub(crate) mod account;
pub mod money;
pub mod outcome;
pub mod result;

pub use account::{Account, AccountNumber};
pub use outcome::{MessageStyle, Outcome, Receipt, TransactionError, TransactionKind};
