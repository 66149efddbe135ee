//! Result and error types for the core library

use thiserror::Error;

/// Hard failures that abort an operation
///
/// Transactional problems (bad amounts, missing accounts, insufficient funds)
/// are not errors at this level; they travel as
/// [`TransactionError`](super::TransactionError) inside an outcome.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Account with this email already exists.")]
    DuplicateAccount,

    #[error("Could not find a free account number after {0} attempts.")]
    AccountNumbersExhausted(usize),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message() {
        assert_eq!(
            Error::DuplicateAccount.to_string(),
            "Account with this email already exists."
        );
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("unknown policy");
        assert!(err.to_string().contains("Configuration error"));
    }
}
