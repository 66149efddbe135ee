//! Ledger Core - business logic for an in-memory bank account ledger
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Account, outcomes, errors)
//! - **ports**: Trait definitions for external dependencies (AccountNumberSource)
//! - **services**: Business logic orchestration (AccountRegistry, status, logging)
//! - **adapters**: Concrete implementations (random and scripted account numbers)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use anyhow::Result;

use config::Config;
use ports::AccountNumberSource;
use services::*;

// Re-export commonly used types at crate root
pub use domain::money::{format_money, parse_amount};
pub use domain::outcome::render;
pub use domain::result::Error;
pub use domain::{
    Account, AccountNumber, MessageStyle, Outcome, Receipt, TransactionError, TransactionKind,
};
pub use services::{AccountRegistry, EntryPoint, LogEvent, LoggingService};

/// Main context for ledger operations
///
/// Owns the registry for the lifetime of the process together with the
/// configuration and the supporting services. Callers pass it by reference
/// to whatever drives the ledger.
pub struct LedgerContext {
    pub config: Config,
    pub registry: AccountRegistry,
    pub status_service: StatusService,
    pub logging_service: LoggingService,
}

impl LedgerContext {
    /// Create a new ledger context from the settings in `ledger_dir`
    pub fn new(ledger_dir: &Path, entry_point: EntryPoint) -> Result<Self> {
        let config = Config::load(ledger_dir)?;
        Ok(Self::from_config(config, entry_point))
    }

    /// Create a context with random account numbers
    pub fn from_config(config: Config, entry_point: EntryPoint) -> Self {
        Self::with_source(config, entry_point, Box::new(adapters::RandomAccountNumbers::new()))
    }

    /// Create a context drawing account numbers from `numbers`
    pub fn with_source(
        config: Config,
        entry_point: EntryPoint,
        numbers: Box<dyn AccountNumberSource>,
    ) -> Self {
        let registry = AccountRegistry::with_source(numbers)
            .with_policy(config.account_numbers)
            .with_message_style(config.message_style);
        let logging_service = LoggingService::new(
            entry_point,
            env!("CARGO_PKG_VERSION"),
            config.activity_log_capacity,
        );

        Self {
            config,
            registry,
            status_service: StatusService::new(),
            logging_service,
        }
    }

    /// Record an event, ignoring any errors (logging should never break the app)
    pub fn log(&self, event: LogEvent) {
        let _ = self.logging_service.log(event);
    }
}
