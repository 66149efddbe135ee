//! CLI command implementations

pub mod config;
pub mod demo;
pub mod shell;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ledger_core::{EntryPoint, LedgerContext};

/// Resolve the ledger directory: explicit flag / LEDGER_DIR, else ~/.ledger
pub fn get_ledger_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ledger")
    })
}

/// Create a ledger context from the settings in `ledger_dir`
pub fn get_context(ledger_dir: &Path, entry_point: EntryPoint) -> Result<LedgerContext> {
    LedgerContext::new(ledger_dir, entry_point)
        .with_context(|| format!("Failed to load ledger settings from {:?}", ledger_dir))
}
