//! Configuration management
//!
//! Settings are read from an optional `settings.json` in the ledger
//! directory:
//! ```json
//! {
//!   "accountNumbers": "unique",
//!   "messageStyle": "legacy",
//!   "activityLogCapacity": 500
//! }
//! ```
//! Accounts themselves are never written to disk.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::MessageStyle;
use crate::services::logging::DEFAULT_CAPACITY;
use crate::services::AccountNumberPolicy;

pub const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    account_numbers: Option<AccountNumberPolicy>,
    #[serde(default)]
    message_style: Option<MessageStyle>,
    #[serde(default)]
    activity_log_capacity: Option<usize>,
}

/// Effective ledger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub account_numbers: AccountNumberPolicy,
    pub message_style: MessageStyle,
    pub activity_log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_numbers: AccountNumberPolicy::default(),
            message_style: MessageStyle::default(),
            activity_log_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Load config from the ledger directory
    ///
    /// Settings can be overridden with environment variables:
    /// - `LEDGER_ACCOUNT_NUMBERS` (unique, unchecked)
    /// - `LEDGER_MESSAGE_STYLE` (legacy, refined)
    pub fn load(ledger_dir: &Path) -> Result<Self> {
        Self::load_with_env(ledger_dir, |key| std::env::var(key).ok())
    }

    /// Load config, resolving environment overrides through `env`
    pub fn load_with_env(ledger_dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let settings_path = ledger_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %settings_path.display(), error = %e, "ignoring malformed settings file");
                SettingsFile::default()
            })
        } else {
            SettingsFile::default()
        };

        let defaults = Config::default();

        let account_numbers = env("LEDGER_ACCOUNT_NUMBERS")
            .and_then(|v| override_value(&v))
            .or(raw.account_numbers)
            .unwrap_or(defaults.account_numbers);

        let message_style = env("LEDGER_MESSAGE_STYLE")
            .and_then(|v| override_value(&v))
            .or(raw.message_style)
            .unwrap_or(defaults.message_style);

        Ok(Self {
            account_numbers,
            message_style,
            activity_log_capacity: raw
                .activity_log_capacity
                .filter(|c| *c > 0)
                .unwrap_or(defaults.activity_log_capacity),
        })
    }
}

fn override_value<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr<Err = crate::Error>,
{
    match value.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring environment override");
            None
        }
    }
}
