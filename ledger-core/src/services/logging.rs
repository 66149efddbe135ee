//! Logging service - session activity log
//!
//! Keeps a privacy-safe record of what happened during the session. No user
//! data (owner names, emails, balances, amounts) is ever logged, only event
//! names, the command that ran and the outcome kind.
//!
//! Entries are held in memory and dropped with the process. Each entry is
//! also forwarded to `tracing`.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Outcome, TransactionKind};

/// Default number of entries kept before the oldest are dropped
pub const DEFAULT_CAPACITY: usize = 500;

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Shell,
    Demo,
}

impl EntryPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Shell => "shell",
            EntryPoint::Demo => "demo",
        }
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            outcome: None,
            error_message: None,
        }
    }

    /// Set the command context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the outcome kind (`ok` or an error code)
    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Event describing a transactional outcome
    pub fn transaction(kind: TransactionKind, outcome: &Outcome) -> Self {
        let code = match outcome {
            Ok(_) => "ok",
            Err(e) => e.code(),
        };
        Self::new("transaction").with_command(kind.as_str()).with_outcome(code)
    }
}

/// A recorded log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub entry_point: String,
    pub app_version: String,
    pub event: String,
    pub command: Option<String>,
    pub outcome: Option<String>,
    pub error_message: Option<String>,
}

/// Service for structured event logging
pub struct LoggingService {
    entries: Mutex<VecDeque<LogEntry>>,
    next_id: AtomicU64,
    capacity: usize,
    entry_point: EntryPoint,
    app_version: String,
}

impl LoggingService {
    /// Create a new logging service keeping at most `capacity` entries
    pub fn new(entry_point: EntryPoint, app_version: impl Into<String>, capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            next_id: AtomicU64::new(1),
            capacity: capacity.max(1),
            entry_point,
            app_version: app_version.into(),
        }
    }

    /// Log an event
    ///
    /// The entry point and app version are added from the service
    /// configuration.
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let entry = LogEntry {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            timestamp: Utc::now(),
            entry_point: self.entry_point.as_str().to_string(),
            app_version: self.app_version.clone(),
            event: event.event,
            command: event.command,
            outcome: event.outcome,
            error_message: event.error_message,
        };

        match &entry.error_message {
            Some(message) => tracing::warn!(
                event = %entry.event,
                command = entry.command.as_deref().unwrap_or(""),
                error = %message,
                "activity"
            ),
            None => tracing::info!(
                event = %entry.event,
                command = entry.command.as_deref().unwrap_or(""),
                outcome = entry.outcome.as_deref().unwrap_or(""),
                "activity"
            ),
        }

        let mut entries = self.entries.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
        Ok(())
    }

    /// Log a simple event with just a name
    pub fn log_event(&self, event: &str) -> Result<()> {
        self.log(LogEvent::new(event))
    }

    /// Log a command execution
    pub fn log_command(&self, command: &str) -> Result<()> {
        self.log(LogEvent::new("command_executed").with_command(command))
    }

    /// Log an error
    pub fn log_error(&self, event: &str, message: &str) -> Result<()> {
        self.log(LogEvent::new(event).with_error(message))
    }

    /// Most recent entries, newest first
    pub fn get_recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let entries = self.entries.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    /// Number of entries currently held
    pub fn count(&self) -> Result<usize> {
        let entries = self.entries.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        Ok(entries.len())
    }
}
