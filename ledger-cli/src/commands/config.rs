//! Config command - show the effective configuration

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use ledger_core::config::{Config, SETTINGS_FILE};

use crate::output;

pub fn run(ledger_dir: &Path, json: bool) -> Result<()> {
    let config = Config::load(ledger_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Ledger Configuration".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["Settings file".to_string(), ledger_dir.join(SETTINGS_FILE).display().to_string()]);
    table.add_row(vec!["Account numbers".to_string(), format!("{:?}", config.account_numbers).to_lowercase()]);
    table.add_row(vec!["Message style".to_string(), format!("{:?}", config.message_style).to_lowercase()]);
    table.add_row(vec!["Activity log capacity".to_string(), config.activity_log_capacity.to_string()]);
    println!("{}", table);

    if !ledger_dir.join(SETTINGS_FILE).exists() {
        println!();
        output::info(&mut std::io::stdout(), "No settings file found, using defaults.")?;
    }

    Ok(())
}
