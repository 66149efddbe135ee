//! Ledger CLI - bank accounts in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ledger_core::EntryPoint;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{config, demo, get_context, get_ledger_dir, shell};

/// Bank - an in-memory account ledger in your terminal
#[derive(Parser)]
#[command(name = "bank", version, about, long_about = None)]
struct Cli {
    /// Directory holding settings.json (defaults to ~/.ledger)
    #[arg(long, env = "LEDGER_DIR", global = true)]
    ledger_dir: Option<PathBuf>,

    /// Show informational logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive account menu (default)
    Shell,

    /// Show the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a sample session against a throwaway ledger
    Demo {
        /// Output the final account summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&mut std::io::stderr(), &format!("{:#}", e)).ok();
            ExitCode::FAILURE
        }
    }
}

/// Only warnings and errors by default; `--verbose` or RUST_LOG shows more
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ledger_dir = get_ledger_dir(cli.ledger_dir);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut ctx = get_context(&ledger_dir, EntryPoint::Shell)?;
            shell::run(&mut ctx)
        }
        Commands::Config { json } => config::run(&ledger_dir, json),
        Commands::Demo { json } => {
            let settings = ledger_core::config::Config::load(&ledger_dir)?;
            demo::run(settings, json)
        }
    }
}
