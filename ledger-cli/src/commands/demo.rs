//! Demo command - walk through a sample session

use anyhow::Result;
use colored::Colorize;
use ledger_core::adapters::ScriptedAccountNumbers;
use ledger_core::config::Config;
use ledger_core::{render, EntryPoint, LedgerContext, LogEvent, Outcome, TransactionKind};
use rust_decimal::Decimal;

use crate::output;

const DEMO_ACCOUNT_SUFFIX: u32 = 123456;

pub fn run(config: Config, json: bool) -> Result<()> {
    let mut ctx = LedgerContext::with_source(
        config,
        EntryPoint::Demo,
        Box::new(ScriptedAccountNumbers::new([DEMO_ACCOUNT_SUFFIX])),
    );

    let number = ctx
        .registry
        .create_account("John Doe", "john@x.com")?
        .account_number()
        .to_string();
    ctx.log(LogEvent::new("account_created").with_outcome("ok"));

    let steps: Vec<(String, TransactionKind, Outcome)> = vec![
        (
            format!("deposit({number}, 100)"),
            TransactionKind::Deposit,
            ctx.registry.deposit(&number, Decimal::new(100, 0)),
        ),
        (
            format!("withdraw({number}, 100)"),
            TransactionKind::Withdrawal,
            ctx.registry.withdraw(&number, Decimal::new(100, 0)),
        ),
        (
            format!("withdraw({number}, 1)"),
            TransactionKind::Withdrawal,
            ctx.registry.withdraw(&number, Decimal::new(1, 0)),
        ),
        (
            format!("view_balance({number})"),
            TransactionKind::BalanceInquiry,
            ctx.registry.view_balance(&number),
        ),
    ];

    for (_, kind, outcome) in &steps {
        ctx.log(LogEvent::transaction(*kind, outcome));
    }

    if json {
        let status = ctx.status_service.summarize(&ctx.registry);
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Demo Session".bold());
    println!();
    println!("create_account(John Doe, john@x.com) -> {number}");

    let mut stdout = std::io::stdout();
    for (call, _, outcome) in &steps {
        let line = format!("{call} -> {}", render(outcome));
        match outcome {
            Ok(_) => output::success(&mut stdout, &line)?,
            Err(_) => output::error(&mut stdout, &line)?,
        }
    }

    Ok(())
}
