//! Shell command - the interactive account menu
//!
//! The shell is a thin consumer of the registry: it prompts for input, hands
//! the raw text to the core and prints whatever message comes back. Nothing
//! that happens here ends the session except choosing Exit or running out of
//! input.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use ledger_core::services::{AccountSummary, LogEntry};
use ledger_core::{
    format_money, render, Account, LedgerContext, LogEvent, Outcome, TransactionKind,
};

use crate::output;

const MENU: &str = "
===== Bank Account Manager =====
1. Create a New Account
2. Deposit Funds
3. Withdraw Funds
4. View Balance
5. View All Accounts
6. View Activity Log
7. Exit
================================";

/// Number of activity entries shown by the log view
const ACTIVITY_LIMIT: usize = 20;

/// Source of user input
pub trait Prompt {
    /// Ask for one line of text, `None` once input is exhausted
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal prompt backed by dialoguer
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let text: String = dialoguer::Input::new()
            .with_prompt(prompt.trim_end_matches(&[':', ' '][..]))
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(text))
    }
}

/// Plain line-by-line prompt for piped input
pub struct LinePrompt<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.echo, "{}", prompt)?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    ViewBalance,
    ViewAccounts,
    ViewActivity,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::CreateAccount),
            "2" => Some(Self::Deposit),
            "3" => Some(Self::Withdraw),
            "4" => Some(Self::ViewBalance),
            "5" => Some(Self::ViewAccounts),
            "6" => Some(Self::ViewActivity),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }

    fn command(self) -> &'static str {
        match self {
            Self::CreateAccount => "create_account",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::ViewBalance => "view_balance",
            Self::ViewAccounts => "view_accounts",
            Self::ViewActivity => "view_activity",
            Self::Exit => "exit",
        }
    }
}

/// Run the menu on the real terminal until the user exits
pub fn run(ctx: &mut LedgerContext) -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        Shell::new(ctx, TerminalPrompt, io::stdout()).run()
    } else {
        let stdin = io::stdin();
        Shell::new(ctx, LinePrompt::new(stdin.lock(), io::stdout()), io::stdout()).run()
    }
}

/// Interactive menu loop over a ledger context
pub struct Shell<'a, P, W> {
    ctx: &'a mut LedgerContext,
    prompt: P,
    out: W,
}

impl<'a, P: Prompt, W: Write> Shell<'a, P, W> {
    pub fn new(ctx: &'a mut LedgerContext, prompt: P, out: W) -> Self {
        Self { ctx, prompt, out }
    }

    /// Show the menu and dispatch choices until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        self.ctx.logging_service.log_event("shell_started").ok();

        loop {
            writeln!(self.out, "{}", MENU)?;
            let Some(input) = self.prompt.ask("Choose an option: ")? else {
                writeln!(self.out, "Exiting. Goodbye!")?;
                break;
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                output::warning(&mut self.out, "Invalid choice. Please try again.")?;
                continue;
            };
            self.ctx.logging_service.log_command(choice.command()).ok();

            match choice {
                MenuChoice::CreateAccount => self.create_account()?,
                MenuChoice::Deposit => self.deposit()?,
                MenuChoice::Withdraw => self.withdraw()?,
                MenuChoice::ViewBalance => self.view_balance()?,
                MenuChoice::ViewAccounts => self.view_accounts()?,
                MenuChoice::ViewActivity => self.view_activity()?,
                MenuChoice::Exit => {
                    writeln!(self.out, "Exiting. Goodbye!")?;
                    break;
                }
            }
        }

        self.ctx.logging_service.log_event("shell_exited").ok();
        Ok(())
    }

    fn create_account(&mut self) -> Result<()> {
        let Some(owner_name) = self.prompt.ask("Enter the owner's name: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt.ask("Enter the email: ")? else {
            return Ok(());
        };

        match self.ctx.registry.create_account(&owner_name, &email) {
            Ok(account) => {
                output::success(&mut self.out, "Account created successfully!")?;
                write_account(&mut self.out, account)?;
                self.ctx.log(LogEvent::new("account_created").with_outcome("ok"));
            }
            Err(e) => {
                output::error(&mut self.out, &format!("Error: {}", e))?;
                self.ctx
                    .logging_service
                    .log_error("account_creation_failed", error_code(&e))
                    .ok();
            }
        }
        Ok(())
    }

    fn deposit(&mut self) -> Result<()> {
        let Some(number) = self.prompt.ask("Enter the account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt.ask("Enter the amount to deposit: ")? else {
            return Ok(());
        };

        let outcome = self.ctx.registry.deposit_input(number.trim(), &amount);
        self.report(TransactionKind::Deposit, &outcome)
    }

    fn withdraw(&mut self) -> Result<()> {
        let Some(number) = self.prompt.ask("Enter the account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt.ask("Enter the amount to withdraw: ")? else {
            return Ok(());
        };

        let outcome = self.ctx.registry.withdraw_input(number.trim(), &amount);
        self.report(TransactionKind::Withdrawal, &outcome)
    }

    fn view_balance(&mut self) -> Result<()> {
        let Some(number) = self.prompt.ask("Enter the account number: ")? else {
            return Ok(());
        };

        let outcome = self.ctx.registry.view_balance(number.trim());
        self.report(TransactionKind::BalanceInquiry, &outcome)
    }

    fn view_accounts(&mut self) -> Result<()> {
        if self.ctx.registry.is_empty() {
            output::info(&mut self.out, "No accounts found.")?;
            return Ok(());
        }

        let status = self.ctx.status_service.summarize(&self.ctx.registry);
        writeln!(self.out, "{}", accounts_table(&status.accounts))?;
        writeln!(
            self.out,
            "{} account(s), total balance {}",
            status.total_accounts,
            status.total_balance_display()
        )?;
        Ok(())
    }

    fn view_activity(&mut self) -> Result<()> {
        let entries = self.ctx.logging_service.get_recent(ACTIVITY_LIMIT)?;
        if entries.is_empty() {
            output::info(&mut self.out, "No activity recorded.")?;
            return Ok(());
        }
        writeln!(self.out, "{}", activity_table(&entries))?;
        Ok(())
    }

    fn report(&mut self, kind: TransactionKind, outcome: &Outcome) -> Result<()> {
        let message = render(outcome);
        match outcome {
            Ok(_) => output::success(&mut self.out, &message)?,
            Err(_) => output::error(&mut self.out, &message)?,
        }
        self.ctx.log(LogEvent::transaction(kind, outcome));
        Ok(())
    }
}

fn write_account(out: &mut impl Write, account: &Account) -> io::Result<()> {
    writeln!(out, "Account Number: {}", account.account_number())?;
    writeln!(out, "Owner Name: {}", account.owner_name)?;
    writeln!(out, "Email: {}", account.email)?;
    writeln!(out, "Balance: {}", format_money(account.balance()))
}

fn accounts_table(accounts: &[AccountSummary]) -> comfy_table::Table {
    let mut table = output::create_table();
    table.set_header(vec!["#", "Account Number", "Owner Name", "Email", "Balance"]);
    for (index, account) in accounts.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            account.account_number.clone(),
            account.owner_name.clone(),
            account.email.clone(),
            format_money(account.balance),
        ]);
    }
    table
}

fn activity_table(entries: &[LogEntry]) -> comfy_table::Table {
    let mut table = output::create_table();
    table.set_header(vec!["#", "Time", "Event", "Command", "Result"]);
    for entry in entries {
        table.add_row(vec![
            entry.id.to_string(),
            entry.timestamp.format("%H:%M:%S").to_string(),
            entry.event.clone(),
            entry.command.clone().unwrap_or_default(),
            entry
                .error_message
                .clone()
                .or_else(|| entry.outcome.clone())
                .unwrap_or_default(),
        ]);
    }
    table
}

fn error_code(error: &ledger_core::Error) -> &'static str {
    match error {
        ledger_core::Error::DuplicateAccount => "duplicate_account",
        ledger_core::Error::AccountNumbersExhausted(_) => "account_numbers_exhausted",
        ledger_core::Error::Config(_) => "config",
    }
}
