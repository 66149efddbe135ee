//! Integration tests for the account registry and ledger context
//!
//! Run with: cargo test --test registry_tests -- --nocapture

use rust_decimal::Decimal;
use tempfile::TempDir;

use ledger_core::adapters::{RandomAccountNumbers, ScriptedAccountNumbers};
use ledger_core::config::{Config, SETTINGS_FILE};
use ledger_core::services::AccountNumberPolicy;
use ledger_core::{
    render, AccountRegistry, EntryPoint, Error, LedgerContext, LogEvent, MessageStyle,
    TransactionError, TransactionKind,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn scripted_registry(suffixes: &[u32]) -> AccountRegistry {
    AccountRegistry::with_source(Box::new(ScriptedAccountNumbers::new(suffixes.to_vec())))
}

fn dollars(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

fn is_account_number(s: &str) -> bool {
    match s.strip_prefix("ACC-") {
        Some(digits) => digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_created_accounts_match_number_pattern() {
    let mut registry = AccountRegistry::with_source(Box::new(RandomAccountNumbers::seeded(1)));

    for i in 0..200 {
        let before = registry.len();
        let account = registry
            .create_account(&format!("Owner {i}"), &format!("owner{i}@example.com"))
            .unwrap();
        assert!(is_account_number(account.account_number().as_str()));
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(registry.len(), before + 1);
    }
}

#[test]
fn test_account_numbers_are_unique_by_default() {
    let mut registry = AccountRegistry::with_source(Box::new(RandomAccountNumbers::seeded(9)));
    for i in 0..500 {
        registry.create_account("Owner", &format!("o{i}@example.com")).unwrap();
    }

    let mut numbers: Vec<&str> = registry
        .list_accounts()
        .iter()
        .map(|a| a.account_number().as_str())
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    assert_eq!(numbers.len(), 500);
}

#[test]
fn test_duplicate_email_leaves_registry_unchanged() {
    let mut registry = scripted_registry(&[]);
    registry.create_account("John Doe", "john.doe@example.com").unwrap();

    let err = registry
        .create_account("Jane Doe", "john.doe@example.com")
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateAccount));
    assert_eq!(err.to_string(), "Account with this email already exists.");
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.list_accounts()[0].owner_name, "John Doe");
}

#[test]
fn test_store_created_accounts() {
    let mut registry = scripted_registry(&[]);
    let first = registry.create_account("John Doe", "john.doe@example.com").unwrap().clone();
    let second = registry.create_account("Jane Doe", "jane.doe@example.com").unwrap().clone();

    let accounts = registry.list_accounts();
    assert_eq!(accounts.len(), 2);
    assert!(accounts.contains(&first));
    assert!(accounts.contains(&second));
}

// ============================================================================
// Transactions
// ============================================================================

#[test]
fn test_example_scenario() {
    let mut registry = scripted_registry(&[424242]);
    let number = registry
        .create_account("John Doe", "john@x.com")
        .unwrap()
        .account_number()
        .to_string();
    assert_eq!(registry.get(&number).unwrap().balance(), Decimal::ZERO);

    assert_eq!(
        render(&registry.deposit(&number, dollars(100))),
        "Deposit successful. New balance: $100.00"
    );
    assert_eq!(
        render(&registry.withdraw(&number, dollars(100))),
        "Withdrawal successful. New balance: $0.00"
    );
    assert_eq!(
        render(&registry.withdraw(&number, dollars(1))),
        "Insufficient funds for this withdrawal."
    );
}

#[test]
fn test_round_trip_balance() {
    let mut registry = scripted_registry(&[100200]);
    registry.create_account("John Doe", "john@x.com").unwrap();

    registry.deposit_input("ACC-100200", "200").unwrap();
    registry.withdraw_input("ACC-100200", "100").unwrap();
    assert_eq!(
        render(&registry.view_balance("ACC-100200")),
        "Current balance: $100.00"
    );
}

#[test]
fn test_deposits_accumulate_exactly() {
    let mut registry = scripted_registry(&[100200]);
    registry.create_account("John Doe", "john@x.com").unwrap();

    for _ in 0..10 {
        registry.deposit("ACC-100200", Decimal::new(10, 2)).unwrap();
    }
    assert_eq!(registry.get("ACC-100200").unwrap().balance(), dollars(1));
}

#[test]
fn test_rejected_operations_mutate_nothing() {
    let mut registry = scripted_registry(&[100200]);
    registry.create_account("John Doe", "john@x.com").unwrap();
    registry.deposit("ACC-100200", dollars(25)).unwrap();

    let attempts = [
        registry.deposit("ACC-100200", dollars(0)),
        registry.deposit("ACC-100200", dollars(-10)),
        registry.deposit("ACC-999999", dollars(10)),
        registry.withdraw("ACC-999999", dollars(10)),
        registry.withdraw("ACC-100200", dollars(-1)),
        registry.withdraw("ACC-100200", dollars(26)),
        registry.deposit_input("ACC-100200", "twelve"),
        registry.withdraw_input("ACC-100200", ""),
    ];
    assert!(attempts.iter().all(|o| o.is_err()));
    assert_eq!(registry.get("ACC-100200").unwrap().balance(), dollars(25));
}

#[test]
fn test_missing_account_messages() {
    let mut registry = scripted_registry(&[]);
    for outcome in [
        registry.deposit("ACC-123456", dollars(5)),
        registry.withdraw("ACC-123456", dollars(5)),
        registry.view_balance("ACC-123456"),
    ] {
        assert_eq!(render(&outcome), "Account not found.");
    }
}

#[test]
fn test_non_positive_messages() {
    let mut registry = scripted_registry(&[100200]);
    registry.create_account("John Doe", "john@x.com").unwrap();

    assert_eq!(
        render(&registry.deposit("ACC-100200", dollars(0))),
        "Deposit amount must be greater than zero."
    );
    assert_eq!(
        render(&registry.withdraw("ACC-100200", dollars(0))),
        "Withdrawal amount must be greater than zero."
    );
}

// ============================================================================
// Context wiring
// ============================================================================

#[test]
fn test_context_applies_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(SETTINGS_FILE),
        r#"{"accountNumbers": "unchecked", "messageStyle": "refined"}"#,
    )
    .unwrap();

    let config = Config::load_with_env(dir.path(), |_| None).unwrap();
    let mut ctx = LedgerContext::with_source(
        config,
        EntryPoint::Shell,
        Box::new(ScriptedAccountNumbers::new([111111, 111111])),
    );

    assert_eq!(ctx.registry.policy(), AccountNumberPolicy::Unchecked);
    assert_eq!(ctx.registry.message_style(), MessageStyle::Refined);
    assert_eq!(
        ctx.registry.deposit_input("ACC-111111", "x"),
        Err(TransactionError::InvalidAmount(MessageStyle::Refined))
    );

    ctx.registry.create_account("A", "a@x.com").unwrap();
    let outcome = ctx.registry.view_balance("ACC-111111");
    ctx.log(LogEvent::transaction(TransactionKind::BalanceInquiry, &outcome));

    let recent = ctx.logging_service.get_recent(1).unwrap();
    assert_eq!(recent[0].outcome.as_deref(), Some("ok"));
}
