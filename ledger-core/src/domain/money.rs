//! Money parsing and display helpers

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// Optional sign, ASCII digits, optional fractional part
fn plain_number() -> &'static Regex {
    static PLAIN_NUMBER: OnceLock<Regex> = OnceLock::new();
    PLAIN_NUMBER.get_or_init(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").unwrap())
}

/// Parse user-entered amount text
///
/// Surrounding whitespace is ignored. Anything that is not a plain decimal
/// number (empty text, letters, exponents, digit separators) yields `None`,
/// as does a number too large for a `Decimal`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if !plain_number().is_match(trimmed) {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Render an amount as dollars with exactly two decimals, e.g. `$100.00`
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), Some(Decimal::new(100, 0)));
        assert_eq!(parse_amount(" 12.50 "), Some(Decimal::new(1250, 2)));
        assert_eq!(parse_amount("-3"), Some(Decimal::new(-3, 0)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_parse_amount_rejects_non_plain_numbers() {
        assert_eq!(parse_amount("+7.25"), Some(Decimal::new(725, 2)));
        assert_eq!(parse_amount("1e3"), None);
        assert_eq!(parse_amount("1E3"), None);
        assert_eq!(parse_amount("1_000"), None);
        assert_eq!(parse_amount("1,000"), None);
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount(".5"), None);
        assert_eq!(parse_amount("5."), None);
        assert_eq!(parse_amount("١٢"), None);
        assert_eq!(parse_amount("792281625142643375935439503350"), None);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
        assert_eq!(format_money(Decimal::new(100, 0)), "$100.00");
        assert_eq!(format_money(Decimal::new(125, 1)), "$12.50");
        assert_eq!(format_money(Decimal::new(10005, 3)), "$10.01");
        assert_eq!(format_money(Decimal::new(10004, 3)), "$10.00");
    }
}
