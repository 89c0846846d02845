//! Currency-aware amount formatting

use crate::config::{Currency, CurrencyPosition};
use crate::models::Money;

/// Format an amount with the configured currency symbol
///
/// Rounds to two decimals and adds thousands separators; the sign goes in
/// front of everything: `-$1,234.50`, `-1,234.50€`.
pub fn format_amount(amount: Money, currency: &Currency) -> String {
    let rounded = amount.round_to_cents();
    let sign = if rounded.is_negative() { "-" } else { "" };
    let text = rounded.to_string();
    let digits = text.trim_start_matches('-');
    let (units, cents) = digits.split_once('.').unwrap_or((digits, "00"));
    let number = format!("{}.{}", group_thousands(units), cents);

    match currency.position {
        CurrencyPosition::Before => format!("{}{}{}", sign, currency.symbol, number),
        CurrencyPosition::After => format!("{}{}{}", sign, number, currency.symbol),
    }
}

/// One-line description of a currency: `$ (USD), symbol before amount`
pub fn format_currency(currency: &Currency) -> String {
    format!(
        "{} ({}), symbol {} amount",
        currency.symbol, currency.code, currency.position
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
