//! Transaction display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::money::format_amount;
use super::report::{category_color, paint};
use crate::config::Currency;
use crate::models::{format_date, Record};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Subcategory")]
    subcategory: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl TransactionRow {
    fn new(record: &Record, currency: &Currency, color: bool) -> Self {
        let tint = category_color(record.category);
        Self {
            date: format_date(record.date),
            amount: paint(format_amount(record.amount, currency), tint, color),
            category: paint(record.category.to_string(), tint, color),
            subcategory: record.subcategory.clone(),
            description: record.description.clone(),
        }
    }
}

/// Format records as a table, in the order given
///
/// With `color`, amount and category cells are green for income and red
/// for expenses.
pub fn format_transaction_table(records: &[Record], currency: &Currency, color: bool) -> String {
    if records.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = records.iter().map(|r| TransactionRow::new(r, currency, color));
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));

    format!("Transaction History\n{}\n", table)
}

/// Format a single record for confirmation messages
pub fn format_transaction_line(record: &Record, currency: &Currency) -> String {
    let mut line = format!(
        "{} {} {}/{}",
        format_date(record.date),
        format_amount(record.amount, currency),
        record.category,
        record.subcategory
    );
    if !record.description.is_empty() {
        line.push_str(&format!(" ({})", record.description));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn sample() -> Vec<Record> {
        vec![
            Record::new(
                NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
                Money::from_cents(100000),
                Category::Income,
                "Salary",
                "August pay",
            ),
            Record::new(
                NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
                Money::from_cents(2050),
                Category::Expense,
                "Food",
                "",
            ),
        ]
    }

    #[test]
    fn test_table_contents() {
        let table = format_transaction_table(&sample(), &Currency::default(), false);
        assert!(table.starts_with("Transaction History\n"));
        for header in ["Date", "Amount", "Category", "Subcategory", "Description"] {
            assert!(table.contains(header));
        }
        assert!(table.contains("10-08-2025"));
        assert!(table.contains("$1,000.00"));
        assert!(table.contains("August pay"));
        assert!(table.contains("$20.50"));

        // Given order is kept
        let first = table.find("10-08-2025").unwrap();
        let second = table.find("11-08-2025").unwrap();
        assert!(first < second);
        assert!(!table.contains('\x1b'));
    }

    #[test]
    fn test_table_colors_by_category() {
        let table = format_transaction_table(&sample(), &Currency::default(), true);
        assert!(table.contains('\x1b'));
        assert!(strip_ansi(&table).contains("$1,000.00"));

        // Escape codes don't count toward column width
        let widths: Vec<usize> = table
            .lines()
            .skip(1)
            .map(|line| strip_ansi(line).chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_empty_table() {
        let table = format_transaction_table(&[], &Currency::default(), false);
        assert_eq!(table, "No transactions found.\n");
    }

    #[test]
    fn test_transaction_line() {
        let records = sample();
        let currency = Currency::default();
        assert_eq!(
            format_transaction_line(&records[0], &currency),
            "10-08-2025 $1,000.00 Income/Salary (August pay)"
        );
        assert_eq!(
            format_transaction_line(&records[1], &currency),
            "11-08-2025 $20.50 Expense/Food"
        );
    }
}
