//! Report formatting for terminal output
//!
//! Renders a `Summary` as the category breakdown and the income/expense
//! totals. Colors come from crossterm and are skipped when `NO_COLOR` is set.

use crossterm::style::{style, Color, Stylize};

use super::money::format_amount;
use crate::config::Currency;
use crate::models::Category;
use crate::reports::{RangeReport, Summary};

const LABEL_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 16;
const WIDTH: usize = LABEL_WIDTH + AMOUNT_WIDTH;

/// Notice printed when a range holds no records
pub const EMPTY_RANGE_NOTICE: &str = "No transactions found in the given date range.";

/// Whether color output is allowed (`NO_COLOR` unset)
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Apply `color` to `text` when `enabled`
pub fn paint(text: String, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text
    }
}

/// Green for income, red for expenses
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Income => Color::Green,
        Category::Expense => Color::Red,
    }
}

fn line(label: &str, amount: &str) -> String {
    format!(
        "{:<label$}{:>amount$}",
        truncate(label, LABEL_WIDTH - 1),
        amount,
        label = LABEL_WIDTH,
        amount = AMOUNT_WIDTH
    )
}

/// Category totals, each followed by its subcategory lines
pub fn format_category_summary(summary: &Summary, currency: &Currency, color: bool) -> String {
    let mut output = String::new();
    output.push_str("Category Summary\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for category in &summary.categories {
        let text = line(
            category.category.name(),
            &format_amount(category.total, currency),
        );
        output.push_str(&paint(text, category_color(category.category), color));
        output.push('\n');

        for sub in &category.subcategories {
            output.push_str(&line(
                &format!("  - {}", sub.subcategory),
                &format_amount(sub.total, currency),
            ));
            output.push('\n');
        }
    }

    output
}

/// Total income, total expenses and net savings
pub fn format_financial_summary(summary: &Summary, currency: &Currency, color: bool) -> String {
    let mut output = String::new();
    output.push_str("Financial Summary\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    let income = line("Total Income:", &format_amount(summary.total_income, currency));
    output.push_str(&paint(income, Color::Green, color));
    output.push('\n');
    let expense = line(
        "Total Expenses:",
        &format_amount(summary.total_expense, currency),
    );
    output.push_str(&paint(expense, Color::Red, color));
    output.push('\n');

    output.push_str(&separator(WIDTH));
    output.push('\n');

    let net = line("Net Savings:", &format_amount(summary.net_savings, currency));
    let net_color = if summary.net_savings.is_negative() {
        Color::Red
    } else {
        Color::Green
    };
    output.push_str(&paint(net, net_color, color));
    output.push('\n');

    output
}

/// The full range report: records, category breakdown, totals
pub fn format_range_report(report: &RangeReport, currency: &Currency, color: bool) -> String {
    if report.is_empty() {
        return format!("{}\n", EMPTY_RANGE_NOTICE);
    }

    let mut output = String::new();
    output.push_str(&super::transaction::format_transaction_table(
        &report.records,
        currency,
        color,
    ));
    output.push('\n');
    output.push_str(&format_category_summary(&report.summary, currency, color));
    output.push('\n');
    output.push_str(&format_financial_summary(&report.summary, currency, color));
    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
