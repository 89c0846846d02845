//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display,
//! including tables, colors, and currency-aware amounts.

pub mod category;
pub mod money;
pub mod report;
pub mod transaction;

pub use category::{format_category_tree, format_numbered_list};
pub use money::{format_amount, format_currency};
pub use report::{
    colors_enabled, format_category_summary, format_financial_summary, format_range_report,
    EMPTY_RANGE_NOTICE,
};
pub use transaction::{format_transaction_line, format_transaction_table};
