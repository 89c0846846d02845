//! Finance Ledger - terminal personal finance tracker
//!
//! This library provides the core functionality for a small personal finance
//! ledger: an append-only CSV store of income and expense records, date range
//! queries over it, and category/subcategory summaries of the results.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, currency and category taxonomy
//! - `error`: Custom error types
//! - `models`: Records, money amounts and field parsing rules
//! - `storage`: CSV transaction store and JSON file helpers
//! - `reports`: Aggregation and date range reports
//! - `services`: Input checks that depend on the current configuration
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use finance_ledger::config::LedgerPaths;
//! use finance_ledger::storage::Storage;
//!
//! # fn main() -> Result<(), finance_ledger::LedgerError> {
//! let paths = LedgerPaths::resolve(None)?;
//! let storage = Storage::open(paths)?;
//! let august = storage.transactions.query_range("01-08-2025", "31-08-2025")?;
//! let summary = finance_ledger::reports::summarize(&august);
//! println!("Net savings: {}", summary.net_savings);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
