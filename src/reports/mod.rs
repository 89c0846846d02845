//! Reports module for the finance ledger
//!
//! Provides the pure category summary and the date range report built on it.

pub mod range;
pub mod summary;

pub use range::RangeReport;
pub use summary::{summarize, CategoryTotal, SubcategoryTotal, Summary};
