//! Core data models for the finance ledger
//!
//! This module contains the data structures of the ledger domain: the
//! transaction record, its category, money amounts, and the field rules that
//! every new record must satisfy.

pub mod category;
pub mod money;
pub mod schema;
pub mod transaction;

pub use category::Category;
pub use money::{Money, MoneyParseError};
pub use schema::{format_date, parse_amount, parse_date, validate_subcategory, DATE_FORMAT};
pub use transaction::{Record, COLUMNS};
