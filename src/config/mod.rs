//! Configuration module for the finance ledger
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - Currency and category taxonomy persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{ConfigStore, Currency, CurrencyPosition, LedgerConfig, Taxonomy};
