//! Export module for the finance ledger
//!
//! Provides complete data export in multiple formats:
//! - CSV: the records, spreadsheet-compatible
//! - JSON: settings and records, machine-readable
//! - YAML: settings and records, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
