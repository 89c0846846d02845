//! JSON Export functionality
//!
//! Exports the settings and every record to one JSON document with schema
//! versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Currency, Taxonomy};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{format_date, Record};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency: Currency,

    pub categories: Taxonomy,

    /// All records, in file order
    pub transactions: Vec<Record>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    /// Earliest record date (dd-mm-yyyy)
    pub earliest_transaction: Option<String>,

    /// Latest record date (dd-mm-yyyy)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> LedgerResult<Self> {
        let transactions = storage.transactions.read_all()?;

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            earliest_transaction: transactions.iter().map(|r| r.date).min().map(format_date),
            latest_transaction: transactions.iter().map(|r| r.date).max().map(format_date),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: storage.config.currency().clone(),
            categories: storage.config.taxonomy().clone(),
            transactions,
            metadata,
        })
    }
}

/// Export the full ledger to JSON format
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: W,
    pretty: bool,
) -> LedgerResult<FullExport> {
    let export = FullExport::from_storage(storage)?;

    let written = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };
    written.map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(export)
}
