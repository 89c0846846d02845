//! CSV Export functionality
//!
//! Writes every stored record with the store's own column layout, so an
//! export can be opened anywhere the data file can.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::COLUMNS;
use crate::storage::Storage;

/// Export all transactions to CSV, returning the number written
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> LedgerResult<usize> {
    let records = storage.transactions.read_all()?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record(COLUMNS)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in &records {
        csv_writer
            .serialize(record)
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(records.len())
}
