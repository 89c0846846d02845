//! YAML Export functionality
//!
//! Same document as the JSON export, written as YAML for reading by eye.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, mut writer: W) -> LedgerResult<FullExport> {
    let export = FullExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# Finance Ledger Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(&mut writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(export)
}
