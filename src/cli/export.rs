//! CLI commands for data export

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (records only)
    Csv,
    /// JSON format (settings and records)
    Json,
    /// YAML format (settings and records, human-readable)
    Yaml,
}

impl ExportFormat {
    /// File written when no output path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Csv => "finance_export.csv",
            Self::Json => "finance_export.json",
            Self::Yaml => "finance_export.yaml",
        }
    }
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (defaults to finance_export.<format> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> LedgerResult<()> {
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(args.format.default_file_name()));

    let count = export_to_path(storage, args.format, &output, args.pretty)?;
    println!(
        "Data exported successfully to {} ({} transactions)",
        output.display(),
        count
    );
    Ok(())
}

/// Write an export of `format` to `path`, returning the number of records
///
/// The export is rendered in memory first; `path` is only touched once the
/// store has been read successfully.
pub fn export_to_path(
    storage: &Storage,
    format: ExportFormat,
    path: &Path,
    pretty: bool,
) -> LedgerResult<usize> {
    let mut buffer = Vec::new();

    let count = match format {
        ExportFormat::Csv => csv::export_transactions_csv(storage, &mut buffer)?,
        ExportFormat::Json => {
            json::export_full_json(storage, &mut buffer, pretty)?
                .metadata
                .transaction_count
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage, &mut buffer)?
                .metadata
                .transaction_count
        }
    };

    fs::write(path, &buffer).map_err(|e| {
        LedgerError::Export(format!("Failed to write file {}: {}", path.display(), e))
    })?;
    Ok(count)
}
