//! Transaction store backed by a CSV file
//!
//! The file has a fixed header (`date,amount,category,subcategory,description`)
//! and one record per row. Rows are only ever appended; nothing here rewrites
//! or removes existing rows.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Record, COLUMNS};

/// Append-only store of transaction records
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a store for the file at `path`; nothing is touched until first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with just the header row if it doesn't exist
    ///
    /// Safe to call on every startup; an existing file with content is left
    /// untouched.
    pub fn initialize(&self) -> LedgerResult<()> {
        if let Ok(metadata) = fs::metadata(&self.path) {
            if metadata.len() > 0 {
                return Ok(());
            }
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::store(&self.path, format!("Failed to create directory: {}", e))
            })?;
        }

        let file = File::create(&self.path)
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to create: {}", e)))?;
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(COLUMNS)
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to write header: {}", e)))?;
        writer
            .flush()
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to flush: {}", e)))?;

        debug!(path = %self.path.display(), "Initialized transaction store");
        Ok(())
    }

    /// Validate a record and write it as the last row
    ///
    /// Duplicates are allowed. An invalid record leaves the file unchanged.
    pub fn append(&self, record: &Record) -> LedgerResult<()> {
        record.validate()?;
        self.initialize()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to open: {}", e)))?;

        // A file edited by hand may be missing its final newline
        if !ends_with_newline(&mut file)
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to read: {}", e)))?
        {
            file.write_all(b"\n")
                .map_err(|e| LedgerError::store(&self.path, format!("Failed to write: {}", e)))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(record)
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to write record: {}", e)))?;
        writer
            .flush()
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to flush: {}", e)))?;

        info!(
            date = %record.date,
            category = %record.category,
            subcategory = %record.subcategory,
            amount = %record.amount,
            "Appended transaction"
        );
        Ok(())
    }

    /// Read every stored record in file order
    ///
    /// A missing file is created empty. A row that can't be read is an error
    /// naming the line, never skipped.
    pub fn read_all(&self) -> LedgerResult<Vec<Record>> {
        self.initialize()?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to open: {}", e)))?;

        let headers = reader
            .headers()
            .map_err(|e| LedgerError::store(&self.path, format!("Failed to read header: {}", e)))?;
        if !headers.iter().eq(COLUMNS.iter().copied()) {
            return Err(LedgerError::store(
                &self.path,
                format!(
                    "Unexpected header '{}', expected '{}'",
                    headers.iter().collect::<Vec<_>>().join(","),
                    COLUMNS.join(",")
                ),
            ));
        }

        let mut records = Vec::new();
        for result in reader.deserialize::<Record>() {
            let record = result.map_err(|e| {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                LedgerError::store(&self.path, format!("Unreadable row at line {}: {}", line, e))
            })?;
            records.push(record);
        }

        debug!(count = records.len(), "Read transaction store");
        Ok(records)
    }

    /// Records dated within `[start, end]`, bounds given as `dd-mm-yyyy`
    ///
    /// Both bounds are parsed before the file is read.
    pub fn query_range(&self, start: &str, end: &str) -> LedgerResult<Vec<Record>> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        self.query_dates(start, end)
    }

    /// Records dated within `[start, end]`, inclusive, in file order
    ///
    /// A reversed range matches nothing. No matches is an empty vector, not
    /// an error.
    pub fn query_dates(&self, start: NaiveDate, end: NaiveDate) -> LedgerResult<Vec<Record>> {
        if start > end {
            debug!(%start, %end, "Reversed date range, nothing to match");
            return Ok(Vec::new());
        }

        let records: Vec<Record> = self
            .read_all()?
            .into_iter()
            .filter(|r| r.date >= start && r.date <= end)
            .collect();

        debug!(%start, %end, matched = records.len(), "Queried transaction store");
        Ok(records)
    }
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
