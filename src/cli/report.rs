//! CLI commands for reports
//!
//! Prints the transactions in a date range with their category breakdown,
//! or exports that breakdown to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::Args;

use crate::display::{format_range_report, EMPTY_RANGE_NOTICE};
use crate::error::{LedgerError, LedgerResult};
use crate::models::parse_date;
use crate::services::{today, TransactionService};
use crate::storage::Storage;

/// Arguments for the range report
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Start date (dd-mm-yyyy), defaults to the first of this month
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (dd-mm-yyyy), defaults to today
    #[arg(short, long)]
    pub end: Option<String>,

    /// Export the category summary to a CSV file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the report command
pub fn handle_report_command(storage: &Storage, args: ReportArgs, color: bool) -> LedgerResult<()> {
    let start_date = match args.start {
        Some(s) => parse_date(&s)?,
        None => first_of_month(today()),
    };
    let end_date = match args.end {
        Some(e) => parse_date(&e)?,
        None => today(),
    };

    let report = TransactionService::new(storage).report(start_date, end_date)?;

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        if report.is_empty() {
            println!("{}", EMPTY_RANGE_NOTICE);
        }
        println!("Category summary exported to: {}", path.display());
        return Ok(());
    }

    print!(
        "{}",
        format_range_report(&report, storage.config.currency(), color)
    );
    Ok(())
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_month() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
        assert_eq!(
            first_of_month(date),
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
        );
    }
}
