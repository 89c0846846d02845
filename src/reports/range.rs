//! Date range report
//!
//! Pulls the records for an inclusive date range out of the store and pairs
//! them with their summary.

use std::io::Write;

use chrono::NaiveDate;

use super::summary::{summarize, Summary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{format_date, Record};
use crate::storage::TransactionStore;

/// Records in a date range plus their summary
#[derive(Debug, Clone)]
pub struct RangeReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Sorted by date; same-day records keep file order
    pub records: Vec<Record>,
    pub summary: Summary,
}

impl RangeReport {
    /// Generate a report for `[start_date, end_date]`
    pub fn generate(
        store: &TransactionStore,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> LedgerResult<Self> {
        let mut records = store.query_dates(start_date, end_date)?;
        records.sort_by_key(|r| r.date);
        let summary = summarize(&records);

        Ok(Self {
            start_date,
            end_date,
            records,
            summary,
        })
    }

    /// True when no record fell in the range
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export the category summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());
        let start = format_date(self.start_date);
        let end = format_date(self.end_date);

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record([
                "start_date",
                "end_date",
                "category",
                "subcategory",
                "amount",
                "count",
            ])
            .map_err(export_err)?;

        for category in &self.summary.categories {
            for sub in &category.subcategories {
                let amount = sub.total.to_string();
                let count = sub.count.to_string();
                csv_writer
                    .write_record([
                        start.as_str(),
                        end.as_str(),
                        category.category.name(),
                        sub.subcategory.as_str(),
                        amount.as_str(),
                        count.as_str(),
                    ])
                    .map_err(export_err)?;
            }
        }

        let totals = [
            ("TOTAL INCOME", self.summary.total_income),
            ("TOTAL EXPENSE", self.summary.total_expense),
            ("NET SAVINGS", self.summary.net_savings),
        ];
        for (label, amount) in totals {
            let amount = amount.to_string();
            csv_writer
                .write_record([start.as_str(), end.as_str(), label, "", amount.as_str(), ""])
                .map_err(export_err)?;
        }

        csv_writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        Ok(())
    }
}
