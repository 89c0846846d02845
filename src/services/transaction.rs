//! Transaction service
//!
//! The ingestion path: checks a new record against the current taxonomy,
//! then hands it to the store. Reading goes straight through to reports.

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{validate_subcategory, Category, Money, Record};
use crate::reports::RangeReport;
use crate::storage::Storage;

/// Service for recording and reporting transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Defaults to today when `None`
    pub date: Option<NaiveDate>,
    pub amount: Money,
    pub category: Category,
    pub subcategory: String,
    pub description: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// The subcategory must be configured for the category right now.
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Record> {
        validate_subcategory(
            self.storage.config.taxonomy(),
            input.category,
            &input.subcategory,
        )?;

        let record = Record::new(
            input.date.unwrap_or_else(today),
            input.amount,
            input.category,
            input.subcategory.trim(),
            input.description.unwrap_or_default().trim(),
        );

        self.storage.transactions.append(&record)?;
        Ok(record)
    }

    /// Records and summary for `[start, end]`
    pub fn report(&self, start: NaiveDate, end: NaiveDate) -> LedgerResult<RangeReport> {
        RangeReport::generate(&self.storage.transactions, start, end)
    }
}

/// Today's local date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
