//! Transaction record model
//!
//! One row of the ledger. Records are written once and never edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use super::schema::date_format;
use crate::error::{LedgerError, LedgerResult};

/// Column names of the store file, in order
pub const COLUMNS: [&str; 5] = ["date", "amount", "category", "subcategory", "description"];

/// A single income or expense entry
///
/// Field order matches `COLUMNS`; the CSV store relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Transaction date
    #[serde(with = "date_format")]
    pub date: NaiveDate,

    /// Magnitude of the transaction, always positive
    pub amount: Money,

    /// Income or Expense
    pub category: Category,

    /// Label within the category, e.g. "Salary" or "Food"
    pub subcategory: String,

    /// Free text, empty when not given
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        subcategory: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            subcategory: subcategory.into(),
            description: description.into(),
        }
    }

    /// Check the record invariants
    pub fn validate(&self) -> LedgerResult<()> {
        if !self.amount.is_positive() {
            return Err(LedgerError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }

        if self.subcategory.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Subcategory cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
