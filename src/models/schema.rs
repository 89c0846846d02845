//! Field rules for transaction records
//!
//! Every parser here succeeds or fails once; re-prompting on failure is the
//! caller's business.

use chrono::NaiveDate;

use super::category::Category;
use super::money::Money;
use crate::config::Taxonomy;
use crate::error::{LedgerError, LedgerResult};

/// The one date format used for input, storage and display
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `dd-mm-yyyy` date
///
/// Single-digit day and month are accepted and normalized by `format_date`.
/// The year must have four digits.
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    let s = s.trim();
    let invalid = || {
        LedgerError::InvalidDate(format!(
            "'{}' is not a valid date. Use dd-mm-yyyy format",
            s
        ))
    };

    let parts: Vec<&str> = s.split('-').collect();
    let shape_ok = parts.len() == 3
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
        && (1..=2).contains(&parts[0].len())
        && (1..=2).contains(&parts[1].len())
        && parts[2].len() == 4;
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Format a date in canonical `dd-mm-yyyy` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a transaction amount; it must be a positive number
pub fn parse_amount(s: &str) -> LedgerResult<Money> {
    let amount = Money::parse(s)
        .map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))?;

    if !amount.is_positive() {
        return Err(LedgerError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }

    Ok(amount)
}

/// Check that `subcategory` is configured for `category` right now
///
/// Only new input is checked. Stored records keep whatever subcategory they
/// were written with, even if it was later removed from the taxonomy.
pub fn validate_subcategory(
    taxonomy: &Taxonomy,
    category: Category,
    subcategory: &str,
) -> LedgerResult<()> {
    let name = subcategory.trim();
    if name.is_empty() {
        return Err(LedgerError::Validation(
            "Subcategory cannot be empty".into(),
        ));
    }

    if taxonomy.contains(category, name) {
        Ok(())
    } else {
        Err(LedgerError::Validation(format!(
            "'{}' is not a configured {} subcategory",
            name, category
        )))
    }
}

/// Serde adapter that reads and writes `NaiveDate` as `dd-mm-yyyy`
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_date(&s).map_err(serde::de::Error::custom)
    }
}
