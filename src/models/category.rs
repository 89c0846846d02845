//! Category model
//!
//! A transaction is either income or an expense. Subcategories are free-form
//! names configured per category in the taxonomy (see `config::settings`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Top-level transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// Both categories, in menu order
    pub fn all() -> &'static [Category] {
        &[Category::Income, Category::Expense]
    }

    /// Get the canonical name as stored on disk
    pub fn name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Parse "Income" or "Expense", ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::Validation(format!(
                "Unknown category '{}'. Use 'Income' or 'Expense'",
                s.trim()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("Income".parse::<Category>().unwrap(), Category::Income);
        assert_eq!("expense".parse::<Category>().unwrap(), Category::Expense);
        assert_eq!(" EXPENSE ".parse::<Category>().unwrap(), Category::Expense);
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "Transfer".parse::<Category>().unwrap_err();
        assert!(err.is_validation());

        assert!("".parse::<Category>().unwrap_err().is_validation());
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Income.to_string(), "Income");
        assert_eq!(Category::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Category::Expense).unwrap();
        assert_eq!(json, "\"Expense\"");
        let parsed: Category = serde_json::from_str("\"Income\"").unwrap();
        assert_eq!(parsed, Category::Income);
    }
}
