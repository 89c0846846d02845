//! Custom error types for the finance ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A field failed schema validation (amount, category, subcategory)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date string was malformed or named an impossible calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The transaction store could not be created, opened, read or written
    #[error("Store unavailable at {path}: {reason}")]
    StoreUnavailable { path: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Interactive input ended before an answer was given
    #[error("Input closed")]
    Cancelled,
}

impl LedgerError {
    /// Create a store error for the file at `path`
    pub fn store(path: &Path, reason: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for subcategories
    pub fn subcategory_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Subcategory",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a date error
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate(_))
    }

    /// Check if the store could not be used
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Errors a prompt can recover from by asking again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidDate(_) | Self::NotFound { .. }
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
