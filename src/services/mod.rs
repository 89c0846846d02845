//! Service layer for the finance ledger
//!
//! The service layer sits between the presentation layer and storage,
//! applying the checks that depend on the current configuration.

pub mod transaction;

pub use transaction::{today, CreateTransactionInput, TransactionService};
