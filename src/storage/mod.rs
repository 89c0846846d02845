//! Storage layer for the finance ledger
//!
//! Provides the CSV transaction store, atomic JSON writes for the config
//! document, and a coordinator that opens both for one process.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json_required, write_json_atomic};
pub use transactions::TransactionStore;

use crate::config::paths::LedgerPaths;
use crate::config::ConfigStore;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to the store and config
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: TransactionStore,
    pub config: ConfigStore,
}

impl Storage {
    /// Open storage under `paths`, creating the directory, config and store if absent
    pub fn open(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        let config = ConfigStore::load_or_create(paths.config_file())?;
        let transactions = TransactionStore::new(paths.data_file());
        transactions.initialize()?;

        Ok(Self {
            transactions,
            config,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }
}
