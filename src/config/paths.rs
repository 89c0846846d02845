//! Path management for the finance ledger
//!
//! ## Path Resolution Order
//!
//! 1. `--home` flag or `FINANCE_LEDGER_HOME` environment variable (if set)
//! 2. The platform config directory, e.g. `~/.config/finance-ledger` on Linux,
//!    `~/Library/Application Support/finance-ledger` on macOS,
//!    `%APPDATA%\finance-ledger\config` on Windows

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "FINANCE_LEDGER_HOME";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for the store and config files
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the base directory from an explicit override or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory cannot
    /// be determined.
    pub fn resolve(home: Option<PathBuf>) -> Result<Self, LedgerError> {
        let base_dir = match home {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the transaction store
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("finance_data.csv")
    }

    /// Get the path to the config file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("finance_config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "finance-ledger")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            LedgerError::Config(format!(
                "Could not determine a home directory; set {} or pass --home",
                HOME_ENV
            ))
        })
}
