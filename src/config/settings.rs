//! Ledger configuration: currency and category taxonomy
//!
//! The config lives in one JSON document with a `currency` section and a
//! `categories` section. `ConfigStore` owns the in-memory copy; a mutation only
//! takes effect in memory once the file has been written.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;
use crate::storage::file_io::{read_json_required, write_json_atomic};

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPosition {
    /// `$100.00`
    #[default]
    Before,
    /// `100.00€`
    After,
}

impl fmt::Display for CurrencyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

impl FromStr for CurrencyPosition {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(LedgerError::Validation(format!(
                "Unknown currency position '{}'. Use 'before' or 'after'",
                other
            ))),
        }
    }
}

/// Currency descriptor used when displaying amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
    pub code: String,
    #[serde(default)]
    pub position: CurrencyPosition,
}

impl Currency {
    pub fn new(symbol: impl Into<String>, code: impl Into<String>, position: CurrencyPosition) -> Self {
        Self {
            symbol: symbol.into(),
            code: code.into(),
            position,
        }
    }

    /// Look up one of the built-in currencies by ISO code
    pub fn preset(code: &str) -> Option<Self> {
        let code = code.trim().to_uppercase();
        Self::presets().into_iter().find(|c| c.code == code)
    }

    /// Built-in currencies, in menu order
    pub fn presets() -> Vec<Self> {
        vec![
            Self::new("$", "USD", CurrencyPosition::Before),
            Self::new("€", "EUR", CurrencyPosition::Before),
            Self::new("£", "GBP", CurrencyPosition::Before),
            Self::new("¥", "JPY", CurrencyPosition::Before),
            Self::new("₹", "INR", CurrencyPosition::Before),
        ]
    }

    fn validate(&self) -> LedgerResult<()> {
        if self.symbol.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Currency symbol cannot be empty".into(),
            ));
        }
        if self.code.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Currency code cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("$", "USD", CurrencyPosition::Before)
    }
}

/// Allowed subcategory names per category, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(rename = "Income", default = "default_income")]
    income: Vec<String>,
    #[serde(rename = "Expense", default = "default_expense")]
    expense: Vec<String>,
}

fn default_income() -> Vec<String> {
    ["Salary", "Freelance", "Investments", "Other Income"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_expense() -> Vec<String> {
    [
        "Food",
        "Transportation",
        "Housing",
        "Utilities",
        "Healthcare",
        "Entertainment",
        "Shopping",
        "Other Expenses",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            income: default_income(),
            expense: default_expense(),
        }
    }
}

impl Taxonomy {
    /// Create a taxonomy from explicit lists
    pub fn new(income: Vec<String>, expense: Vec<String>) -> Self {
        Self { income, expense }
    }

    /// Subcategories configured for `category`
    pub fn subcategories(&self, category: Category) -> &[String] {
        match category {
            Category::Income => &self.income,
            Category::Expense => &self.expense,
        }
    }

    fn subcategories_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Income => &mut self.income,
            Category::Expense => &mut self.expense,
        }
    }

    /// Check if `name` is configured for `category` (exact match)
    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.subcategories(category).iter().any(|s| s == name)
    }

    /// Append a new subcategory to the end of the list
    pub fn add(&mut self, category: Category, name: &str) -> LedgerResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Subcategory cannot be empty".into(),
            ));
        }
        if self.contains(category, name) {
            return Err(LedgerError::Validation(format!(
                "{} subcategory '{}' already exists",
                category, name
            )));
        }

        self.subcategories_mut(category).push(name.to_string());
        Ok(())
    }

    /// Remove a subcategory by name
    pub fn remove(&mut self, category: Category, name: &str) -> LedgerResult<String> {
        let name = name.trim();
        let list = self.subcategories_mut(category);
        let index = list
            .iter()
            .position(|s| s == name)
            .ok_or_else(|| LedgerError::subcategory_not_found(format!("{}/{}", category, name)))?;
        Ok(list.remove(index))
    }
}

/// The persisted configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub categories: Taxonomy,
}

/// Owns the configuration and its file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: LedgerConfig,
}

impl ConfigStore {
    /// Load the config from disk, writing the defaults first if the file doesn't exist
    pub fn load_or_create(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();

        if path.exists() {
            let config: LedgerConfig = read_json_required(&path).map_err(|e| {
                LedgerError::Config(format!("Failed to load {}: {}", path.display(), e))
            })?;
            debug!(path = %path.display(), "Loaded config");
            Ok(Self { path, config })
        } else {
            info!(path = %path.display(), "Config file not found, writing defaults");
            let store = Self {
                path,
                config: LedgerConfig::default(),
            };
            store.save()?;
            Ok(store)
        }
    }

    /// Save the config to disk
    pub fn save(&self) -> LedgerResult<()> {
        write_config(&self.path, &self.config)
    }

    /// Path of the config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configured taxonomy (read-only)
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.config.categories
    }

    /// The configured currency (read-only)
    pub fn currency(&self) -> &Currency {
        &self.config.currency
    }

    /// Replace the currency and persist
    pub fn set_currency(&mut self, currency: Currency) -> LedgerResult<()> {
        currency.validate()?;
        let code = currency.code.clone();
        self.update(|config| {
            config.currency = currency;
            Ok(())
        })?;
        info!(%code, "Currency updated");
        Ok(())
    }

    /// Add a subcategory and persist
    pub fn add_subcategory(&mut self, category: Category, name: &str) -> LedgerResult<()> {
        self.update(|config| config.categories.add(category, name))?;
        info!(%category, subcategory = name.trim(), "Subcategory added");
        Ok(())
    }

    /// Remove a subcategory and persist, returning the removed name
    pub fn remove_subcategory(&mut self, category: Category, name: &str) -> LedgerResult<String> {
        let removed = self.update(|config| config.categories.remove(category, name))?;
        info!(%category, subcategory = %removed, "Subcategory removed");
        Ok(removed)
    }

    /// Apply `change` to a copy, write the copy, then adopt it
    ///
    /// If the change or the write fails, the in-memory config is untouched.
    fn update<T>(
        &mut self,
        change: impl FnOnce(&mut LedgerConfig) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut next = self.config.clone();
        let output = change(&mut next)?;
        write_config(&self.path, &next)?;
        self.config = next;
        Ok(output)
    }
}

fn write_config(path: &Path, config: &LedgerConfig) -> LedgerResult<()> {
    write_json_atomic(path, config)
        .map_err(|e| LedgerError::Config(format!("Failed to save config: {}", e)))?;
    debug!(path = %path.display(), "Saved config");
    Ok(())
}
