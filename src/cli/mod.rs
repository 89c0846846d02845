//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod currency;
pub mod export;
pub mod menu;
pub mod prompt;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use menu::run_menu;
pub use prompt::Prompter;
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{handle_add_command, AddArgs};
