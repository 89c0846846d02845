//! Category CLI commands
//!
//! Implements CLI commands for managing the subcategory taxonomy.

use clap::Subcommand;

use crate::display::category::format_category_tree;
use crate::error::LedgerResult;
use crate::models::Category;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all subcategories (organized by category)
    List,

    /// Add a subcategory
    Add {
        /// Income or Expense
        category: Category,
        /// Subcategory name
        name: String,
    },

    /// Remove a subcategory
    ///
    /// Existing records keep the name; it just can't be chosen for new ones.
    Remove {
        /// Income or Expense
        category: Category,
        /// Subcategory name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &mut Storage, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_tree(storage.config.taxonomy()));
        }

        CategoryCommands::Add { category, name } => {
            storage.config.add_subcategory(category, &name)?;
            println!("Added {} subcategory: {}", category, name.trim());
        }

        CategoryCommands::Remove { category, name } => {
            let removed = storage.config.remove_subcategory(category, &name)?;
            println!("Removed {} subcategory: {}", category, removed);
        }
    }

    Ok(())
}
