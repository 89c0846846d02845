//! Transaction CLI commands
//!
//! Implements the one-shot `add` command.

use clap::Args;

use crate::display::transaction::format_transaction_line;
use crate::error::LedgerResult;
use crate::models::{parse_amount, parse_date, Category};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Arguments for adding a transaction
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, a positive number (e.g., "45.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Income or Expense
    #[arg(short, long)]
    pub category: Category,
    /// Subcategory name (see `ledger category list`)
    #[arg(short, long)]
    pub subcategory: String,
    /// Transaction date (dd-mm-yyyy), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Optional description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Handle the add command
pub fn handle_add_command(storage: &Storage, args: AddArgs) -> LedgerResult<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let amount = parse_amount(&args.amount)?;

    let record = TransactionService::new(storage).create(CreateTransactionInput {
        date,
        amount,
        category: args.category,
        subcategory: args.subcategory,
        description: args.description,
    })?;

    println!(
        "✓ Entry added successfully: {}",
        format_transaction_line(&record, storage.config.currency())
    );
    Ok(())
}
