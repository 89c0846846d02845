//! Currency CLI commands

use clap::Subcommand;

use crate::config::{Currency, CurrencyPosition};
use crate::display::format_currency;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::Storage;

/// Currency subcommands
#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// Show the configured currency and the built-in choices
    Show,

    /// Change the display currency
    Set {
        /// Built-in currency code (USD, EUR, GBP, JPY, INR)
        #[arg(conflicts_with_all = ["symbol", "code"])]
        preset: Option<String>,

        /// Custom currency symbol
        #[arg(long, requires = "code")]
        symbol: Option<String>,

        /// Custom currency code
        #[arg(long, requires = "symbol")]
        code: Option<String>,

        /// Symbol placement: before or after the amount
        #[arg(long)]
        position: Option<CurrencyPosition>,
    },
}

/// Handle a currency command
pub fn handle_currency_command(storage: &mut Storage, cmd: CurrencyCommands) -> LedgerResult<()> {
    match cmd {
        CurrencyCommands::Show => {
            println!("Currency: {}", format_currency(storage.config.currency()));
            println!();
            println!("Built-in currencies:");
            for currency in Currency::presets() {
                println!("  {}  {}", currency.code, currency.symbol);
            }
        }

        CurrencyCommands::Set {
            preset,
            symbol,
            code,
            position,
        } => {
            let mut currency = resolve_currency(preset, symbol, code)?;
            if let Some(position) = position {
                currency.position = position;
            }

            storage.config.set_currency(currency)?;
            println!(
                "Currency updated: {}",
                format_currency(storage.config.currency())
            );
        }
    }

    Ok(())
}

fn resolve_currency(
    preset: Option<String>,
    symbol: Option<String>,
    code: Option<String>,
) -> LedgerResult<Currency> {
    match (preset, symbol, code) {
        (Some(preset), _, _) => Currency::preset(&preset).ok_or_else(|| LedgerError::NotFound {
            entity_type: "Currency",
            identifier: preset,
        }),
        (None, Some(symbol), Some(code)) => Ok(Currency::new(
            symbol.trim(),
            code.trim().to_uppercase(),
            CurrencyPosition::Before,
        )),
        _ => Err(LedgerError::Validation(
            "Give a currency code (USD, EUR, GBP, JPY, INR) or --symbol with --code".into(),
        )),
    }
}
