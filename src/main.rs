use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use finance_ledger::cli::{
    handle_add_command, handle_category_command, handle_currency_command, handle_export_command,
    handle_report_command, prompt, run_menu, AddArgs, CategoryCommands, CurrencyCommands,
    ExportArgs, ReportArgs,
};
use finance_ledger::config::paths::{LedgerPaths, HOME_ENV};
use finance_ledger::display::{colors_enabled, format_currency};
use finance_ledger::models::Category;
use finance_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal personal finance ledger",
    long_about = "Records income and expenses in a local CSV file and summarizes \
                  them by category and subcategory over any date range. Run \
                  without a command for the interactive menu."
)]
struct Cli {
    /// Directory holding finance_data.csv and finance_config.json
    #[arg(long, global = true, env = HOME_ENV)]
    home: Option<PathBuf>,

    /// Log level for diagnostics on stderr (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config and the transaction store
    Init,

    /// Record a transaction
    Add(AddArgs),

    /// Show transactions and summaries for a date range
    Report(ReportArgs),

    /// Subcategory management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Currency commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Export all data
    Export(ExportArgs),

    /// Launch the interactive menu
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = LedgerPaths::resolve(cli.home)?;
    debug!(base_dir = %paths.base_dir().display(), "Resolved ledger paths");
    let mut storage = Storage::open(paths)?;
    let color = colors_enabled();

    match cli.command {
        Some(Commands::Init) => {
            let paths = storage.paths();
            println!("Finance ledger initialized at: {}", paths.base_dir().display());
            println!("  Data file:   {}", paths.data_file().display());
            println!("  Config file: {}", paths.config_file().display());
            println!();
            println!("Run 'ledger category list' to see the default categories.");
        }
        Some(Commands::Add(args)) => handle_add_command(&storage, args)?,
        Some(Commands::Report(args)) => handle_report_command(&storage, args, color)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut storage, cmd)?,
        Some(Commands::Currency(cmd)) => handle_currency_command(&mut storage, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Config) => {
            let paths = storage.paths();
            let taxonomy = storage.config.taxonomy();
            println!("Finance Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Config file:    {}", paths.config_file().display());
            println!();
            println!("Settings:");
            println!("  Currency: {}", format_currency(storage.config.currency()));
            println!(
                "  Income subcategories:  {}",
                taxonomy.subcategories(Category::Income).len()
            );
            println!(
                "  Expense subcategories: {}",
                taxonomy.subcategories(Category::Expense).len()
            );
        }
        Some(Commands::Menu) | None => {
            let mut prompter = prompt::stdio(color);
            run_menu(&mut storage, &mut prompter, Path::new("."))?;
        }
    }

    Ok(())
}

/// Send `tracing` output to stderr; `RUST_LOG` wins over `--log-level`
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "finance_ledger={},{}={}",
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
