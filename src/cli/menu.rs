//! Interactive menu
//!
//! The numbered-menu front end over the same services the one-shot commands
//! use. Each prompt loops until it gets a valid answer; end of input leaves
//! the menu quietly.

use std::io::{BufRead, Write};
use std::path::Path;

use super::export::{export_to_path, ExportFormat};
use super::prompt::Prompter;
use crate::config::Currency;
use crate::display::{format_category_tree, format_numbered_list, format_range_report};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

const MAIN_MENU: &[&str] = &[
    "Add a new transaction",
    "View transactions & summary",
    "Manage categories",
    "Change currency",
    "Export data",
    "Exit",
];

const CATEGORY_MENU: &[&str] = &[
    "View categories",
    "Add category",
    "Remove category",
    "Back to main menu",
];

const EXPORT_MENU: &[(&str, Option<ExportFormat>)] = &[
    ("Export to CSV", Some(ExportFormat::Csv)),
    ("Export to JSON", Some(ExportFormat::Json)),
    ("Export to YAML", Some(ExportFormat::Yaml)),
    ("Back to main menu", None),
];

/// Run the menu until the user exits or input ends
///
/// Exports are written into `export_dir`.
pub fn run_menu<R: BufRead, W: Write>(
    storage: &mut Storage,
    prompter: &mut Prompter<R, W>,
    export_dir: &Path,
) -> LedgerResult<()> {
    loop {
        show_menu(prompter, "Personal Finance Manager", MAIN_MENU)?;
        let choice = match prompter.prompt_choice("Enter your choice (1-6): ", MAIN_MENU.len()) {
            Ok(choice) => choice,
            Err(LedgerError::Cancelled) => return Ok(()),
            Err(e) => return Err(e),
        };

        let result = match choice {
            0 => add_transaction(storage, prompter),
            1 => view_summary(storage, prompter),
            2 => manage_categories(storage, prompter),
            3 => change_currency(storage, prompter),
            4 => export_data(storage, prompter, export_dir),
            _ => {
                prompter.success("Thank you for using Personal Finance Manager!")?;
                return Ok(());
            }
        };

        match result {
            Ok(()) => {}
            Err(LedgerError::Cancelled) => return Ok(()),
            Err(e) => prompter.error(&e.to_string())?,
        }
    }
}

fn show_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    title: &str,
    items: &[&str],
) -> LedgerResult<()> {
    prompter.heading(title)?;
    for (i, item) in items.iter().enumerate() {
        prompter.say(&format!("{}. {}", i + 1, item))?;
    }
    Ok(())
}

/// Pick one of the configured subcategories for `category` by number
fn choose_subcategory<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
    category: Category,
    prompt: &str,
) -> LedgerResult<Option<String>> {
    let subcategories = storage.config.taxonomy().subcategories(category).to_vec();
    if subcategories.is_empty() {
        prompter.error(&format!("No {} subcategories configured.", category))?;
        return Ok(None);
    }

    prompter.heading(&format!("Available {} Categories:", category))?;
    prompter.write(&format_numbered_list(&subcategories))?;
    let index = prompter.prompt_choice(prompt, subcategories.len())?;
    Ok(subcategories.into_iter().nth(index))
}

fn add_transaction<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<()> {
    let date = prompter.prompt_date(
        "Enter the date of the transaction (dd-mm-yyyy) or press enter for today's date: ",
        true,
    )?;
    let amount = prompter.prompt_amount("Enter the amount: ")?;
    let category = prompter.prompt_category()?;
    let Some(subcategory) =
        choose_subcategory(storage, prompter, category, "Enter category number: ")?
    else {
        return Ok(());
    };
    let description = prompter.prompt_string("Enter a description (optional): ")?;

    TransactionService::new(storage).create(CreateTransactionInput {
        date: Some(date),
        amount,
        category,
        subcategory,
        description: Some(description),
    })?;

    prompter.success("✓ Entry added successfully")
}

fn view_summary<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<()> {
    let start = prompter.prompt_date("Enter the start date (dd-mm-yyyy): ", false)?;
    let end = prompter.prompt_date("Enter the end date (dd-mm-yyyy): ", false)?;

    let report = TransactionService::new(storage).report(start, end)?;
    let text = format_range_report(&report, storage.config.currency(), prompter.color());
    prompter.write(&text)
}

fn manage_categories<R: BufRead, W: Write>(
    storage: &mut Storage,
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<()> {
    loop {
        show_menu(prompter, "Category Management", CATEGORY_MENU)?;
        let choice = prompter.prompt_choice("Enter your choice (1-4): ", CATEGORY_MENU.len())?;

        let result = match choice {
            0 => {
                prompter.heading("Current Categories:")?;
                prompter.write(&format_category_tree(storage.config.taxonomy()))
            }
            1 => {
                let category = prompter.prompt_category()?;
                let name = prompter.prompt_string("Enter new subcategory name: ")?;
                storage
                    .config
                    .add_subcategory(category, &name)
                    .and_then(|()| prompter.success("Category added successfully!"))
            }
            2 => {
                let category = prompter.prompt_category()?;
                match choose_subcategory(storage, prompter, category, "Enter number to remove: ")? {
                    Some(name) => storage
                        .config
                        .remove_subcategory(category, &name)
                        .and_then(|removed| {
                            prompter.success(&format!("Removed category: {}", removed))
                        }),
                    None => Ok(()),
                }
            }
            _ => return Ok(()),
        };

        match result {
            Err(e) if e.is_recoverable() => prompter.error(&e.to_string())?,
            other => other?,
        }
    }
}

fn change_currency<R: BufRead, W: Write>(
    storage: &mut Storage,
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<()> {
    let presets = Currency::presets();

    prompter.heading("Available Currencies:")?;
    for (i, currency) in presets.iter().enumerate() {
        prompter.say(&format!("{}. {} ({})", i + 1, currency.symbol, currency.code))?;
    }

    let prompt = format!("Select currency (1-{}): ", presets.len());
    let index = prompter.prompt_choice(&prompt, presets.len())?;
    if let Some(currency) = presets.into_iter().nth(index) {
        storage.config.set_currency(currency)?;
        prompter.success("Currency updated successfully!")?;
    }
    Ok(())
}

fn export_data<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
    export_dir: &Path,
) -> LedgerResult<()> {
    let labels: Vec<&str> = EXPORT_MENU.iter().map(|(label, _)| *label).collect();
    show_menu(prompter, "Export Options:", &labels)?;

    let choice = prompter.prompt_choice("Enter your choice (1-4): ", EXPORT_MENU.len())?;
    let Some(format) = EXPORT_MENU[choice].1 else {
        return Ok(());
    };

    let path = export_dir.join(format.default_file_name());
    export_to_path(storage, format, &path, true)?;
    prompter.success(&format!("Data exported successfully to {}!", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::display::EMPTY_RANGE_NOTICE;
    use crate::models::Money;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("home"));
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    /// Run the menu on scripted input and return what it printed
    fn run(storage: &mut Storage, export_dir: &Path, input: &str) -> String {
        let mut output = Vec::new();
        {
            let mut prompter =
                Prompter::new(Cursor::new(input.as_bytes().to_vec()), &mut output, false);
            run_menu(storage, &mut prompter, export_dir).unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_then_view() {
        let (temp_dir, mut storage) = create_test_storage();
        let input = "1\n10-08-2025\n1000\n1\n1\nPaycheck\n\
                     1\n11-08-2025\nabc\n200\n2\n1\n\n\
                     2\n01-08-2025\n31-08-2025\n6\n";

        let output = run(&mut storage, temp_dir.path(), input);

        assert_eq!(output.matches("✓ Entry added successfully").count(), 2);
        assert!(output.contains("Invalid amount"));
        assert!(output.contains("Paycheck"));
        assert!(output.contains("$1,000.00"));
        assert!(output.contains("$800.00"));
        assert!(output.contains("Thank you for using Personal Finance Manager!"));

        let records = storage.transactions.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subcategory, "Salary");
        assert_eq!(records[1].subcategory, "Food");
        assert_eq!(records[1].amount, Money::from_cents(20000));
        assert_eq!(records[1].description, "");
    }

    #[test]
    fn test_bad_dates_reprompt() {
        let (temp_dir, mut storage) = create_test_storage();
        let input = "1\n2025-08-10\n10-08-2025\n50\n2\n3\nRent\n6\n";

        let output = run(&mut storage, temp_dir.path(), input);

        assert!(output.contains("Invalid date"));
        let records = storage.transactions.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subcategory, "Housing");
    }

    #[test]
    fn test_empty_range() {
        let (temp_dir, mut storage) = create_test_storage();
        let output = run(
            &mut storage,
            temp_dir.path(),
            "2\n01-01-2020\n31-01-2020\n6\n",
        );
        assert!(output.contains(EMPTY_RANGE_NOTICE));
    }

    #[test]
    fn test_manage_categories() {
        let (temp_dir, mut storage) = create_test_storage();
        let input = "3\n2\n2\nGroceries\n\
                     2\n2\nGroceries\n\
                     3\n1\n4\n\
                     1\n\
                     4\n6\n";

        let output = run(&mut storage, temp_dir.path(), input);

        assert!(output.contains("Category added successfully!"));
        assert!(output.contains("already exists"));
        assert!(output.contains("Removed category: Other Income"));
        assert!(output.contains("└── Groceries"));

        let taxonomy = storage.config.taxonomy();
        assert!(taxonomy.contains(Category::Expense, "Groceries"));
        assert!(!taxonomy.contains(Category::Income, "Other Income"));
    }

    #[test]
    fn test_change_currency() {
        let (temp_dir, mut storage) = create_test_storage();
        let output = run(&mut storage, temp_dir.path(), "4\n9\n2\n6\n");

        assert!(output.contains("1. $ (USD)"));
        assert!(output.contains("Currency updated successfully!"));
        assert_eq!(storage.config.currency().code, "EUR");
    }

    #[test]
    fn test_export() {
        let (temp_dir, mut storage) = create_test_storage();
        let output = run(&mut storage, temp_dir.path(), "5\n2\n6\n");

        assert!(output.contains("Data exported successfully"));
        assert!(temp_dir.path().join("finance_export.json").exists());
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (temp_dir, mut storage) = create_test_storage();
        let output = run(&mut storage, temp_dir.path(), "7\nx\n6\n");
        assert_eq!(output.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn test_end_of_input_leaves_menu() {
        let (temp_dir, mut storage) = create_test_storage();
        run(&mut storage, temp_dir.path(), "");
        run(&mut storage, temp_dir.path(), "1\n10-08-2025\n");
        assert!(storage.transactions.read_all().unwrap().is_empty());
    }
}
