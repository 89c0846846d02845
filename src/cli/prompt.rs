//! Line-based prompting for the interactive menu
//!
//! Every `prompt_*` helper keeps asking until the answer parses. Only
//! recoverable errors (bad amount, bad date, unknown name) trigger another
//! round; anything else is returned to the caller.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use chrono::NaiveDate;
use crossterm::style::Color;

use crate::display::report::paint;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_amount, parse_date, Category, Money};
use crate::services::today;

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    color: bool,
}

/// A prompter on the process's stdin and stdout
pub fn stdio(color: bool) -> Prompter<StdinLock<'static>, Stdout> {
    Prompter::new(io::stdin().lock(), io::stdout(), color)
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Write text followed by a newline
    pub fn say(&mut self, text: &str) -> LedgerResult<()> {
        writeln!(self.output, "{}", text).map_err(|e| LedgerError::Io(e.to_string()))
    }

    /// Write text as-is
    pub fn write(&mut self, text: &str) -> LedgerResult<()> {
        write!(self.output, "{}", text).map_err(|e| LedgerError::Io(e.to_string()))
    }

    pub fn heading(&mut self, text: &str) -> LedgerResult<()> {
        let text = paint(format!("\n{}", text), Color::Cyan, self.color);
        self.say(&text)
    }

    pub fn success(&mut self, text: &str) -> LedgerResult<()> {
        let text = paint(text.to_string(), Color::Green, self.color);
        self.say(&text)
    }

    pub fn error(&mut self, text: &str) -> LedgerResult<()> {
        let text = paint(text.to_string(), Color::Red, self.color);
        self.say(&text)
    }

    /// Ask once and return the trimmed answer
    ///
    /// End of input is `LedgerError::Cancelled`.
    pub fn prompt_string(&mut self, prompt: &str) -> LedgerResult<String> {
        let prompt = paint(prompt.to_string(), Color::Yellow, self.color);
        write!(self.output, "{}", prompt).map_err(|e| LedgerError::Io(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| LedgerError::Io(e.to_string()))?;

        let mut input = String::new();
        let read = self
            .input
            .read_line(&mut input)
            .map_err(|e| LedgerError::Io(e.to_string()))?;
        if read == 0 {
            return Err(LedgerError::Cancelled);
        }

        Ok(input.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    pub fn prompt_with<T, F>(&mut self, prompt: &str, parse: F) -> LedgerResult<T>
    where
        F: Fn(&str) -> LedgerResult<T>,
    {
        loop {
            let answer = self.prompt_string(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => self.error(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask for a `dd-mm-yyyy` date; with `allow_default`, an empty answer means today
    pub fn prompt_date(&mut self, prompt: &str, allow_default: bool) -> LedgerResult<NaiveDate> {
        self.prompt_with(prompt, |answer| {
            if allow_default && answer.is_empty() {
                Ok(today())
            } else {
                parse_date(answer)
            }
        })
    }

    pub fn prompt_amount(&mut self, prompt: &str) -> LedgerResult<Money> {
        self.prompt_with(prompt, parse_amount)
    }

    /// Ask for a number in `1..=count`; returns the zero-based index
    pub fn prompt_choice(&mut self, prompt: &str, count: usize) -> LedgerResult<usize> {
        self.prompt_with(prompt, |answer| match answer.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
            _ => Err(LedgerError::Validation(format!(
                "Invalid choice. Please enter a number from 1 to {}",
                count
            ))),
        })
    }

    /// Ask for Income or Expense by number
    pub fn prompt_category(&mut self) -> LedgerResult<Category> {
        self.heading("Select Transaction Type:")?;
        for (i, category) in Category::all().iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, category))?;
        }
        let index = self.prompt_choice("Enter choice (1-2): ", Category::all().len())?;
        Ok(Category::all()[index])
    }
}
