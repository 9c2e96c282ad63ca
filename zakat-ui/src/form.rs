//! Terminal rendition of the calculator form.
//!
//! The form prompts for every asset field and then every investment field,
//! one line each, triggers the calculation and prints the result. Readers
//! and writers are generic so the same code drives stdin/stdout and
//! in-memory buffers.

use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use thiserror::Error;
use zakat_core::{
    AssetField, Category, FieldKey, FieldSet, InvestmentField, SessionError, ZakatSession,
};

use crate::utils::{format_amount, opt_amount_display};

/// Explanatory notes shown by `--about`.
pub const ABOUT_NOTES: [&str; 5] = [
    "Zakat is one of the Five Pillars of Islam.",
    "It's typically calculated as 2.5% of one's wealth above the nisab threshold.",
    "The nisab is approximately the value of 85 grams of gold or 595 grams of silver.",
    "Zakat is paid on various types of wealth, including cash, gold, silver, and investments.",
    "This calculator provides a basic estimation. For precise calculations, consult with an Islamic scholar.",
];

/// Error returned when a `--set` argument is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAssignmentError {
    #[error("expected CATEGORY.KEY=VALUE, got '{0}'")]
    Malformed(String),

    #[error(transparent)]
    UnknownField(#[from] SessionError),
}

/// One `category.key=value` edit given on the command line.
///
/// The category and key are checked when parsing; the value is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub category: Category,
    pub key: &'static str,
    pub value: String,
}

impl FieldAssignment {
    /// Applies this edit to `session`.
    pub fn apply(
        &self,
        session: &mut ZakatSession,
    ) -> Result<(), SessionError> {
        session.update(self.category.as_str(), self.key, self.value.as_str())
    }
}

impl FromStr for FieldAssignment {
    type Err = ParseAssignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseAssignmentError::Malformed(s.to_string());
        let (path, value) = s.split_once('=').ok_or_else(malformed)?;
        let (category, key) = path.trim().split_once('.').ok_or_else(malformed)?;

        let category = Category::parse(category)
            .ok_or_else(|| SessionError::UnknownCategory(category.to_string()))?;
        let unknown = || SessionError::UnknownField {
            category,
            key: key.to_string(),
        };
        let key = match category {
            Category::Assets => AssetField::parse(key).ok_or_else(unknown)?.key(),
            Category::Investments => InvestmentField::parse(key).ok_or_else(unknown)?.key(),
        };

        Ok(Self {
            category,
            key,
            value: value.to_string(),
        })
    }
}

impl fmt::Display for FieldAssignment {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}.{}={}", self.category, self.key, self.value)
    }
}

/// Where field values come from for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Values were given as flags; stdin is not read.
    Flags,
    /// Prompt on the terminal for every field.
    Prompt,
    /// Read one answer per line from piped stdin, without prompts.
    Piped,
}

impl InputMode {
    /// Picks the mode from `--interactive`, the number of fields given as
    /// flags, and whether stdin is a terminal.
    pub fn select(
        interactive: bool,
        supplied: usize,
        stdin_is_terminal: bool,
    ) -> Self {
        match (interactive, supplied, stdin_is_terminal) {
            (true, _, true) | (false, 0, true) => Self::Prompt,
            (true, _, false) | (false, 0, false) => Self::Piped,
            _ => Self::Flags,
        }
    }
}

/// Prompts for every field of `session`, assets first.
///
/// Each prompt shows the field's current value in brackets when it has one;
/// an empty line keeps it. Input ends early at end of file, leaving the
/// remaining fields as they were. Returns the number of lines read.
pub fn prompt_fields<R: BufRead, W: Write>(
    session: &mut ZakatSession,
    mut input: R,
    output: &mut W,
) -> io::Result<usize> {
    let mut lines_read = 0;

    for category in Category::ALL {
        writeln!(output, "{}", category.label())?;
        let edits = match category {
            Category::Assets => prompt_set(session.assets(), &mut input, output)?,
            Category::Investments => prompt_set(session.investments(), &mut input, output)?,
        };

        for (key, value) in &edits.answers {
            if let Err(error) = session.update(category.as_str(), key, value.as_str()) {
                // Keys come from the field set itself.
                tracing::error!(%error, "rejected prompted field");
            }
        }
        lines_read += edits.lines_read;

        if edits.reached_eof {
            break;
        }
        writeln!(output)?;
    }

    Ok(lines_read)
}

/// Answers collected for one field set.
struct PromptedEdits {
    answers: Vec<(&'static str, String)>,
    lines_read: usize,
    reached_eof: bool,
}

fn prompt_set<K: FieldKey, R: BufRead, W: Write>(
    fields: &FieldSet<K>,
    input: &mut R,
    output: &mut W,
) -> io::Result<PromptedEdits> {
    let mut edits = PromptedEdits {
        answers: Vec::new(),
        lines_read: 0,
        reached_eof: false,
    };

    for (key, current) in fields.iter() {
        if current.is_empty() {
            write!(output, "  {}: ", key.label())?;
        } else {
            write!(output, "  {} [{}]: ", key.label(), current)?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            edits.reached_eof = true;
            break;
        }
        edits.lines_read += 1;

        let answer = line.trim_end_matches(['\n', '\r']);
        if !answer.is_empty() {
            edits.answers.push((key.key(), answer.to_string()));
        }
    }

    Ok(edits)
}

/// Prints the last calculated result of `session`.
///
/// With `show_breakdown` the asset, investment and wealth totals are printed
/// above the zakat amount.
pub fn render_result<W: Write>(
    session: &ZakatSession,
    show_breakdown: bool,
    output: &mut W,
) -> io::Result<()> {
    if show_breakdown {
        if let Some(summary) = session.summary() {
            writeln!(
                output,
                "Total assets:      {:>14}",
                format_amount(summary.total_assets)
            )?;
            writeln!(
                output,
                "Total investments: {:>14}",
                format_amount(summary.total_investments)
            )?;
            writeln!(
                output,
                "Total wealth:      {:>14}",
                format_amount(summary.total_wealth)
            )?;
        }
    }
    writeln!(
        output,
        "Your Zakat Amount: {:>14}",
        opt_amount_display(session.result())
    )
}

/// Prints [`ABOUT_NOTES`] as a bulleted list.
pub fn render_about<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "About Zakat:")?;
    for note in ABOUT_NOTES {
        writeln!(output, "  - {note}")?;
    }
    Ok(())
}
