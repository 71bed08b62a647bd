//! Interactive menu over the catalog.
//!
//! Shows six choices, runs the selected report(s) and asks whether to
//! continue. Invalid input re-prompts without touching any state; end of
//! input ends the session like choosing "quit".

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::ReportSettings;
use crate::library::Catalog;
use crate::reports::{self, ReportKind};

const MENU: &str = "
Select an option:
Option 1: Most viewed video
Option 2: Average movie runtime
Option 3: Actors in both movies and series
Option 4: Long-running series
Option 5: All four reports
Option 6: Quit
";

const FAREWELL: &str = "Session finished.\nSee you soon!\n";

/// A valid menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Report(ReportKind),
    All,
    Quit,
}

/// Why a menu selection was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Selection is not a number: {0:?}")]
    NotANumber(String),

    #[error("Option {0} is not available")]
    OutOfRange(i64),
}

impl FromStr for MenuChoice {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number: i64 = s
            .parse()
            .map_err(|_| SelectionError::NotANumber(s.to_string()))?;

        match number {
            1 => Ok(MenuChoice::Report(ReportKind::MostViewed)),
            2 => Ok(MenuChoice::Report(ReportKind::AverageRuntime)),
            3 => Ok(MenuChoice::Report(ReportKind::CastOverlap)),
            4 => Ok(MenuChoice::Report(ReportKind::LongRunning)),
            5 => Ok(MenuChoice::All),
            6 => Ok(MenuChoice::Quit),
            other => Err(SelectionError::OutOfRange(other)),
        }
    }
}

/// Answer to the "continue?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Parse a yes/no answer, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "si" | "sí" => Some(Answer::Yes),
            "no" | "n" => Some(Answer::No),
            _ => None,
        }
    }
}

/// Menu loop bound to a catalog and report settings
pub struct Shell<'a> {
    catalog: &'a Catalog,
    settings: &'a ReportSettings,
}

impl<'a> Shell<'a> {
    pub fn new(catalog: &'a Catalog, settings: &'a ReportSettings) -> Self {
        Self { catalog, settings }
    }

    /// Run the menu until the user quits or input ends
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        tracing::debug!(videos = self.catalog.len(), "Starting interactive menu");

        loop {
            write!(output, "{}\nOption: ", MENU)?;
            output.flush().context("Failed to flush output")?;

            let Some(line) = read_line(&mut input)? else {
                return farewell(&mut output);
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    tracing::debug!("Rejected selection: {}", e);
                    writeln!(output, "Please choose an available option.")?;
                    continue;
                }
            };

            match choice {
                MenuChoice::Quit => return farewell(&mut output),
                MenuChoice::Report(kind) => {
                    let report = reports::run(kind, self.catalog, self.settings);
                    writeln!(output, "{}", report)?;
                }
                MenuChoice::All => {
                    for report in reports::run_all(self.catalog, self.settings) {
                        writeln!(output, "{}", report)?;
                    }
                }
            }

            if !self.ask_continue(&mut input, &mut output)? {
                return farewell(&mut output);
            }
        }
    }

    /// Ask until a yes/no answer arrives; end of input counts as "no"
    fn ask_continue<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<bool> {
        loop {
            write!(output, "Do you want to continue? Answer yes or no: ")?;
            output.flush().context("Failed to flush output")?;

            let Some(line) = read_line(input)? else {
                return Ok(false);
            };

            match Answer::parse(&line) {
                Some(Answer::Yes) => return Ok(true),
                Some(Answer::No) => return Ok(false),
                None => writeln!(output, "Please answer only yes or no.\n")?,
            }
        }
    }
}

/// Read one line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok((read > 0).then_some(line))
}

fn farewell<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{}", FAREWELL)?;
    output.flush().context("Failed to flush output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> String {
        let catalog = Catalog::sample();
        let settings = ReportSettings::default();
        let mut output = Vec::new();

        Shell::new(&catalog, &settings)
            .run(Cursor::new(input), &mut output)
            .unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(
            "1".parse::<MenuChoice>(),
            Ok(MenuChoice::Report(ReportKind::MostViewed))
        );
        assert_eq!(" 5\n".parse::<MenuChoice>(), Ok(MenuChoice::All));
        assert_eq!("6".parse::<MenuChoice>(), Ok(MenuChoice::Quit));
        assert_eq!(
            "abc".parse::<MenuChoice>(),
            Err(SelectionError::NotANumber("abc".to_string()))
        );
        assert_eq!("0".parse::<MenuChoice>(), Err(SelectionError::OutOfRange(0)));
        assert_eq!("7".parse::<MenuChoice>(), Err(SelectionError::OutOfRange(7)));
    }

    #[test]
    fn test_answer_parsing() {
        assert_eq!(Answer::parse("  YES \n"), Some(Answer::Yes));
        assert_eq!(Answer::parse("Si"), Some(Answer::Yes));
        assert_eq!(Answer::parse("no"), Some(Answer::No));
        assert_eq!(Answer::parse("N"), Some(Answer::No));
        assert_eq!(Answer::parse("maybe"), None);
        assert_eq!(Answer::parse(""), None);
    }

    #[test]
    fn test_quit_immediately() {
        let output = run_session("6\n");
        assert!(output.contains("Option 6: Quit"));
        assert!(output.contains("See you soon!"));
        assert!(!output.contains("Do you want to continue?"));
    }

    #[test]
    fn test_invalid_selection_reprompts() {
        let output = run_session("hello\n9\n6\n");
        assert_eq!(output.matches("Please choose an available option.").count(), 2);
        assert_eq!(output.matches("Select an option:").count(), 3);
        assert!(output.contains("See you soon!"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let output = run_session("");
        assert!(output.contains("See you soon!"));

        let output = run_session("1\n");
        assert!(output.contains("Batman Begins"));
        assert!(output.contains("See you soon!"));
    }
}
