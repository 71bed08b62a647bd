//! Command-line interface for vidcat.
//!
//! Without a subcommand the interactive menu runs over the built-in
//! catalog. Subcommands print reports, list the catalog, or show the
//! resolved configuration.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config;
use crate::domain::Category;
use crate::library::Catalog;
use crate::reports::{self, Report, ReportKind};

pub mod menu;

pub use menu::Shell;

/// vidcat - Reports over a small catalog of movies and series
#[derive(Parser, Debug)]
#[command(name = "vidcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Print one or more reports (all four if none given)
    Report {
        /// Reports to run: most-viewed, average-runtime, cast-overlap, long-running
        kinds: Vec<ReportKind>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog entries
    List {
        /// Only show entries of this kind
        #[arg(short, long, value_enum)]
        kind: Option<KindFilter>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Entry kind for CLI filters (maps to `Category`)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindFilter {
    /// Generic video
    Video,

    /// Series
    Series,

    /// Movie
    Movie,
}

impl From<KindFilter> for Category {
    fn from(k: KindFilter) -> Self {
        match k {
            KindFilter::Video => Category::Video,
            KindFilter::Series => Category::Series,
            KindFilter::Movie => Category::Movie,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => run_menu(),
            Commands::Report { kinds, json } => print_reports(&kinds, json),
            Commands::List { kind } => list_catalog(kind),
            Commands::Config => show_config(),
        }
    }
}

/// Run the interactive menu on stdin/stdout
fn run_menu() -> Result<()> {
    let cfg = config::config()?;
    let catalog = Catalog::sample();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&catalog, &cfg.reports).run(stdin.lock(), stdout.lock())
}

/// Print the selected reports
fn print_reports(kinds: &[ReportKind], json: bool) -> Result<()> {
    let cfg = config::config()?;
    let catalog = Catalog::sample();

    let results: Vec<Report> = if kinds.is_empty() {
        reports::run_all(&catalog, &cfg.reports)
    } else {
        kinds
            .iter()
            .map(|&kind| reports::run(kind, &catalog, &cfg.reports))
            .collect()
    };

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to serialize reports")?;
        println!("{}", out);
    } else {
        for report in &results {
            println!("{}", report);
        }
    }

    Ok(())
}

/// List catalog entries as info tuples
fn list_catalog(kind: Option<KindFilter>) -> Result<()> {
    let catalog = Catalog::sample();

    let items = match kind {
        Some(kind) => catalog.filter_by_kind(kind.into()),
        None => catalog.iter().collect(),
    };

    if items.is_empty() {
        println!("No entries found");
        return Ok(());
    }

    println!("{:<8} {}", "KIND", "INFO");
    println!("{}", "-".repeat(80));

    for video in &items {
        println!("{:<8} {}", video.kind.category().to_string(), video.info());
    }

    println!("\nTotal: {} of {} entries", items.len(), catalog.len());

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Reports:");
    println!("  Long-running series: more than {} seasons", cfg.reports.min_seasons);
    println!("  Average precision:   {} decimals", cfg.reports.precision);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_subcommand() {
        let cli = Cli::try_parse_from(["vidcat"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_report_kinds() {
        let cli = Cli::try_parse_from(["vidcat", "report", "cast-overlap", "runtime", "--json"])
            .unwrap();

        match cli.command {
            Some(Commands::Report { kinds, json }) => {
                assert_eq!(kinds, vec![ReportKind::CastOverlap, ReportKind::AverageRuntime]);
                assert!(json);
            }
            other => panic!("Expected report command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_report() {
        assert!(Cli::try_parse_from(["vidcat", "report", "ratings"]).is_err());
    }

    #[test]
    fn test_kind_filter_maps_to_category() {
        assert_eq!(Category::from(KindFilter::Video), Category::Video);
        assert_eq!(Category::from(KindFilter::Series), Category::Series);
        assert_eq!(Category::from(KindFilter::Movie), Category::Movie);
    }

    #[test]
    fn test_parse_list_kind() {
        let cli = Cli::try_parse_from(["vidcat", "list", "--kind", "series"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                kind: Some(KindFilter::Series)
            })
        ));
    }
}
