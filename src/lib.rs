//! vidcat - Aggregate reports over a small video catalog
//!
//! Models a fixed catalog of movies and series and answers four
//! read-only queries over it, either from an interactive menu or from
//! the command line.
//!
//! # Modules
//!
//! - `domain`: Video entities (base fields plus series/movie payload)
//! - `library`: The read-only catalog and its built-in sample data
//! - `reports`: Most viewed, average runtime, cast overlap, long-running series
//! - `config`: Report tunables from environment, config file and defaults
//! - `cli`: Command-line interface and interactive menu
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu
//! vidcat
//!
//! # Single report, as JSON
//! vidcat report cast-overlap --json
//!
//! # List the movies in the catalog
//! vidcat list --kind movie
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;
pub mod reports;

// Re-export main types at crate root for convenience
pub use config::ReportSettings;
pub use domain::{Video, VideoKind};
pub use library::Catalog;
pub use reports::{Report, ReportKind};
