//! Aggregate reports over the catalog.
//!
//! Each report is a read-only scan over a slice of videos that returns a
//! typed result. Results render as human-readable text through `Display`
//! and serialize to JSON for the `--json` output.
//!
//! Entities lacking a field a report needs are skipped and recorded as a
//! [`Notice`]; a scan is never aborted because of a single entity.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::config::ReportSettings;
use crate::domain::Video;

pub mod cast;
pub mod long_running;
pub mod most_viewed;
pub mod runtime;

pub use cast::{cast_overlap, CastOverlap};
pub use long_running::{long_running_series, LongRunningSeries};
pub use most_viewed::{most_viewed, MostViewed};
pub use runtime::{average_runtime, AverageRuntime};

/// The four available reports, in their fixed "run all" order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    MostViewed,
    AverageRuntime,
    CastOverlap,
    LongRunning,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::MostViewed,
        ReportKind::AverageRuntime,
        ReportKind::CastOverlap,
        ReportKind::LongRunning,
    ];
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::MostViewed => write!(f, "most-viewed"),
            ReportKind::AverageRuntime => write!(f, "average-runtime"),
            ReportKind::CastOverlap => write!(f, "cast-overlap"),
            ReportKind::LongRunning => write!(f, "long-running"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "most-viewed" | "views" => Ok(ReportKind::MostViewed),
            "average-runtime" | "runtime" => Ok(ReportKind::AverageRuntime),
            "cast-overlap" | "cast" => Ok(ReportKind::CastOverlap),
            "long-running" | "seasons" => Ok(ReportKind::LongRunning),
            _ => anyhow::bail!("Unknown report: {}", s),
        }
    }
}

/// A finished report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", rename_all = "kebab-case")]
pub enum Report {
    MostViewed(MostViewed),
    AverageRuntime(AverageRuntime),
    CastOverlap(CastOverlap),
    LongRunning(LongRunningSeries),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::MostViewed(_) => ReportKind::MostViewed,
            Report::AverageRuntime(_) => ReportKind::AverageRuntime,
            Report::CastOverlap(_) => ReportKind::CastOverlap,
            Report::LongRunning(_) => ReportKind::LongRunning,
        }
    }

    /// Entities skipped while building this report
    pub fn notices(&self) -> &[Notice] {
        match self {
            Report::MostViewed(_) => &[],
            Report::AverageRuntime(r) => &r.notices,
            Report::CastOverlap(r) => &r.notices,
            Report::LongRunning(r) => &r.notices,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::MostViewed(r) => fmt::Display::fmt(r, f),
            Report::AverageRuntime(r) => fmt::Display::fmt(r, f),
            Report::CastOverlap(r) => fmt::Display::fmt(r, f),
            Report::LongRunning(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// Run a single report
pub fn run(kind: ReportKind, videos: &[Video], settings: &ReportSettings) -> Report {
    tracing::info!(report = %kind, videos = videos.len(), "Running report");

    match kind {
        ReportKind::MostViewed => Report::MostViewed(most_viewed(videos)),
        ReportKind::AverageRuntime => {
            Report::AverageRuntime(average_runtime(videos, settings.precision))
        }
        ReportKind::CastOverlap => Report::CastOverlap(cast_overlap(videos)),
        ReportKind::LongRunning => {
            Report::LongRunning(long_running_series(videos, settings.min_seasons))
        }
    }
}

/// Run every report in the fixed order
pub fn run_all(videos: &[Video], settings: &ReportSettings) -> Vec<Report> {
    ReportKind::ALL
        .iter()
        .map(|&kind| run(kind, videos, settings))
        .collect()
}

/// Variant-specific field a report looked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Runtime,
    Seasons,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Runtime => write!(f, "runtime"),
            Field::Seasons => write!(f, "season count"),
        }
    }
}

/// Informational line for an entity a report skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    /// The entity has no value for the field
    MissingField { name: String, field: Field },

    /// The entity is neither a movie nor a series
    Unrecognized { name: String },
}

impl Notice {
    pub(crate) fn missing(video: &Video, field: Field) -> Self {
        tracing::debug!(video = %video.name, %field, "Skipping video without field");
        Notice::MissingField {
            name: video.name.clone(),
            field,
        }
    }

    pub(crate) fn unrecognized(video: &Video) -> Self {
        tracing::debug!(video = %video.name, "Skipping video of unknown category");
        Notice::Unrecognized {
            name: video.name.clone(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MissingField { name, field } => {
                write!(f, "No {} information for \"{}\".", field, name)
            }
            Notice::Unrecognized { name } => {
                write!(f, "\"{}\" is neither a movie nor a series.", name)
            }
        }
    }
}

/// Aggregates that cannot be computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("No data available for {what}")]
    NoData { what: &'static str },
}

/// Write notices one per line
fn write_notices(f: &mut fmt::Formatter<'_>, notices: &[Notice]) -> fmt::Result {
    for notice in notices {
        writeln!(f, "{}", notice)?;
    }
    Ok(())
}
