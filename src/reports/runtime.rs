//! Average movie runtime.

use std::fmt;

use serde::Serialize;

use super::{write_notices, Field, Notice, ReportError};
use crate::config::MAX_PRECISION;
use crate::domain::Video;

/// Average runtime over every video that has one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageRuntime {
    /// Rounded average in minutes, `None` when no video has a runtime
    pub average_minutes: Option<f64>,

    /// Number of videos that contributed a runtime
    pub contributors: u32,

    /// Decimal places the average was rounded to
    pub precision: usize,

    /// Videos skipped for lacking a runtime
    pub notices: Vec<Notice>,
}

/// Average the runtime of every movie, rounded to `precision` decimals
/// (at most [`MAX_PRECISION`]). Exact ties round to even.
pub fn average_runtime(videos: &[Video], precision: usize) -> AverageRuntime {
    let precision = precision.min(MAX_PRECISION);
    let mut total: u64 = 0;
    let mut contributors: u32 = 0;
    let mut notices = Vec::new();

    for video in videos {
        match video.runtime_minutes() {
            Some(minutes) => {
                total += u64::from(minutes);
                contributors += 1;
            }
            None => notices.push(Notice::missing(video, Field::Runtime)),
        }
    }

    let average_minutes = match mean(total, contributors) {
        Ok(avg) => Some(round_to(avg, precision)),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    };

    AverageRuntime {
        average_minutes,
        contributors,
        precision,
        notices,
    }
}

fn mean(total: u64, count: u32) -> Result<f64, ReportError> {
    if count == 0 {
        return Err(ReportError::NoData {
            what: "average runtime",
        });
    }
    Ok(total as f64 / f64::from(count))
}

fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round_ties_even() / factor
}

impl fmt::Display for AverageRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_notices(f, &self.notices)?;
        match self.average_minutes {
            Some(avg) => writeln!(
                f,
                "The average movie runtime is {:.*} minutes.",
                self.precision, avg
            ),
            None => writeln!(f, "No movie runtime data available."),
        }
    }
}
