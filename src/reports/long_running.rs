//! Series with more seasons than a threshold.

use std::fmt;

use serde::Serialize;

use super::{write_notices, Field, Notice};
use crate::domain::Video;

/// Series whose season count exceeds `min_seasons`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongRunningSeries {
    /// Threshold the season count must exceed
    pub min_seasons: u32,

    /// Matching series, in catalog order
    pub names: Vec<String>,

    /// Videos skipped for lacking a season count
    pub notices: Vec<Notice>,
}

/// Collect every series with strictly more than `min_seasons` seasons.
pub fn long_running_series(videos: &[Video], min_seasons: u32) -> LongRunningSeries {
    let mut names = Vec::new();
    let mut notices = Vec::new();

    for video in videos {
        match video.seasons() {
            Some(seasons) if seasons > min_seasons => names.push(video.name.clone()),
            Some(_) => {}
            None => notices.push(Notice::missing(video, Field::Seasons)),
        }
    }

    LongRunningSeries {
        min_seasons,
        names,
        notices,
    }
}

impl fmt::Display for LongRunningSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_notices(f, &self.notices)?;
        if self.names.is_empty() {
            writeln!(
                f,
                "No series with more than {} seasons were found.",
                self.min_seasons
            )
        } else {
            writeln!(f, "Series with more than {} seasons:", self.min_seasons)?;
            writeln!(f, "{}", self.names.join(", "))
        }
    }
}
