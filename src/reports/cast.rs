//! Actors who appear in both movies and series.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::{write_notices, Notice};
use crate::domain::{Video, VideoKind};

/// Intersection of the movie and series cast pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastOverlap {
    /// Shared actors, in order of first appearance among the movies
    pub actors: Vec<String>,

    /// Videos that are neither movies nor series
    pub notices: Vec<Notice>,
}

/// Find the actors that appear in at least one movie and one series.
pub fn cast_overlap(videos: &[Video]) -> CastOverlap {
    let mut movie_pool: Vec<&str> = Vec::new();
    let mut series_pool: HashSet<&str> = HashSet::new();
    let mut notices = Vec::new();

    for video in videos {
        match video.kind {
            VideoKind::Movie { .. } => movie_pool.extend(video.cast.iter().map(String::as_str)),
            VideoKind::Series { .. } => series_pool.extend(video.cast.iter().map(String::as_str)),
            VideoKind::Plain => notices.push(Notice::unrecognized(video)),
        }
    }

    let mut seen = HashSet::new();
    let actors = movie_pool
        .into_iter()
        .filter(|actor| seen.insert(*actor))
        .filter(|actor| series_pool.contains(actor))
        .map(str::to_string)
        .collect();

    CastOverlap { actors, notices }
}

impl fmt::Display for CastOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_notices(f, &self.notices)?;
        if self.actors.is_empty() {
            writeln!(f, "No actors appear in both movies and series.")
        } else {
            writeln!(f, "Actors appearing in both movies and series:")?;
            writeln!(f, "{}", self.actors.join(", "))
        }
    }
}
