//! Most-viewed video.

use std::fmt;

use serde::Serialize;

use crate::domain::Video;

/// Winner of the view count scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostViewed {
    /// Name of the winning video, `None` when no video has views above zero
    pub name: Option<String>,

    /// Views of the winner (0 without a winner)
    pub views: i64,
}

/// Find the video with the most views.
///
/// The baseline starts at zero and only a strictly greater count replaces
/// it, so ties keep the earliest video and videos with zero or negative
/// views never win.
pub fn most_viewed(videos: &[Video]) -> MostViewed {
    let mut best: Option<&Video> = None;
    let mut max_views = 0;

    for video in videos {
        if video.views > max_views {
            max_views = video.views;
            best = Some(video);
        }
    }

    MostViewed {
        name: best.map(|v| v.name.clone()),
        views: max_views,
    }
}

impl fmt::Display for MostViewed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(
                f,
                "The most viewed video is \"{}\" with a total of {} views.",
                name, self.views
            ),
            None => writeln!(f, "No video has recorded views."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_maximum() {
        let videos = vec![
            Video::movie("A", 10, ["x"], 90),
            Video::series("B", 30, ["y"], 2),
            Video::plain("C", 20, ["z"]),
        ];

        let result = most_viewed(&videos);
        assert_eq!(result.name.as_deref(), Some("B"));
        assert_eq!(result.views, 30);
    }

    #[test]
    fn test_ties_keep_earliest() {
        let videos = vec![
            Video::movie("First", 50, ["x"], 90),
            Video::movie("Second", 50, ["y"], 90),
        ];

        assert_eq!(most_viewed(&videos).name.as_deref(), Some("First"));
    }

    #[test]
    fn test_no_positive_views_has_no_winner() {
        let videos = vec![
            Video::movie("Zero", 0, ["x"], 90),
            Video::movie("Negative", -5, ["y"], 90),
        ];

        let result = most_viewed(&videos);
        assert_eq!(result.name, None);
        assert_eq!(result.views, 0);
        assert_eq!(result.to_string(), "No video has recorded views.\n");

        assert_eq!(most_viewed(&[]).name, None);
    }

    #[test]
    fn test_display() {
        let result = MostViewed {
            name: Some("Heat".to_string()),
            views: 42,
        };
        assert_eq!(
            result.to_string(),
            "The most viewed video is \"Heat\" with a total of 42 views.\n"
        );
    }
}
