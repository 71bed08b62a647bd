//! Catalog of videos.
//!
//! The catalog is built once and then only read: there is no way to add,
//! remove or reorder entries after construction.

use std::ops::Deref;

use crate::domain::{Category, Video};

/// Fixed, ordered collection of videos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Video>,
}

impl Catalog {
    /// Build a catalog from videos, keeping their order.
    ///
    /// Entries with suspicious values are logged and kept.
    pub fn new(items: Vec<Video>) -> Self {
        for video in &items {
            if let Err(e) = video.validate() {
                tracing::warn!(video = %video.name, "Suspicious catalog entry: {}", e);
            }
        }

        tracing::debug!(count = items.len(), "Catalog built");
        Self { items }
    }

    /// The built-in catalog of two series and three movies
    pub fn sample() -> Self {
        let peaky_cast = ["Cillian Murphy", "Paul Anderson", "Helen McCrory"];
        let umbrella_cast = [
            "Tom Hopper",
            "Emmy Raver-Lampman",
            "Ellen Page",
            "David Castañeda",
        ];
        let inception_cast = ["Leonardo DiCaprio", "Ellen Page", "Joseph Gordon-Levitt"];
        let batman_cast = ["Christian Bale", "Cillian Murphy", "Michael Caine"];
        let inmortales_cast = ["Mirtha Legrand", "Leonardo DiCaprio", "Elizabeth Segunda"];

        Self::new(vec![
            Video::series("Peaky Blinders", 1_234_567, peaky_cast, 5),
            Video::series("The Umbrella Academy", 2_434_908, umbrella_cast, 2),
            Video::movie("Inception", 4_760_183, inception_cast, 148),
            Video::movie("Batman Begins", 17_319_533, batman_cast, 140),
            Video::movie("Inmortales", 35, inmortales_cast, 30),
        ])
    }

    /// Find a video by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&Video> {
        self.items.iter().find(|v| v.name == name)
    }

    /// Filter videos by category
    pub fn filter_by_kind(&self, category: Category) -> Vec<&Video> {
        self.items
            .iter()
            .filter(|v| v.kind.category() == category)
            .collect()
    }
}

impl Deref for Catalog {
    type Target = [Video];

    fn deref(&self) -> &[Video] {
        &self.items
    }
}

impl FromIterator<Video> for Catalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
