//! Video entities: the shared base record plus the series/movie variants.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Kind of catalog entry, carrying the fields only that kind has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoKind {
    /// Generic video with no variant-specific data
    Plain,

    /// Series with a number of seasons
    Series { seasons: u32 },

    /// Movie with a runtime in minutes
    Movie { runtime_minutes: u32 },
}

impl VideoKind {
    /// The kind without its variant fields
    pub fn category(&self) -> Category {
        match self {
            VideoKind::Plain => Category::Video,
            VideoKind::Series { .. } => Category::Series,
            VideoKind::Movie { .. } => Category::Movie,
        }
    }
}

/// Fieldless kind of a catalog entry, used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Video,
    Series,
    Movie,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Video => write!(f, "video"),
            Category::Series => write!(f, "series"),
            Category::Movie => write!(f, "movie"),
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    /// Title, unique within a catalog
    pub name: String,

    /// Total view count
    pub views: i64,

    /// Actor names in billing order
    pub cast: Vec<String>,

    /// Variant and its specific fields
    #[serde(flatten)]
    pub kind: VideoKind,
}

impl Video {
    fn new(
        name: impl Into<String>,
        views: i64,
        cast: impl IntoIterator<Item = impl Into<String>>,
        kind: VideoKind,
    ) -> Self {
        Self {
            name: name.into(),
            views,
            cast: cast.into_iter().map(Into::into).collect(),
            kind,
        }
    }

    /// Create a generic video
    pub fn plain(
        name: impl Into<String>,
        views: i64,
        cast: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(name, views, cast, VideoKind::Plain)
    }

    /// Create a series
    pub fn series(
        name: impl Into<String>,
        views: i64,
        cast: impl IntoIterator<Item = impl Into<String>>,
        seasons: u32,
    ) -> Self {
        Self::new(name, views, cast, VideoKind::Series { seasons })
    }

    /// Create a movie
    pub fn movie(
        name: impl Into<String>,
        views: i64,
        cast: impl IntoIterator<Item = impl Into<String>>,
        runtime_minutes: u32,
    ) -> Self {
        Self::new(name, views, cast, VideoKind::Movie { runtime_minutes })
    }

    /// Season count, present only on series
    pub fn seasons(&self) -> Option<u32> {
        match self.kind {
            VideoKind::Series { seasons } => Some(seasons),
            _ => None,
        }
    }

    /// Runtime in minutes, present only on movies
    pub fn runtime_minutes(&self) -> Option<u32> {
        match self.kind {
            VideoKind::Movie { runtime_minutes } => Some(runtime_minutes),
            _ => None,
        }
    }

    /// Ordered field list: base fields first, then the variant field
    pub fn info(&self) -> VideoInfo<'_> {
        let mut fields = vec![
            InfoField::Name(&self.name),
            InfoField::Views(self.views),
            InfoField::Cast(&self.cast),
        ];

        match self.kind {
            VideoKind::Plain => {}
            VideoKind::Series { seasons } => fields.push(InfoField::Seasons(seasons)),
            VideoKind::Movie { runtime_minutes } => {
                fields.push(InfoField::RuntimeMinutes(runtime_minutes))
            }
        }

        VideoInfo(fields)
    }

    /// Check field values without rejecting the entity
    pub fn validate(&self) -> Result<(), VideoError> {
        if self.name.trim().is_empty() {
            return Err(VideoError::EmptyName);
        }
        if self.views < 0 {
            return Err(VideoError::NegativeViews {
                name: self.name.clone(),
                views: self.views,
            });
        }
        match self.kind {
            VideoKind::Series { seasons: 0 } => Err(VideoError::ZeroSeasons {
                name: self.name.clone(),
            }),
            VideoKind::Movie { runtime_minutes: 0 } => Err(VideoError::ZeroRuntime {
                name: self.name.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// One field of a video's info tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField<'a> {
    Name(&'a str),
    Views(i64),
    Cast(&'a [String]),
    Seasons(u32),
    RuntimeMinutes(u32),
}

impl fmt::Display for InfoField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoField::Name(name) => write!(f, "\"{}\"", name),
            InfoField::Views(views) => write!(f, "{}", views),
            InfoField::Cast(cast) => write!(f, "[{}]", cast.join(", ")),
            InfoField::Seasons(seasons) => write!(f, "{} seasons", seasons),
            InfoField::RuntimeMinutes(minutes) => write!(f, "{} min", minutes),
        }
    }
}

/// Ordered info tuple returned by [`Video::info`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo<'a>(pub Vec<InfoField<'a>>);

impl<'a> VideoInfo<'a> {
    pub fn fields(&self) -> &[InfoField<'a>] {
        &self.0
    }
}

impl fmt::Display for VideoInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        write!(f, ")")
    }
}

/// Suspicious field values found by [`Video::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoError {
    #[error("Video has an empty name")]
    EmptyName,

    #[error("Video \"{name}\" has negative views: {views}")]
    NegativeViews { name: String, views: i64 },

    #[error("Series \"{name}\" has zero seasons")]
    ZeroSeasons { name: String },

    #[error("Movie \"{name}\" has zero runtime")]
    ZeroRuntime { name: String },
}
