//! Domain types for the video catalog.
//!
//! A video is a shared base record (name, views, cast) plus a
//! variant-specific payload:
//! - Series: number of seasons
//! - Movie: runtime in minutes

pub mod video;

// Re-export commonly used types
pub use video::{Category, InfoField, Video, VideoError, VideoInfo, VideoKind};
