//! The video library.
//!
//! Holds the read-only [`Catalog`] that every report scans. The catalog
//! lives in memory only; [`Catalog::sample`] is the built-in data set.

pub mod catalog;

pub use catalog::Catalog;
