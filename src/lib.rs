//! narc-fetch Core Library
//!
//! This library implements the traversal and download logic behind the
//! `narc-fetch` tool, which downloads digitized page images from the
//! Digital Archive of the Finnish National Archives and reconstructs the
//! archive's three-level hierarchy (series → items → sections) as a local
//! directory tree.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`resolver`] - Listing resolution (series → item ids, item → section ids)
//! - [`scrape`] - Link extraction from server-rendered listing markup
//! - [`download`] - HTTP client, section image fetch/store, pacing, paths
//! - [`app`] - Traversal driver tying selectors to resolvers and fetches

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod download;
pub mod resolver;
pub mod scrape;
mod user_agent;

// Re-export commonly used types
pub use app::{RunOptions, RunStats, run};
pub use download::{
    DEFAULT_WAIT, DownloadError, FetchOutcome, HttpClient, Pacer, WriteMode, store_section,
};
pub use resolver::{Endpoints, ResolveError};
