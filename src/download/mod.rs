//! Section image downloads: HTTP client, fetch-and-store, pacing, paths.
//!
//! # Features
//!
//! - Skip-if-exists with an explicit overwrite mode ([`WriteMode`])
//! - Exclusive-create on fresh targets so a create race surfaces as an error
//! - Fixed inter-download pacing that skipped files never incur ([`Pacer`])
//! - Deterministic directory/filename derivation ([`paths`])
//! - Structured error types with full context

mod client;
mod constants;
mod error;
mod fetcher;
mod pacer;
pub mod paths;

pub use client::HttpClient;
pub use constants::{CONNECT_TIMEOUT_SECS, DEFAULT_WAIT, READ_TIMEOUT_SECS};
pub use error::DownloadError;
pub use fetcher::{FetchOutcome, WriteMode, store_section};
pub use pacer::Pacer;
