//! Error types for the download module.
//!
//! Every error here is locally contained by the traversal driver: a failed
//! section never aborts the run, it is reported and the next sibling
//! proceeds.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching and storing section images.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Network-level error (DNS resolution, connection refused, timeout, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed to fetch.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The image endpoint returned a non-success status for a section.
    #[error("HTTP {status} fetching section {section}")]
    FetchFailed {
        /// The section identifier that failed.
        section: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// Exclusive-create collision: the target appeared between the existence
    /// check and the open. Surfaced as its own kind rather than masked.
    #[error("target file already exists: {path}")]
    FileExists {
        /// The colliding target path.
        path: PathBuf,
    },

    /// File system error while opening or writing the target.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// The target path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Directory creation failed. Non-fatal: subsequent file opens under the
    /// missing directory fail naturally and are reported per file.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreateFailed {
        /// The directory path that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a failed-fetch error for a section.
    pub fn fetch_failed(section: impl Into<String>, status: u16) -> Self {
        Self::FetchFailed {
            section: section.into(),
            status,
        }
    }

    /// Creates an exclusive-create collision error.
    pub fn file_exists(path: impl Into<PathBuf>) -> Self {
        Self::FileExists { path: path.into() }
    }

    /// Creates a write error.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a directory creation error.
    pub fn directory_create_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreateFailed {
            path: path.into(),
            source,
        }
    }
}
