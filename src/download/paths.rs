//! Target directory and filename stem construction.
//!
//! Identifiers appear in two roles with different rules: embedded in URLs
//! they are used verbatim, as path components their dots are stripped.
//! Directory shapes per request kind:
//!
//! - series traversal: `<out>/<series_no_dots>/<item_no_dots>/`
//! - direct item request: `<out>/<item_no_dots>/`
//! - bare section request: `<out>/`

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DownloadError;

/// Converts an identifier into a path component by stripping dots.
#[must_use]
pub fn identifier_as_path(identifier: &str) -> String {
    identifier.replace('.', "")
}

/// Target directory for sections reached via series traversal.
#[must_use]
pub fn series_item_dir(output_dir: &Path, series_id: &str, item_id: &str) -> PathBuf {
    output_dir
        .join(identifier_as_path(series_id))
        .join(identifier_as_path(item_id))
}

/// Target directory for sections of a directly requested item.
#[must_use]
pub fn item_dir(output_dir: &Path, item_id: &str) -> PathBuf {
    output_dir.join(identifier_as_path(item_id))
}

/// Zero-pad width for a section list: the number of decimal digits in the
/// sibling count, so lexicographic filename order matches page order.
#[must_use]
pub fn pad_width(total: usize) -> usize {
    total.to_string().len()
}

/// 1-based zero-padded page stem.
///
/// The width must be computed once per resolved list with [`pad_width`]
/// before the first stem is generated.
#[must_use]
pub fn page_stem(page_number: usize, width: usize) -> String {
    format!("{page_number:0width$}")
}

/// Creates the target directory and all missing parents.
///
/// Idempotent: an already-existing directory is not an error.
///
/// # Errors
///
/// Returns `DownloadError::DirectoryCreateFailed` if creation fails. The
/// caller reports this and continues; subsequent file opens under the
/// missing directory fail naturally and are reported per file.
pub async fn ensure_dir(path: &Path) -> Result<(), DownloadError> {
    debug!(path = %path.display(), "ensuring directory exists");
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| DownloadError::directory_create_failed(path, source))
}
