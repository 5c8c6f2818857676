//! Section image fetch-and-store with skip and overwrite handling.

use std::path::Path;

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

use super::client::HttpClient;
use super::error::DownloadError;
use crate::resolver::Endpoints;

/// How to open the target file for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Exclusive create: skip existing targets, and surface a create race
    /// (target appearing between the existence check and the open) as
    /// [`DownloadError::FileExists`] rather than silently succeeding.
    FailIfExists,
    /// Truncate and replace existing targets; the skip check is bypassed.
    Overwrite,
}

impl WriteMode {
    /// Maps the `--overwrite` flag to a write mode.
    #[must_use]
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            Self::Overwrite
        } else {
            Self::FailIfExists
        }
    }
}

/// Whether a section fetch actually hit the network.
///
/// Drives the pacer: only operations that performed a network fetch incur
/// the inter-download delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A network fetch was performed and the image was stored.
    Downloaded,
    /// The target already existed; no network access was performed.
    SkippedExisting,
}

/// Fetches one section image and stores it as `<stem>.jpg` under `dir`.
///
/// The stem defaults to the section identifier when no override is given.
/// If the target exists and the mode is [`WriteMode::FailIfExists`], no
/// network request is issued and [`FetchOutcome::SkippedExisting`] is
/// returned.
///
/// # Errors
///
/// Returns `DownloadError` on transport failures, non-success image
/// statuses (nothing is written to disk in that case), create-race
/// collisions, and write failures. Every error path occurs at or after the
/// network fetch, so callers should pace on `Err` exactly as they do on
/// `Ok(FetchOutcome::Downloaded)`.
#[instrument(skip(client, endpoints, dir), fields(dir = %dir.display()))]
pub async fn store_section(
    client: &HttpClient,
    endpoints: &Endpoints,
    section_id: &str,
    dir: &Path,
    stem: Option<&str>,
    mode: WriteMode,
) -> Result<FetchOutcome, DownloadError> {
    let filename = format!("{}.jpg", stem.unwrap_or(section_id));
    let target = dir.join(&filename);

    if mode == WriteMode::FailIfExists && tokio::fs::try_exists(&target).await.unwrap_or(false) {
        info!(path = %target.display(), "skipping existing file");
        return Ok(FetchOutcome::SkippedExisting);
    }

    let url = endpoints.image_url(section_id);
    debug!(section = %section_id, url = %url, "fetching section image");
    let (status, body) = client.get_bytes(&url).await?;
    if !status.is_success() {
        // Leave the target untouched; an error body is not an image.
        return Err(DownloadError::fetch_failed(section_id, status.as_u16()));
    }

    let mut file = open_target(&target, mode).await?;
    file.write_all(&body)
        .await
        .map_err(|source| DownloadError::write_failed(&target, source))?;
    file.flush()
        .await
        .map_err(|source| DownloadError::write_failed(&target, source))?;

    info!(
        section = %section_id,
        path = %target.display(),
        bytes = body.len(),
        "stored section"
    );
    Ok(FetchOutcome::Downloaded)
}

/// Opens the target per write mode: exclusive create vs. truncate.
async fn open_target(target: &Path, mode: WriteMode) -> Result<File, DownloadError> {
    match mode {
        WriteMode::FailIfExists => OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(target)
            .await
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::AlreadyExists {
                    DownloadError::file_exists(target)
                } else {
                    DownloadError::write_failed(target, source)
                }
            }),
        WriteMode::Overwrite => File::create(target)
            .await
            .map_err(|source| DownloadError::write_failed(target, source)),
    }
}
