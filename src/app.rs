//! Traversal driver: expands selectors into resolved listings and fetches.
//!
//! A run processes three independent selector kinds: series identifiers
//! (resolved to items, then sections), item identifiers (resolved to
//! sections), and bare section identifiers. Control flows strictly
//! downward and fully sequentially; no failure anywhere aborts the run —
//! resolution failures stop their own branch, fetch failures are reported
//! and the next sibling proceeds.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info};

use crate::download::{
    self, DownloadError, FetchOutcome, HttpClient, Pacer, WriteMode, paths, store_section,
};
use crate::resolver::{self, Endpoints};

/// Options for a single traversal run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Series identifiers to expand and download.
    pub series: Vec<String>,
    /// Item identifiers to expand and download.
    pub items: Vec<String>,
    /// Bare section identifiers to download.
    pub sections: Vec<String>,
    /// Base output directory; per-entity subdirectories are created below it.
    pub output_dir: PathBuf,
    /// Use raw section identifiers as filename stems instead of page numbers.
    pub identifiers_as_names: bool,
    /// Truncate and replace existing files instead of skipping them.
    pub overwrite: bool,
    /// Minimum gap between consecutive downloads.
    pub wait: Duration,
    /// Endpoint templates (production by default, overridable for tests).
    pub endpoints: Endpoints,
}

impl RunOptions {
    /// Creates options with defaults matching the CLI defaults.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            series: Vec::new(),
            items: Vec::new(),
            sections: Vec::new(),
            output_dir,
            identifiers_as_names: false,
            overwrite: false,
            wait: download::DEFAULT_WAIT,
            endpoints: Endpoints::default(),
        }
    }
}

/// Counters for a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Sections fetched and stored.
    pub downloaded: u64,
    /// Sections skipped because the target already existed.
    pub skipped: u64,
    /// Sections whose fetch or write failed.
    pub failed: u64,
}

impl RunStats {
    fn record(&mut self, result: &Result<FetchOutcome, DownloadError>) {
        match result {
            Ok(FetchOutcome::Downloaded) => self.downloaded += 1,
            Ok(FetchOutcome::SkippedExisting) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// Runs a full traversal for the given options.
///
/// Individual failures are reported via the logging channel and contained;
/// the run always proceeds to completion.
pub async fn run(options: &RunOptions) -> RunStats {
    let client = HttpClient::new();
    let pacer = Pacer::new(options.wait);
    let mode = WriteMode::from_overwrite(options.overwrite);
    let mut stats = RunStats::default();

    for series_id in &options.series {
        let items = match resolver::series_items(&client, &options.endpoints, series_id).await {
            Ok(items) => items,
            Err(err) => {
                error!(series = %series_id, error = %err, "failed to resolve series listing");
                continue;
            }
        };
        for item_id in &items {
            let sections =
                match resolver::item_sections(&client, &options.endpoints, item_id).await {
                    Ok(sections) => sections,
                    Err(err) => {
                        error!(item = %item_id, error = %err, "failed to resolve item listing");
                        continue;
                    }
                };
            let dir = paths::series_item_dir(&options.output_dir, series_id, item_id);
            if let Err(err) = paths::ensure_dir(&dir).await {
                error!(error = %err, "continuing; writes under this directory will fail");
            }
            fetch_sections(&client, options, &pacer, mode, &sections, &dir, &mut stats).await;
        }
    }

    for item_id in &options.items {
        let sections = match resolver::item_sections(&client, &options.endpoints, item_id).await {
            Ok(sections) => sections,
            Err(err) => {
                error!(item = %item_id, error = %err, "failed to resolve item listing");
                continue;
            }
        };
        let dir = paths::item_dir(&options.output_dir, item_id);
        if let Err(err) = paths::ensure_dir(&dir).await {
            error!(error = %err, "continuing; writes under this directory will fail");
        }
        fetch_sections(&client, options, &pacer, mode, &sections, &dir, &mut stats).await;
    }

    if !options.sections.is_empty() {
        if let Err(err) = paths::ensure_dir(&options.output_dir).await {
            error!(error = %err, "continuing; writes under this directory will fail");
        }
        for section_id in &options.sections {
            // A bare section has no siblings to order, so the identifier
            // itself is the filename stem.
            let result = store_section(
                &client,
                &options.endpoints,
                section_id,
                &options.output_dir,
                Some(section_id),
                mode,
            )
            .await;
            conclude_fetch(section_id, &result, &pacer, &mut stats).await;
        }
    }

    info!(
        downloaded = stats.downloaded,
        skipped = stats.skipped,
        failed = stats.failed,
        "run complete"
    );
    stats
}

/// Fetches every section of one resolved listing into `dir`.
async fn fetch_sections(
    client: &HttpClient,
    options: &RunOptions,
    pacer: &Pacer,
    mode: WriteMode,
    sections: &[String],
    dir: &std::path::Path,
    stats: &mut RunStats,
) {
    // Pad width depends on the sibling count, so it is fixed before the
    // first filename is generated.
    let width = paths::pad_width(sections.len());
    for (index, section_id) in sections.iter().enumerate() {
        let stem = if options.identifiers_as_names {
            section_id.clone()
        } else {
            paths::page_stem(index + 1, width)
        };
        let result = store_section(client, &options.endpoints, section_id, dir, Some(&stem), mode)
            .await;
        conclude_fetch(section_id, &result, pacer, stats).await;
    }
}

/// Records the result and paces when a network fetch was attempted.
///
/// Every `store_section` error occurs at or after the image request, so
/// errors pace exactly like successful downloads; only skips do not.
async fn conclude_fetch(
    section_id: &str,
    result: &Result<FetchOutcome, DownloadError>,
    pacer: &Pacer,
    stats: &mut RunStats,
) {
    stats.record(result);
    match result {
        Ok(FetchOutcome::SkippedExisting) => {}
        Ok(FetchOutcome::Downloaded) => pacer.pause().await,
        Err(err) => {
            error!(section = %section_id, error = %err, "failed to store section");
            pacer.pause().await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_record_downloaded() {
        let mut stats = RunStats::default();
        stats.record(&Ok(FetchOutcome::Downloaded));
        assert_eq!(stats.downloaded, 1);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn test_stats_record_skipped_and_failed() {
        let mut stats = RunStats::default();
        stats.record(&Ok(FetchOutcome::SkippedExisting));
        stats.record(&Err(DownloadError::fetch_failed("1", 500)));
        assert_eq!(stats.downloaded, 0);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_run_options_defaults() {
        let options = RunOptions::new(PathBuf::from("/out"));
        assert!(options.series.is_empty());
        assert!(!options.overwrite);
        assert!(!options.identifiers_as_names);
        assert_eq!(options.wait, Duration::from_millis(500));
    }
}
