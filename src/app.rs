//! End-to-end extraction run: locate the cache, load its index, copy each sound type.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::copier::{CopyReport, copy_assets_of_type};
use crate::error::ExtractError;
use crate::index::{ObjectIndex, load_index};
use crate::layout::ExtractorLayout;
use crate::locator::{SearchEnvironment, candidate_cache_roots, find_asset_cache_root};

/// Inputs of a single extraction run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Cache and destination naming.
    pub layout: ExtractorLayout,
    /// Where to look for the asset cache.
    pub environment: SearchEnvironment,
    /// Folder that receives `data/sounds/...`.
    pub output_root: PathBuf,
    /// Specific index file name to load instead of the newest one.
    pub index_name: Option<String>,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Cache root that was used.
    pub cache_root: PathBuf,
    /// Index file that was loaded.
    pub index_path: PathBuf,
    /// One report per sound type, in processing order.
    pub reports: Vec<CopyReport>,
}

impl RunSummary {
    /// Total number of files copied across all types.
    pub fn copied(&self) -> usize {
        self.reports.iter().map(|report| report.copied).sum()
    }

    /// Total number of entries that failed across all types.
    pub fn failed(&self) -> usize {
        self.reports.iter().map(|report| report.failures.len()).sum()
    }

    /// Whether every sound type was copied without failures.
    pub fn is_complete(&self) -> bool {
        self.reports.iter().all(CopyReport::is_complete)
    }

    /// Process exit status for this run.
    pub fn exit_code(&self) -> u8 {
        if self.is_complete() { 0 } else { 1 }
    }
}

/// Run the whole extraction once, writing progress notices to `out`.
pub fn run(options: &RunOptions, out: &mut impl Write) -> Result<RunSummary, ExtractError> {
    let layout = &options.layout;
    let candidates = candidate_cache_roots(layout, &options.environment);
    let cache_root = find_asset_cache_root(layout, &candidates)?;
    writeln!(out, "Using assets from {}", cache_root.display())
        .map_err(ExtractError::Output)?;

    let loaded = load_index(layout, &cache_root, options.index_name.as_deref())?;
    info!(index = %loaded.path.display(), "using object index");

    let reports = copy_all_types(layout, &cache_root, &loaded.index, &options.output_root, out)?;
    let summary = RunSummary {
        cache_root,
        index_path: loaded.path,
        reports,
    };
    info!(
        copied = summary.copied(),
        failed = summary.failed(),
        "extraction finished"
    );

    Ok(summary)
}

fn copy_all_types(
    layout: &ExtractorLayout,
    cache_root: &Path,
    index: &ObjectIndex,
    output_root: &Path,
    out: &mut impl Write,
) -> Result<Vec<CopyReport>, ExtractError> {
    layout
        .asset_types
        .iter()
        .map(|asset_type| {
            copy_assets_of_type(layout, asset_type, cache_root, index, output_root, &mut *out)
        })
        .collect()
}
