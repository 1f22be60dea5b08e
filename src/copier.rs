//! Mirror the objects of one sound type into the destination tree.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::filter::filter_by_prefix;
use crate::index::ObjectIndex;
use crate::layout::ExtractorLayout;
use crate::paths::{destination_path, object_path};

/// Entry that could not be copied.
#[derive(Debug)]
pub struct CopyFailure {
  /// Relative path of the asset below its type folder.
  pub relative_path: String,
  /// Underlying error.
  pub error: ExtractError,
}

/// Outcome of copying one sound type.
#[derive(Debug)]
pub struct CopyReport {
  /// Sound type that was processed.
  pub asset_type: String,
  /// Number of files written during this run.
  pub copied: usize,
  /// Number of files left alone because the destination already existed.
  pub skipped: usize,
  /// Entries that failed; the remaining entries were still processed.
  pub failures: Vec<CopyFailure>,
}

impl CopyReport {
  fn new(asset_type: &str) -> Self {
    Self {
      asset_type: asset_type.to_string(),
      copied: 0,
      skipped: 0,
      failures: Vec::new(),
    }
  }

  /// Whether every entry was either copied or already present.
  pub fn is_complete(&self) -> bool {
    self.failures.is_empty()
  }
}

/// Copy every `<namespace>/sounds/<asset_type>/` object missing from the destination.
///
/// Destinations that already exist are skipped without comparing their content. An
/// entry whose blob is missing or cannot be copied is logged and recorded in the report;
/// an index entry with a malformed hash or path aborts the whole type. One notice line
/// per copied file, or a single `No missing ...` line, is written to `out`.
pub fn copy_assets_of_type(
  layout: &ExtractorLayout,
  asset_type: &str,
  cache_root: &Path,
  index: &ObjectIndex,
  output_root: &Path,
  out: &mut impl Write,
) -> Result<CopyReport, ExtractError> {
  let prefix = layout.sound_prefix(asset_type);
  let objects = filter_by_prefix(&prefix, index)?;
  let objects_dir = layout.objects_dir(cache_root);
  let type_dir = layout.type_output_dir(output_root, asset_type);
  debug!(asset_type, entries = objects.len(), "copying sound objects");

  let mut planned = Vec::with_capacity(objects.len());
  for (relative, hash) in &objects {
    let key = format!("{prefix}{relative}");
    let destination = destination_path(&type_dir, &key, relative)?;
    planned.push((relative, object_path(&objects_dir, hash), destination));
  }

  let mut report = CopyReport::new(asset_type);
  for (relative, source, destination) in planned {
    match install_object(&source, &destination) {
      Ok(true) => {
        writeln!(out, "Copying {} to {}", source.display(), destination.display())
          .map_err(ExtractError::Output)?;
        report.copied += 1;
      }
      Ok(false) => report.skipped += 1,
      Err(error) => {
        warn!(asset = %relative, %error, "failed to copy sound object");
        report.failures.push(CopyFailure {
          relative_path: relative.clone(),
          error,
        });
      }
    }
  }

  if report.copied == 0 {
    writeln!(out, "No missing {asset_type} to copy").map_err(ExtractError::Output)?;
  }

  Ok(report)
}

/// Copy `source` to `destination` unless the destination already exists.
///
/// Returns `true` when bytes were written.
fn install_object(source: &Path, destination: &Path) -> Result<bool, ExtractError> {
  if let Some(parent) = destination.parent() {
    fs::create_dir_all(parent).map_err(|err| ExtractError::io(parent, err))?;
  }

  if destination.exists() {
    return Ok(false);
  }

  match fs::copy(source, destination) {
    Ok(_) => Ok(true),
    Err(err) if err.kind() == ErrorKind::NotFound && !source.exists() => {
      Err(ExtractError::io(source, err))
    }
    Err(err) => {
      discard_partial_copy(destination);
      Err(ExtractError::io(destination, err))
    }
  }
}

fn discard_partial_copy(destination: &Path) {
  match fs::remove_file(destination) {
    Ok(()) => {}
    Err(err) if err.kind() == ErrorKind::NotFound => {}
    Err(err) => warn!(path = %destination.display(), %err, "failed to remove partial copy"),
  }
}
