//! Error type shared by every stage of the extraction.

use std::path::PathBuf;

/// Errors that can occur while locating, reading or copying sound assets.
#[derive(Debug)]
pub enum ExtractError {
  /// None of the candidate directories looked like an asset cache.
  CacheNotFound {
    /// Candidates that were checked, in priority order.
    searched: Vec<PathBuf>,
  },
  /// The cache holds no usable index file.
  IndexNotFound {
    /// The `indexes` directory that was searched.
    dir: PathBuf,
  },
  /// A filesystem operation failed.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The index file is not valid JSON or does not have the expected shape.
  Parse {
    /// Path of the index file.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// An index entry carries a hash that cannot address an object.
  InvalidHash {
    /// Logical asset path of the entry.
    key: String,
    /// Offending hash value.
    hash: String,
  },
  /// A logical asset path would resolve outside of the destination tree.
  UnsafePath {
    /// Logical asset path of the entry.
    key: String,
  },
  /// Progress notices could not be written.
  Output(std::io::Error),
}

impl ExtractError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }

  /// Process exit status reported for this error.
  pub fn exit_code(&self) -> u8 {
    1
  }
}

impl std::fmt::Display for ExtractError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::CacheNotFound { searched } => {
        write!(f, "Minecraft assets directory not found")?;
        if !searched.is_empty() {
          let listed: Vec<String> = searched
            .iter()
            .map(|path| path.display().to_string())
            .collect();
          write!(f, " (searched {})", listed.join(", "))?;
        }
        Ok(())
      }
      Self::IndexNotFound { dir } => {
        write!(f, "Minecraft object index not found in {}", dir.display())
      }
      Self::Io { path, source } => {
        write!(f, "failed to access {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::InvalidHash { key, hash } => {
        write!(f, "index entry {key} has an invalid hash {hash:?}")
      }
      Self::UnsafePath { key } => {
        write!(f, "index entry {key} escapes the destination directory")
      }
      Self::Output(source) => write!(f, "failed to write progress output: {source}"),
    }
  }
}

impl std::error::Error for ExtractError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
      Self::Output(source) => Some(source),
      _ => None,
    }
  }
}
