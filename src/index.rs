//! Object index documents and the loader that picks the newest one.
//!
//! Index files are named after the game version they describe (`1.19.json`,
//! `5.json`, ...). Directory listings come back in no particular order, so the names are
//! sorted by byte value and the last one is treated as the newest. A specific file can
//! still be requested by name when that assumption does not hold.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ExtractError;
use crate::layout::ExtractorLayout;

/// A single content-addressed object referenced by the index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetObject {
    /// Hex digest naming the blob in the object store.
    pub hash: String,
}

/// Parsed object index mapping logical asset paths to their objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectIndex {
    /// Objects keyed by logical path, e.g. `minecraft/sounds/music/menu/menu1.ogg`.
    pub objects: BTreeMap<String, AssetObject>,
}

impl ObjectIndex {
    /// Parse an index from its JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Index document together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    /// Path of the selected index file.
    pub path: PathBuf,
    /// Parsed document.
    pub index: ObjectIndex,
}

/// Pick the index file to load from the `indexes` directory.
///
/// Only regular files are considered. With `requested` set, that exact file name must
/// exist; otherwise the byte-order-last name wins.
pub fn select_index_file(
    indexes_dir: &Path,
    requested: Option<&str>,
) -> Result<PathBuf, ExtractError> {
    let not_found = || ExtractError::IndexNotFound {
        dir: indexes_dir.to_path_buf(),
    };

    if let Some(name) = requested {
        let path = indexes_dir.join(name);
        return if path.is_file() { Ok(path) } else { Err(not_found()) };
    }

    let entries = fs::read_dir(indexes_dir).map_err(|err| ExtractError::io(indexes_dir, err))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| ExtractError::io(indexes_dir, err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| ExtractError::io(entry.path(), err))?;
        if file_type.is_file() {
            names.push(entry.file_name());
        }
    }

    names.sort();
    let latest = names.pop().ok_or_else(not_found)?;
    debug!(file = ?latest, skipped = names.len(), "selected object index");
    Ok(indexes_dir.join(latest))
}

/// Select and parse the object index of a cache root.
pub fn load_index(
    layout: &ExtractorLayout,
    cache_root: &Path,
    requested: Option<&str>,
) -> Result<LoadedIndex, ExtractError> {
    let path = select_index_file(&layout.indexes_dir(cache_root), requested)?;
    let text = fs::read_to_string(&path).map_err(|err| ExtractError::io(&path, err))?;
    let index = ObjectIndex::from_json(&text).map_err(|source| ExtractError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), objects = index.objects.len(), "loaded object index");

    Ok(LoadedIndex { path, index })
}
