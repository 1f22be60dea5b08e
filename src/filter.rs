//! Select the index entries belonging to one sound type.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::ExtractError;
use crate::index::ObjectIndex;

fn object_hash_pattern() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{2,}$").expect("invalid object hash regex"))
}

/// Whether `hash` can address a blob in the sharded object store.
pub fn is_valid_object_hash(hash: &str) -> bool {
  object_hash_pattern().is_match(hash)
}

/// Map every index key starting with `prefix` to its hash, with the prefix stripped.
///
/// A key equal to the prefix names a folder rather than an asset and is dropped. Hashes
/// that are not hex strings of at least two characters are rejected.
pub fn filter_by_prefix(
  prefix: &str,
  index: &ObjectIndex,
) -> Result<BTreeMap<String, String>, ExtractError> {
  let mut selected = BTreeMap::new();

  for (key, object) in &index.objects {
    let Some(relative) = key.strip_prefix(prefix) else {
      continue;
    };
    if relative.is_empty() {
      continue;
    }
    if !is_valid_object_hash(&object.hash) {
      return Err(ExtractError::InvalidHash {
        key: key.clone(),
        hash: object.hash.clone(),
      });
    }
    selected.insert(relative.to_string(), object.hash.clone());
  }

  Ok(selected)
}
