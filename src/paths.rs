//! Translate hashes and logical asset paths into filesystem locations.

use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Location of a blob in the object store, sharded by the first two hash characters.
///
/// The hash must already be validated to hold at least two ASCII characters.
pub fn object_path(objects_dir: &Path, hash: &str) -> PathBuf {
    objects_dir.join(&hash[..2]).join(hash)
}

/// Destination of a forward-slash separated relative asset path below `type_dir`.
///
/// Every segment is joined separately so the result uses the native separator. Empty,
/// `.` and `..` segments are refused, as is anything the platform treats as a root or
/// drive prefix.
pub fn destination_path(
    type_dir: &Path,
    key: &str,
    relative_path: &str,
) -> Result<PathBuf, ExtractError> {
    let mut destination = type_dir.to_path_buf();
    for segment in relative_path.split('/') {
        if !is_plain_segment(segment) {
            return Err(ExtractError::UnsafePath {
                key: key.to_string(),
            });
        }
        destination.push(segment);
    }
    Ok(destination)
}

fn is_plain_segment(segment: &str) -> bool {
    if segment.is_empty() || segment == "." || segment == ".." {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shards_objects_by_hash_prefix() {
        let path = object_path(Path::new("cache/objects"), "abcd1234");
        assert_eq!(path, Path::new("cache/objects").join("ab").join("abcd1234"));
    }

    #[test]
    fn nests_relative_paths_below_type_dir() {
        let path = destination_path(Path::new("out/music"), "k", "menu/menu1.ogg").unwrap();
        assert_eq!(path, Path::new("out/music").join("menu").join("menu1.ogg"));
    }

    #[test]
    fn rejects_parent_and_empty_segments() {
        for relative in ["../escape.ogg", "a/../../b.ogg", "a//b.ogg", "./a.ogg", "a/"] {
            let result = destination_path(Path::new("out"), "k", relative);
            assert!(
                matches!(result, Err(ExtractError::UnsafePath { .. })),
                "{relative} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_backslash_traversal_on_windows() {
        let result = destination_path(Path::new("out"), "k", "..\\escape.ogg");
        if cfg!(windows) {
            assert!(result.is_err());
        } else {
            assert!(result.is_ok());
        }
    }
}
