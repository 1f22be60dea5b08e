//! Search for a directory shaped like the game's asset cache.
//!
//! Candidates are generated in a fixed priority order from a [`SearchEnvironment`] that is
//! captured once at startup, then validated one by one. The first directory holding both
//! an `indexes` and an `objects` folder is the cache root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExtractError;
use crate::layout::ExtractorLayout;

/// Process inputs used to build candidate cache paths.
#[derive(Debug, Clone, Default)]
pub struct SearchEnvironment {
    /// Explicit cache root requested by the user, checked first.
    pub override_root: Option<PathBuf>,
    /// Current working directory.
    pub current_dir: Option<PathBuf>,
    /// User home directory.
    pub home_dir: Option<PathBuf>,
    /// Roaming application data directory; only populated on Windows.
    pub app_data_dir: Option<PathBuf>,
}

impl SearchEnvironment {
    /// Read the working directory, home directory and (on Windows) `%APPDATA%`.
    pub fn capture(override_root: Option<PathBuf>) -> Self {
        let app_data_dir = if cfg!(windows) {
            std::env::var_os("APPDATA").map(PathBuf::from)
        } else {
            None
        };

        Self {
            override_root,
            current_dir: std::env::current_dir().ok(),
            home_dir: dirs::home_dir(),
            app_data_dir,
        }
    }
}

/// Candidate cache roots in the order they should be checked.
pub fn candidate_cache_roots(layout: &ExtractorLayout, env: &SearchEnvironment) -> Vec<PathBuf> {
    let mut builder = CandidateBuilder::default();

    if let Some(root) = &env.override_root {
        builder.push(root.clone());
    }
    if let Some(cwd) = &env.current_dir {
        builder.push(cwd.join(&layout.assets_dir_name));
    }
    if let Some(home) = &env.home_dir {
        builder.push(game_assets_dir(layout, home));
    }
    if let Some(app_data) = &env.app_data_dir {
        builder.push(game_assets_dir(layout, app_data));
    }

    builder.finish()
}

/// Whether `path` exists and holds both the index and the object folders.
pub fn is_valid_cache_root(layout: &ExtractorLayout, path: &Path) -> bool {
    path.exists() && layout.indexes_dir(path).exists() && layout.objects_dir(path).exists()
}

/// Return the first candidate that validates as a cache root.
pub fn find_asset_cache_root(
    layout: &ExtractorLayout,
    candidates: &[PathBuf],
) -> Result<PathBuf, ExtractError> {
    for candidate in candidates {
        if is_valid_cache_root(layout, candidate) {
            debug!(path = %candidate.display(), "found asset cache");
            return Ok(candidate.clone());
        }
        debug!(path = %candidate.display(), "not an asset cache");
    }

    Err(ExtractError::CacheNotFound {
        searched: candidates.to_vec(),
    })
}

fn game_assets_dir(layout: &ExtractorLayout, base: &Path) -> PathBuf {
    base.join(&layout.game_dir_name).join(&layout.assets_dir_name)
}

#[derive(Default)]
struct CandidateBuilder {
    seen: BTreeSet<PathBuf>,
    result: Vec<PathBuf>,
}

impl CandidateBuilder {
    fn push(&mut self, candidate: PathBuf) {
        if self.seen.insert(candidate.clone()) {
            self.result.push(candidate);
        }
    }

    fn finish(self) -> Vec<PathBuf> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn make_cache(path: &Path) {
        fs::create_dir_all(path.join("indexes")).unwrap();
        fs::create_dir_all(path.join("objects")).unwrap();
    }

    #[test]
    fn orders_candidates_by_priority() {
        let layout = ExtractorLayout::default();
        let env = SearchEnvironment {
            override_root: Some(PathBuf::from("/custom")),
            current_dir: Some(PathBuf::from("/work")),
            home_dir: Some(PathBuf::from("/home/steve")),
            app_data_dir: Some(PathBuf::from("/roaming")),
        };

        let candidates = candidate_cache_roots(&layout, &env);
        assert_eq!(candidates, vec![
            PathBuf::from("/custom"),
            PathBuf::from("/work/assets"),
            PathBuf::from("/home/steve/.minecraft/assets"),
            PathBuf::from("/roaming/.minecraft/assets"),
        ]);
    }

    #[test]
    fn skips_missing_inputs_and_duplicates() {
        let layout = ExtractorLayout::default();
        let env = SearchEnvironment {
            override_root: Some(PathBuf::from("/work/assets")),
            current_dir: Some(PathBuf::from("/work")),
            home_dir: None,
            app_data_dir: None,
        };

        let candidates = candidate_cache_roots(&layout, &env);
        assert_eq!(candidates, vec![PathBuf::from("/work/assets")]);
    }

    #[test]
    fn requires_indexes_and_objects() {
        let layout = ExtractorLayout::default();
        let temp = tempdir().unwrap();
        let root = temp.path().join("assets");

        assert!(!is_valid_cache_root(&layout, &root));
        fs::create_dir_all(root.join("indexes")).unwrap();
        assert!(!is_valid_cache_root(&layout, &root));
        fs::create_dir_all(root.join("objects")).unwrap();
        assert!(is_valid_cache_root(&layout, &root));
    }

    #[test]
    fn returns_first_valid_candidate() {
        let layout = ExtractorLayout::default();
        let temp = tempdir().unwrap();
        let broken = temp.path().join("broken");
        let second = temp.path().join("second");
        let third = temp.path().join("third");
        fs::create_dir_all(broken.join("indexes")).unwrap();
        make_cache(&second);
        make_cache(&third);

        let found = find_asset_cache_root(&layout, &[
            temp.path().join("missing"),
            broken,
            second.clone(),
            third,
        ])
        .unwrap();

        assert_eq!(found, second);
    }

    #[test]
    fn fails_when_nothing_validates() {
        let layout = ExtractorLayout::default();
        let temp = tempdir().unwrap();
        let candidates = vec![temp.path().join("a"), temp.path().join("b")];

        match find_asset_cache_root(&layout, &candidates) {
            Err(ExtractError::CacheNotFound { searched }) => assert_eq!(searched, candidates),
            other => panic!("expected CacheNotFound, got {other:?}"),
        }
    }
}
