//! Fixed names describing the asset cache and the destination tree.

use std::path::{Path, PathBuf};

/// Asset types copied by a default run, in order.
pub const DEFAULT_ASSET_TYPES: [&str; 2] = ["music", "records"];

/// Filesystem layout of the asset cache and of the produced sound tree.
#[derive(Debug, Clone)]
pub struct ExtractorLayout {
    /// Resource namespace that prefixes every logical asset path.
    pub namespace: String,
    /// Folder under the namespace holding all sounds.
    pub sounds_dir_name: String,
    /// Name of the cache folder holding index documents.
    pub indexes_dir_name: String,
    /// Name of the cache folder holding content-addressed blobs.
    pub objects_dir_name: String,
    /// Name of the game's home folder, e.g. `.minecraft`.
    pub game_dir_name: String,
    /// Name of the asset cache folder inside the game folder and the working directory.
    pub assets_dir_name: String,
    /// Destination folder, relative to the output root, that receives the sound types.
    pub output_dir: PathBuf,
    /// Sound types to copy.
    pub asset_types: Vec<String>,
}

impl Default for ExtractorLayout {
    fn default() -> Self {
        Self {
            namespace: "minecraft".into(),
            sounds_dir_name: "sounds".into(),
            indexes_dir_name: "indexes".into(),
            objects_dir_name: "objects".into(),
            game_dir_name: ".minecraft".into(),
            assets_dir_name: "assets".into(),
            output_dir: PathBuf::from("data").join("sounds"),
            asset_types: DEFAULT_ASSET_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ExtractorLayout {
    /// Logical path prefix selecting one sound type, e.g. `minecraft/sounds/music/`.
    pub fn sound_prefix(&self, asset_type: &str) -> String {
        format!(
            "{}/{}/{}/",
            self.namespace, self.sounds_dir_name, asset_type
        )
    }

    /// Index folder of a cache root.
    pub fn indexes_dir(&self, cache_root: &Path) -> PathBuf {
        cache_root.join(&self.indexes_dir_name)
    }

    /// Object store folder of a cache root.
    pub fn objects_dir(&self, cache_root: &Path) -> PathBuf {
        cache_root.join(&self.objects_dir_name)
    }

    /// Destination folder for one sound type below the output root.
    pub fn type_output_dir(&self, output_root: &Path, asset_type: &str) -> PathBuf {
        output_root.join(&self.output_dir).join(asset_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sound_prefixes_per_type() {
        let layout = ExtractorLayout::default();
        assert_eq!(layout.sound_prefix("music"), "minecraft/sounds/music/");
        assert_eq!(layout.sound_prefix("records"), "minecraft/sounds/records/");
    }

    #[test]
    fn default_types_are_music_then_records() {
        let layout = ExtractorLayout::default();
        assert_eq!(layout.asset_types, vec!["music", "records"]);
    }

    #[test]
    fn nests_type_output_under_data_sounds() {
        let layout = ExtractorLayout::default();
        let dir = layout.type_output_dir(Path::new("tool"), "records");
        assert_eq!(dir, Path::new("tool").join("data").join("sounds").join("records"));
    }
}
