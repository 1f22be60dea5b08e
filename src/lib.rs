#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod app;
pub mod copier;
pub mod error;
pub mod filter;
pub mod index;
pub mod layout;
pub mod locator;
pub mod paths;

pub use app::{RunOptions, RunSummary, run};
pub use copier::{CopyReport, copy_assets_of_type};
pub use error::ExtractError;
pub use filter::filter_by_prefix;
pub use index::{LoadedIndex, ObjectIndex, load_index};
pub use layout::ExtractorLayout;
pub use locator::{SearchEnvironment, find_asset_cache_root};
