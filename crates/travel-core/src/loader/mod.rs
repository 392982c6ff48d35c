// crates/travel-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file, optional gzip, optional HTTP) and hands
//! the bytes to the JSON parser. Nothing is cached: each call reads and parses
//! the document again.

use crate::error::Result;
use crate::model::Dataset;
use std::path::{Path, PathBuf};

mod common_io;
mod source;

pub use source::DatasetSource;
#[cfg(feature = "json")]
pub use source::{FileSource, JsonSource};
#[cfg(feature = "remote")]
pub use source::HttpSource;

/// File name of the dataset, relative to the page (browser) or the data dir.
pub const DEFAULT_DATASET_FILENAME: &str = "travel_recommendation_api.json";

impl Dataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DEFAULT_DATASET_FILENAME
    }

    /// `default_data_dir()/default_dataset_filename()`.
    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Parse a dataset from JSON text.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dataset from any reader producing JSON.
    #[cfg(feature = "json")]
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse the dataset at `path`.
    ///
    /// With the `compact` feature, a path ending in `.gz` is decompressed on
    /// the fly.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        Self::from_reader(reader)
    }

    /// Fetch and parse the dataset from an `http(s)` URL (blocking).
    #[cfg(feature = "remote")]
    pub fn fetch(url: &str) -> Result<Self> {
        let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
        Self::from_json_str(&body)
    }
}

/// Whether `input` names a remote resource rather than a file path.
pub fn is_remote(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}
