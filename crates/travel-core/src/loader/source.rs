// crates/travel-core/src/loader/source.rs
use crate::error::Result;
use crate::model::Dataset;
#[cfg(feature = "json")]
use std::path::PathBuf;

/// Somewhere a dataset can be (re)loaded from.
///
/// The controller calls [`DatasetSource::load`] once per search; sources do
/// not cache.
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset>;
}

impl<F> DatasetSource for F
where
    F: Fn() -> Result<Dataset>,
{
    fn load(&self) -> Result<Dataset> {
        self()
    }
}

/// A dataset file on disk, read again on every load.
#[cfg(feature = "json")]
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

#[cfg(feature = "json")]
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "json")]
impl Default for FileSource {
    fn default() -> Self {
        Self::new(Dataset::default_dataset_path())
    }
}

#[cfg(feature = "json")]
impl DatasetSource for FileSource {
    fn load(&self) -> Result<Dataset> {
        Dataset::load_from_path(&self.path)
    }
}

/// JSON text already in memory (e.g. a fetched response body).
#[cfg(feature = "json")]
#[derive(Clone, Debug)]
pub struct JsonSource(pub String);

#[cfg(feature = "json")]
impl DatasetSource for JsonSource {
    fn load(&self) -> Result<Dataset> {
        Dataset::from_json_str(&self.0)
    }
}

/// A dataset served over HTTP, fetched again on every load.
#[cfg(feature = "remote")]
#[derive(Clone, Debug)]
pub struct HttpSource {
    pub url: String,
}

#[cfg(feature = "remote")]
impl DatasetSource for HttpSource {
    fn load(&self) -> Result<Dataset> {
        Dataset::fetch(&self.url)
    }
}
