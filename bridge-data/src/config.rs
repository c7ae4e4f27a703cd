//! Dataset configuration.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognized options for a bridge dataset.
///
/// Only `dataset_path` is required when deserializing; every other field falls
/// back to the dataset defaults. `cache_dir` and `use_cache` are carried for the
/// host pipeline, which owns any caching layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Directory holding the scene arrays.
    pub dataset_path: PathBuf,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default)]
    pub use_cache: bool,
    #[serde(default = "default_ignored_label_inds")]
    pub ignored_label_inds: Vec<i32>,
    /// Filename fragments selecting validation scenes, tested in order.
    #[serde(default = "default_val_files")]
    pub val_files: Vec<String>,
    /// Filename fragments selecting test scenes, tested in order.
    #[serde(default)]
    pub test_files: Vec<String>,
    /// Root directory for stored predictions.
    #[serde(default = "default_test_result_folder")]
    pub test_result_folder: PathBuf,
}

fn default_name() -> String {
    "BridgeLiDAR".to_string()
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("./logs/cache")
}

fn default_ignored_label_inds() -> Vec<i32> {
    vec![0]
}

fn default_val_files() -> Vec<String> {
    vec!["b_10".to_string()]
}

fn default_test_result_folder() -> PathBuf {
    PathBuf::from("./test")
}

impl DatasetConfig {
    /// Create a configuration with defaults for everything but the data root.
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            name: default_name(),
            cache_dir: default_cache_dir(),
            use_cache: false,
            ignored_label_inds: default_ignored_label_inds(),
            val_files: default_val_files(),
            test_files: Vec::new(),
            test_result_folder: default_test_result_folder(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_val_files<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.val_files = fragments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_test_files<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_files = fragments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_test_result_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.test_result_folder = folder.into();
        self
    }

    pub fn with_cache(mut self, cache_dir: impl Into<PathBuf>, use_cache: bool) -> Self {
        self.cache_dir = cache_dir.into();
        self.use_cache = use_cache;
        self
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            DatasetError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }
}
