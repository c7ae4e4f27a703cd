//! Error types for dataset operations.

use crate::array::ArrayError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the catalog, split views and registry.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Invalid split {0}")]
    InvalidSplit(String),

    #[error("Index {index} out of range for split of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to read scene {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: ArrayError,
    },

    #[error("Failed to write result {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: ArrayError,
    },

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Config(err.to_string())
    }
}
