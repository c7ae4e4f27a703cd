//! Error types for the command-line host.

use bridge_data::{ArrayError, DatasetError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Prediction file error: {0}")]
    Prediction(#[from] ArrayError),

    #[error("Missing dataset path: pass --dataset-path or --config")]
    MissingDatasetPath,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
