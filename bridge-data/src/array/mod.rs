//! Scene array (`.npy`) reading and writing

mod reader;
mod writer;

pub use reader::{SceneArray, read_labels, read_scene_array};
pub use writer::write_labels;

use thiserror::Error;

/// File suffix of scene arrays and stored predictions.
pub const SCENE_SUFFIX: &str = "npy";

/// Errors raised while decoding or encoding an array file.
#[derive(Debug, Error)]
pub enum ArrayError {
    #[error("NPY read error: {0}")]
    Read(#[from] ndarray_npy::ReadNpyError),

    #[error("NPY write error: {0}")]
    Write(#[from] ndarray_npy::WriteNpyError),

    #[error("Scene array has shape ({rows}, {columns}); expected at least 4 columns")]
    Shape { rows: usize, columns: usize },

    #[error("Label {value} at row {row} is not a valid label id")]
    InvalidLabel { row: usize, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
