//! Scene array loading functions

use crate::array::ArrayError;
use glam::Vec3;
use ndarray::{Array1, Array2, Axis};
use ndarray_npy::{ReadNpyError, read_npy};
use std::path::Path;
use tracing::{debug, warn};

/// Columns every scene row must carry: x, y, z, label.
const SCENE_COLUMNS: usize = 4;

/// Largest stored label id; in-memory ids are stored ids + 1.
const MAX_STORED_LABEL: i32 = i32::MAX - 1;

/// A scene matrix as stored on disk, widened to f64.
#[derive(Debug, Clone)]
pub struct SceneArray {
    values: Array2<f64>,
}

impl SceneArray {
    /// Wrap an in-memory matrix, checking it has the scene columns and that
    /// every label is a whole number within `i32::MIN..=MAX_STORED_LABEL`.
    pub fn new(values: Array2<f64>) -> Result<Self, ArrayError> {
        let (rows, columns) = values.dim();
        if columns < SCENE_COLUMNS {
            return Err(ArrayError::Shape { rows, columns });
        }

        let label_range = f64::from(i32::MIN)..=f64::from(MAX_STORED_LABEL);
        for (row, &value) in values.column(3).iter().enumerate() {
            if value.fract() != 0.0 || !label_range.contains(&value) {
                return Err(ArrayError::InvalidLabel { row, value });
            }
        }
        Ok(Self { values })
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn columns(&self) -> usize {
        self.values.ncols()
    }

    /// First three columns as single-precision coordinates.
    pub fn points(&self) -> Vec<Vec3> {
        self.values
            .axis_iter(Axis(0))
            .map(|row| Vec3::new(row[0] as f32, row[1] as f32, row[2] as f32))
            .collect()
    }

    /// Fourth column as integer label ids, as stored.
    pub fn labels(&self) -> Vec<i32> {
        self.values.column(3).iter().map(|&v| v as i32).collect()
    }
}

/// Read a 2-D array of any supported element type, widening it to f64.
///
/// Element types are tried in order f64, f32, i64, i32; only a descriptor
/// mismatch moves on to the next type.
fn read_matrix(path: &Path) -> Result<Array2<f64>, ReadNpyError> {
    match read_npy::<_, Array2<f64>>(path) {
        Err(ReadNpyError::WrongDescriptor(_)) => {}
        other => return other,
    }
    match read_npy::<_, Array2<f32>>(path) {
        Err(ReadNpyError::WrongDescriptor(_)) => {}
        other => return other.map(|a| a.mapv(f64::from)),
    }
    match read_npy::<_, Array2<i64>>(path) {
        Err(ReadNpyError::WrongDescriptor(_)) => {}
        other => return other.map(|a| a.mapv(|v| v as f64)),
    }
    read_npy::<_, Array2<i32>>(path).map(|a| a.mapv(f64::from))
}

/// Load one scene matrix from disk.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_scene_array(path: &Path) -> Result<SceneArray, ArrayError> {
    debug!("Loading scene array from: {}", path.display());
    let values = read_matrix(path).map_err(|e| {
        warn!("Failed to parse scene array: {}", e);
        e
    })?;

    if values.ncols() > SCENE_COLUMNS {
        debug!(
            "Scene array has {} columns; only the first {} are used",
            values.ncols(),
            SCENE_COLUMNS
        );
    }

    let scene = SceneArray::new(values)?;
    debug!("Loaded {} rows from scene array", scene.rows());
    Ok(scene)
}

/// Load a 1-D integer label array (for example a stored prediction).
pub fn read_labels(path: &Path) -> Result<Vec<i32>, ArrayError> {
    match read_npy::<_, Array1<i32>>(path) {
        Err(ReadNpyError::WrongDescriptor(_)) => {}
        other => return Ok(other?.to_vec()),
    }
    read_npy::<_, Array1<i64>>(path)?
        .iter()
        .enumerate()
        .map(|(row, &v)| {
            i32::try_from(v).map_err(|_| ArrayError::InvalidLabel {
                row,
                value: v as f64,
            })
        })
        .collect()
}
