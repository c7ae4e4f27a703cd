//! Label array writing

use crate::array::ArrayError;
use ndarray::Array1;
use ndarray_npy::write_npy;
use std::path::Path;
use tracing::debug;

/// Write a 1-D `int32` label array, replacing any existing file at `path`.
pub fn write_labels(path: &Path, labels: &[i32]) -> Result<(), ArrayError> {
    let array = Array1::from_vec(labels.to_vec());
    write_npy(path, &array)?;
    debug!("Wrote {} labels to {}", labels.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::read_labels;

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.npy");

        write_labels(&path, &[1, 2, 3, 4]).unwrap();
        write_labels(&path, &[0, 3]).unwrap();

        assert_eq!(read_labels(&path).unwrap(), vec![0, 3]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scene.npy");
        assert!(write_labels(&path, &[1]).is_err());
    }
}
