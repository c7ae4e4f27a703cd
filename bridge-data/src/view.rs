//! Split-scoped, lazily loaded access to scenes.

use crate::array::read_scene_array;
use crate::dataset::DatasetSplit;
use crate::error::DatasetError;
use crate::split::Split;
use crate::types::{SceneAttr, SceneRecord};
use std::path::Path;
use tracing::{debug, info};

/// Offset added to stored label ids so that id 0 stays free in memory.
const LABEL_SHIFT: i32 = 1;

/// One split's ordered scene list.
///
/// Nothing is read until [`SplitView::get_data`] is called, and every call
/// reads its scene from disk again.
#[derive(Debug, Clone)]
pub struct SplitView<'a> {
    split: Split,
    paths: Vec<&'a Path>,
}

impl<'a> SplitView<'a> {
    pub fn new(split: Split, paths: Vec<&'a Path>) -> Self {
        info!("Found {} pointclouds for {}", paths.len(), split);
        Self { split, paths }
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[&'a Path] {
        &self.paths
    }

    fn path_at(&self, index: usize) -> Result<&'a Path, DatasetError> {
        self.paths
            .get(index)
            .copied()
            .ok_or(DatasetError::IndexOutOfRange {
                index,
                len: self.paths.len(),
            })
    }

    /// Load scene `index`: coordinates from the first three columns and labels
    /// from the fourth, shifted by +1.
    pub fn get_data(&self, index: usize) -> Result<SceneRecord, DatasetError> {
        let path = self.path_at(index)?;
        debug!("get_data called {}", path.display());

        let scene = read_scene_array(path).map_err(|source| DatasetError::StorageRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(SceneRecord {
            point: scene.points(),
            label: scene.labels().into_iter().map(|l| l + LABEL_SHIFT).collect(),
            feat: None,
        })
    }

    /// Metadata of scene `index`. Only a literal `.txt` token is stripped from
    /// the file name; the array suffix is kept.
    pub fn get_attr(&self, index: usize) -> Result<SceneAttr, DatasetError> {
        let path = self.path_at(index)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().replace(".txt", ""))
            .unwrap_or_default();

        Ok(SceneAttr {
            index,
            name,
            path: path.to_path_buf(),
            split: self.split,
        })
    }
}

impl DatasetSplit for SplitView<'_> {
    fn split(&self) -> Split {
        SplitView::split(self)
    }

    fn len(&self) -> usize {
        SplitView::len(self)
    }

    fn get_data(&self, index: usize) -> Result<SceneRecord, DatasetError> {
        SplitView::get_data(self, index)
    }

    fn get_attr(&self, index: usize) -> Result<SceneAttr, DatasetError> {
        SplitView::get_attr(self, index)
    }
}
