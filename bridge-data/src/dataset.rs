//! Dataset and split traits used by host pipelines.

use crate::config::DatasetConfig;
use crate::error::DatasetError;
use crate::labels::LabelSchema;
use crate::split::Split;
use crate::types::{SceneAttr, SceneRecord};
use std::path::Path;

/// An indexable, lazily loaded sequence of scenes from one split.
pub trait DatasetSplit: Send + Sync {
    /// The split this sequence was built for.
    fn split(&self) -> Split;

    /// Number of scenes in the split.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load the scene at `index`.
    fn get_data(&self, index: usize) -> Result<SceneRecord, DatasetError>;

    /// Metadata of the scene at `index`.
    fn get_attr(&self, index: usize) -> Result<SceneAttr, DatasetError>;
}

/// A labeled, split-aware scene source.
///
/// Each dataset must be able to:
/// - Hand out split views and ordered file lists by split name
/// - Report whether a scene already has a stored prediction
/// - Store a scene's prediction
pub trait Dataset: Send + Sync {
    fn name(&self) -> &str;

    fn config(&self) -> &DatasetConfig;

    fn label_schema(&self) -> LabelSchema;

    fn get_split(&self, split: &str) -> Result<Box<dyn DatasetSplit + '_>, DatasetError>;

    fn get_split_list(&self, split: &str) -> Result<Vec<&Path>, DatasetError>;

    fn is_tested(&self, attr: &SceneAttr) -> bool;

    fn save_test_result(&self, results: &[i32], attr: &SceneAttr) -> Result<(), DatasetError>;
}
