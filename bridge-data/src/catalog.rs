//! Scene catalog of a bridge LiDAR directory.

use crate::array::{ArrayError, SCENE_SUFFIX, write_labels};
use crate::config::DatasetConfig;
use crate::dataset::{Dataset, DatasetSplit};
use crate::error::DatasetError;
use crate::labels::LabelSchema;
use crate::partition::{SplitAssignment, discover_scene_files};
use crate::split::Split;
use crate::types::SceneAttr;
use crate::view::SplitView;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Owns the split assignment of one dataset directory.
///
/// Scenes are discovered and partitioned once, at construction; the
/// assignment never changes afterwards. An absent or empty directory produces
/// empty splits rather than an error.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    config: DatasetConfig,
    schema: LabelSchema,
    assignment: SplitAssignment,
}

impl DatasetCatalog {
    #[tracing::instrument(skip_all, fields(name = %config.name))]
    pub fn new(config: DatasetConfig) -> Self {
        if config.use_cache {
            debug!("Caching requested in {}; left to the host pipeline", config.cache_dir.display());
        }

        let files = discover_scene_files(&config.dataset_path);
        let assignment = SplitAssignment::partition(&files, &config.val_files, &config.test_files);
        info!(
            "{}: {} training, {} validation, {} test scenes",
            config.name,
            assignment.train().len(),
            assignment.validation().len(),
            assignment.test().len()
        );

        Self {
            config,
            schema: LabelSchema::BRIDGE,
            assignment,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    pub fn label_schema(&self) -> LabelSchema {
        self.schema
    }

    /// Label ids the consuming pipeline should leave out of loss and metrics.
    pub fn ignored_label_inds(&self) -> &[i32] {
        &self.config.ignored_label_inds
    }

    pub fn assignment(&self) -> &SplitAssignment {
        &self.assignment
    }

    /// Ordered scene paths of a split by name.
    pub fn get_split_list(&self, split: &str) -> Result<Vec<&Path>, DatasetError> {
        let split: Split = split.parse()?;
        Ok(self.assignment.paths(split))
    }

    /// A lazily loading view over one split.
    pub fn get_split(&self, split: &str) -> Result<SplitView<'_>, DatasetError> {
        let split: Split = split.parse()?;
        Ok(SplitView::new(split, self.assignment.paths(split)))
    }

    /// Where the prediction for `attr` is stored:
    /// `<test_result_folder>/<dataset name>/<scene stem>.npy`.
    pub fn result_path(&self, attr: &SceneAttr) -> PathBuf {
        self.config
            .test_result_folder
            .join(&self.config.name)
            .join(format!("{}.{}", attr.stem(), SCENE_SUFFIX))
    }

    /// Whether a prediction for `attr` has already been stored.
    pub fn is_tested(&self, attr: &SceneAttr) -> bool {
        let store_path = self.result_path(attr);
        if store_path.exists() {
            info!("{} already exists.", store_path.display());
            true
        } else {
            false
        }
    }

    /// Store per-point predicted label ids for `attr` as `int32`, replacing any
    /// earlier result. Labels are written exactly as given.
    #[tracing::instrument(skip_all, fields(scene = %attr.name))]
    pub fn save_test_result(&self, results: &[i32], attr: &SceneAttr) -> Result<(), DatasetError> {
        let store_path = self.result_path(attr);
        let write_err = |source: ArrayError| DatasetError::StorageWrite {
            path: store_path.clone(),
            source,
        };

        if let Some(parent) = store_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| write_err(e.into()))?;
        }
        write_labels(&store_path, results).map_err(write_err)?;

        info!("Saved {} in {}.", attr.stem(), store_path.display());
        Ok(())
    }
}

impl Dataset for DatasetCatalog {
    fn name(&self) -> &str {
        DatasetCatalog::name(self)
    }

    fn config(&self) -> &DatasetConfig {
        DatasetCatalog::config(self)
    }

    fn label_schema(&self) -> LabelSchema {
        self.schema
    }

    fn get_split(&self, split: &str) -> Result<Box<dyn DatasetSplit + '_>, DatasetError> {
        Ok(Box::new(DatasetCatalog::get_split(self, split)?))
    }

    fn get_split_list(&self, split: &str) -> Result<Vec<&Path>, DatasetError> {
        DatasetCatalog::get_split_list(self, split)
    }

    fn is_tested(&self, attr: &SceneAttr) -> bool {
        DatasetCatalog::is_tested(self, attr)
    }

    fn save_test_result(&self, results: &[i32], attr: &SceneAttr) -> Result<(), DatasetError> {
        DatasetCatalog::save_test_result(self, results, attr)
    }
}
