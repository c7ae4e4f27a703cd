//! Bridge Data Crate
//!
//! Split-aware access to a directory of labeled bridge LiDAR scenes. Each scene is
//! one `.npy` matrix whose rows are `x, y, z, label`. The crate discovers scenes,
//! partitions them into training/validation/test subsets by filename fragments,
//! loads scenes on demand and stores per-scene predictions.

pub mod array;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod labels;
pub mod partition;
pub mod registry;
pub mod split;
pub mod types;
pub mod view;

pub use array::{ArrayError, SCENE_SUFFIX, SceneArray, read_labels, read_scene_array, write_labels};
pub use catalog::DatasetCatalog;
pub use config::DatasetConfig;
pub use dataset::{Dataset, DatasetSplit};
pub use error::DatasetError;
pub use labels::LabelSchema;
pub use partition::{SplitAssignment, discover_scene_files};
pub use registry::{BRIDGE_LIDAR, DatasetFactory, DatasetRegistry};
pub use split::Split;
pub use types::{SceneAttr, SceneRecord};
pub use view::SplitView;
