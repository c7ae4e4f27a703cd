//! Name to factory mapping for datasets.
//!
//! Hosts build one registry at startup and construct datasets through it; no
//! dataset registers itself.

use crate::catalog::DatasetCatalog;
use crate::config::DatasetConfig;
use crate::dataset::Dataset;
use crate::error::DatasetError;
use std::collections::HashMap;
use tracing::debug;

/// Builds a dataset from its configuration.
pub type DatasetFactory = fn(DatasetConfig) -> Result<Box<dyn Dataset>, DatasetError>;

/// Name under which the bridge LiDAR catalog is registered by [`DatasetRegistry::with_builtin`].
pub const BRIDGE_LIDAR: &str = "BridgeLiDAR";

fn build_bridge_lidar(config: DatasetConfig) -> Result<Box<dyn Dataset>, DatasetError> {
    Ok(Box::new(DatasetCatalog::new(config)))
}

/// Registry mapping dataset names to factories.
#[derive(Default)]
pub struct DatasetRegistry {
    factories: HashMap<String, DatasetFactory>,
}

impl DatasetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the datasets shipped with this crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(BRIDGE_LIDAR, build_bridge_lidar);
        registry
    }

    /// Register a factory, returning the one it replaced, if any.
    pub fn register(&mut self, name: impl Into<String>, factory: DatasetFactory) -> Option<DatasetFactory> {
        let name = name.into();
        debug!("Registering dataset {}", name);
        self.factories.insert(name, factory)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Construct the dataset registered under `name`.
    pub fn build(&self, name: &str, config: DatasetConfig) -> Result<Box<dyn Dataset>, DatasetError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| DatasetError::UnknownDataset(name.to_string()))?;
        factory(config)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
