//! Application configuration and run entry point with builder pattern.

use crate::commands::{self, Command};
use crate::error::AppError;
use bridge_data::{BRIDGE_LIDAR, Dataset, DatasetConfig, DatasetRegistry};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Logging configuration.
pub struct LoggingConfig {
    pub level: String,
    pub enable_tracy: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_tracy: false,
        }
    }
}

/// A dataset built from the registry, ready to answer commands.
pub struct App {
    dataset: Box<dyn Dataset>,
}

impl App {
    pub fn dataset(&self) -> &dyn Dataset {
        self.dataset.as_ref()
    }

    /// Run one command, writing its report to `out`.
    pub fn execute<W: Write>(&self, command: &Command, out: &mut W) -> Result<(), AppError> {
        commands::execute(self.dataset.as_ref(), command, out)
    }
}

/// Builder for configuring and running the application.
pub struct AppBuilder {
    dataset: String,
    config_file: Option<PathBuf>,
    dataset_path: Option<PathBuf>,
    val_files: Option<Vec<String>>,
    test_files: Option<Vec<String>>,
    result_folder: Option<PathBuf>,
    logging: LoggingConfig,
    registry: DatasetRegistry,
}

impl AppBuilder {
    /// Create a new AppBuilder with the built-in datasets registered.
    pub fn new() -> Self {
        Self {
            dataset: BRIDGE_LIDAR.to_string(),
            config_file: None,
            dataset_path: None,
            val_files: None,
            test_files: None,
            result_folder: None,
            logging: LoggingConfig::default(),
            registry: DatasetRegistry::with_builtin(),
        }
    }

    /// Select the registered dataset to build.
    pub fn with_dataset(mut self, name: impl Into<String>) -> Self {
        self.dataset = name.into();
        self
    }

    /// Read the base configuration from a JSON file.
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    pub fn with_dataset_path(mut self, path: Option<PathBuf>) -> Self {
        self.dataset_path = path;
        self
    }

    pub fn with_val_files(mut self, fragments: Option<Vec<String>>) -> Self {
        self.val_files = fragments;
        self
    }

    pub fn with_test_files(mut self, fragments: Option<Vec<String>>) -> Self {
        self.test_files = fragments;
        self
    }

    pub fn with_result_folder(mut self, folder: Option<PathBuf>) -> Self {
        self.result_folder = folder;
        self
    }

    /// Configure logging.
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Merge the config file (if any) with command-line overrides.
    pub fn dataset_config(&self) -> Result<DatasetConfig, AppError> {
        let mut config = match (&self.config_file, &self.dataset_path) {
            (Some(file), _) => DatasetConfig::from_json_file(file)?,
            (None, Some(path)) => DatasetConfig::new(path),
            (None, None) => return Err(AppError::MissingDatasetPath),
        };

        if let Some(path) = &self.dataset_path {
            config.dataset_path = path.clone();
        }
        if let Some(fragments) = &self.val_files {
            config.val_files = fragments.clone();
        }
        if let Some(fragments) = &self.test_files {
            config.test_files = fragments.clone();
        }
        if let Some(folder) = &self.result_folder {
            config.test_result_folder = folder.clone();
        }
        Ok(config)
    }

    /// Build the selected dataset through the registry.
    pub fn build(&self) -> Result<App, AppError> {
        let config = self.dataset_config()?;
        debug!("Building dataset {} from {}", self.dataset, config.dataset_path.display());
        let dataset = self.registry.build(&self.dataset, config)?;
        Ok(App { dataset })
    }

    /// Initialize logging, build the dataset and run one command against stdout.
    pub fn run(self, command: &Command) -> Result<(), AppError> {
        self.init_logging();
        let app = self.build()?;
        debug!("Running {:?} against {}", command, app.dataset().name());
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        app.execute(command, &mut out)
    }

    fn init_logging(&self) {
        #[cfg(feature = "tracy")]
        {
            if self.logging.enable_tracy {
                use tracing_subscriber::Layer;
                use tracing_subscriber::layer::SubscriberExt;
                use tracing_subscriber::util::SubscriberInitExt;
                tracing_subscriber::registry()
                    .with(tracing_tracy::TracyLayer::default())
                    .with(
                        tracing_subscriber::fmt::layer().with_filter(
                            tracing_subscriber::EnvFilter::try_from_default_env()
                                .unwrap_or_else(|_| self.logging.level.clone().into()),
                        ),
                    )
                    .init();
                return;
            }
        }

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.logging.level)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dataset_path() {
        assert!(matches!(
            AppBuilder::new().dataset_config(),
            Err(AppError::MissingDatasetPath)
        ));
    }

    #[test]
    fn test_overrides_apply_on_top_of_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bridge.json");
        std::fs::write(
            &file,
            r#"{"dataset_path": "/from/file", "val_files": ["b_10"], "test_files": ["b_20"]}"#,
        )
        .unwrap();

        let builder = AppBuilder::new()
            .with_config_file(Some(file))
            .with_test_files(Some(vec!["b_30".to_string()]))
            .with_result_folder(Some(PathBuf::from("/out")));
        let config = builder.dataset_config().unwrap();

        assert_eq!(config.dataset_path, PathBuf::from("/from/file"));
        assert_eq!(config.val_files, vec!["b_10"]);
        assert_eq!(config.test_files, vec!["b_30"]);
        assert_eq!(config.test_result_folder, PathBuf::from("/out"));
    }

    #[test]
    fn test_unknown_dataset_name() {
        let builder = AppBuilder::new()
            .with_dataset("Toronto3D")
            .with_dataset_path(Some(PathBuf::from("/data")));
        assert!(matches!(
            builder.build(),
            Err(AppError::Dataset(bridge_data::DatasetError::UnknownDataset(_)))
        ));
    }

    #[test]
    fn test_build_bridge_lidar() {
        let dir = tempfile::tempdir().unwrap();
        let app = AppBuilder::new()
            .with_dataset_path(Some(dir.path().to_path_buf()))
            .build()
            .unwrap();
        assert_eq!(app.dataset().name(), "BridgeLiDAR");
    }
}
