//! Bridge LiDAR command-line host
//!
//! Builds the bridge LiDAR dataset through an explicit registry and answers
//! queries about its splits, scenes, labels and stored predictions.

mod app;
mod commands;
mod error;

use app::{AppBuilder, LoggingConfig};
use clap::Parser;
use commands::Command;
use std::path::PathBuf;

/// Bridge LiDAR - split-aware scene dataset tool
#[derive(Parser, Debug)]
#[command(name = "bridge-lidar")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON dataset configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the scene arrays (overrides the config file)
    #[arg(short, long)]
    dataset_path: Option<PathBuf>,

    /// Registered dataset name
    #[arg(long, default_value = bridge_data::BRIDGE_LIDAR)]
    dataset: String,

    /// Comma-separated filename fragments selecting validation scenes
    #[arg(long, value_delimiter = ',')]
    val_files: Option<Vec<String>>,

    /// Comma-separated filename fragments selecting test scenes
    #[arg(long, value_delimiter = ',')]
    test_files: Option<Vec<String>>,

    /// Root directory for stored predictions
    #[arg(long)]
    result_folder: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Route spans to Tracy (requires the `tracy` feature)
    #[arg(long)]
    tracy: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let args = Args::parse();

    let builder = AppBuilder::new()
        .with_dataset(args.dataset)
        .with_config_file(args.config)
        .with_dataset_path(args.dataset_path)
        .with_val_files(args.val_files)
        .with_test_files(args.test_files)
        .with_result_folder(args.result_folder)
        .with_logging(LoggingConfig {
            level: args.log_level,
            enable_tracy: args.tracy,
        });

    if let Err(e) = builder.run(&args.command) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment_lists() {
        let args = Args::try_parse_from([
            "bridge-lidar",
            "--dataset-path",
            "/data",
            "--val-files",
            "b_10,b_12",
            "--test-files",
            "b_20",
            "splits",
        ])
        .unwrap();
        assert_eq!(args.dataset_path, Some(PathBuf::from("/data")));
        assert_eq!(args.val_files, Some(vec!["b_10".to_string(), "b_12".to_string()]));
        assert_eq!(args.test_files, Some(vec!["b_20".to_string()]));
        assert_eq!(args.dataset, "BridgeLiDAR");
        assert_eq!(args.command, Command::Splits);
    }

    #[test]
    fn test_parse_inspect() {
        let args = Args::try_parse_from(["bridge-lidar", "-d", "/data", "inspect", "-s", "val", "-i", "3"])
            .unwrap();
        assert_eq!(
            args.command,
            Command::Inspect {
                split: "val".to_string(),
                index: 3
            }
        );
        assert!(args.val_files.is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["bridge-lidar", "-d", "/data"]).is_err());
    }

    #[test]
    fn test_negative_index_rejected() {
        assert!(Args::try_parse_from(["bridge-lidar", "-d", "/data", "inspect", "-i", "-1"]).is_err());
    }
}
