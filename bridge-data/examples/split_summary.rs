//! Print the split assignment of a bridge LiDAR directory.
//!
//! Usage: cargo run -p bridge-data --example split_summary -- <dataset_dir> [val_fragment...]

use bridge_data::{DatasetCatalog, DatasetConfig, Split};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let dataset_path = args.next().ok_or("missing dataset directory argument")?;
    let mut config = DatasetConfig::new(dataset_path);
    let fragments: Vec<String> = args.collect();
    if !fragments.is_empty() {
        config = config.with_val_files(fragments);
    }

    let catalog = DatasetCatalog::new(config);
    for split in [Split::Train, Split::Validation, Split::Test] {
        let view = catalog.get_split(&split.to_string())?;
        println!("{split}: {} scenes", view.len());
        for index in 0..view.len() {
            let attr = view.get_attr(index)?;
            println!("  [{index}] {}", attr.name);
        }
    }

    Ok(())
}
