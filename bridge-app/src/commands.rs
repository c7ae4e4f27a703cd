//! Subcommands answered from a built dataset.

use crate::error::AppError;
use bridge_data::{Dataset, Split, read_labels};
use clap::Subcommand;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every split with its ordered scenes.
    Splits,
    /// Load one scene and summarize its points and labels.
    Inspect {
        #[arg(short, long, default_value = "training")]
        split: String,
        #[arg(short, long)]
        index: usize,
    },
    /// Print the label table.
    Labels,
    /// List scenes of a split that have no stored prediction yet.
    Pending {
        #[arg(short, long, default_value = "test")]
        split: String,
    },
    /// Store a prediction array for one scene at its canonical location.
    SaveResult {
        #[arg(short, long, default_value = "test")]
        split: String,
        #[arg(short, long)]
        index: usize,
        /// 1-D integer `.npy` array of predicted label ids.
        #[arg(long)]
        from: PathBuf,
    },
}

pub fn execute<W: Write>(dataset: &dyn Dataset, command: &Command, out: &mut W) -> Result<(), AppError> {
    match command {
        Command::Splits => splits(dataset, out),
        Command::Inspect { split, index } => inspect(dataset, split, *index, out),
        Command::Labels => labels(dataset, out),
        Command::Pending { split } => pending(dataset, split, out),
        Command::SaveResult { split, index, from } => save_result(dataset, split, *index, from, out),
    }
}

fn splits<W: Write>(dataset: &dyn Dataset, out: &mut W) -> Result<(), AppError> {
    for split in [Split::Train, Split::Validation, Split::Test] {
        let paths = dataset.get_split_list(&split.to_string())?;
        writeln!(out, "{}: {} scenes", split, paths.len())?;
        for path in paths {
            writeln!(out, "  {}", path.display())?;
        }
    }
    let total = dataset.get_split_list("all")?.len();
    writeln!(out, "all: {} scenes", total)?;
    Ok(())
}

fn inspect<W: Write>(dataset: &dyn Dataset, split: &str, index: usize, out: &mut W) -> Result<(), AppError> {
    let view = dataset.get_split(split)?;
    let attr = view.get_attr(index)?;
    let record = view.get_data(index)?;
    let schema = dataset.label_schema();

    writeln!(out, "scene: {} ({} #{})", attr.name, attr.split, attr.index)?;
    writeln!(out, "points: {}", record.len())?;
    if let Some((min, max)) = record.bounds() {
        writeln!(
            out,
            "bounds: min ({:.3}, {:.3}, {:.3}) max ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        )?;
    }

    // In-memory ids are stored ids + 1.
    let histogram = record.label_histogram(schema.num_classes() + 1);
    for (label, count) in histogram.iter().enumerate().skip(1) {
        let stored = label as i32 - 1;
        let name = schema.name_of(stored).unwrap_or("?");
        writeln!(out, "  label {} ({}): {}", label, name, count)?;
    }
    writeln!(out, "attr: {}", serde_json::to_string(&attr)?)?;
    Ok(())
}

fn labels<W: Write>(dataset: &dyn Dataset, out: &mut W) -> Result<(), AppError> {
    let ignored = &dataset.config().ignored_label_inds;
    for (id, name) in dataset.label_schema().label_to_names() {
        let marker = if ignored.contains(&id) { " (ignored)" } else { "" };
        writeln!(out, "{} {}{}", id, name, marker)?;
    }
    Ok(())
}

fn pending<W: Write>(dataset: &dyn Dataset, split: &str, out: &mut W) -> Result<(), AppError> {
    let view = dataset.get_split(split)?;
    let mut remaining = 0;
    for index in 0..view.len() {
        let attr = view.get_attr(index)?;
        if !dataset.is_tested(&attr) {
            writeln!(out, "{}", attr.name)?;
            remaining += 1;
        }
    }
    writeln!(out, "{} of {} scenes pending", remaining, view.len())?;
    Ok(())
}

fn save_result<W: Write>(
    dataset: &dyn Dataset,
    split: &str,
    index: usize,
    from: &Path,
    out: &mut W,
) -> Result<(), AppError> {
    let view = dataset.get_split(split)?;
    let attr = view.get_attr(index)?;
    let predictions = read_labels(from)?;
    dataset.save_test_result(&predictions, &attr)?;
    writeln!(out, "saved {} labels for {}", predictions.len(), attr.name)?;
    Ok(())
}
