//! Split artifact writer

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;

/// File name of the train partition inside the output directory.
pub const TRAIN_FILE: &str = "train_data.csv";

/// File name of the test partition inside the output directory.
pub const TEST_FILE: &str = "test_data.csv";

/// Write the train and test partitions as CSV files into `output_dir`,
/// creating the directory if needed and overwriting existing artifacts.
/// Returns the (train, test) file paths.
pub fn save_datasets(
    train: &mut DataFrame,
    test: &mut DataFrame,
    output_dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let train_path = output_dir.join(TRAIN_FILE);
    let test_path = output_dir.join(TEST_FILE);

    write_csv(train, &train_path)?;
    write_csv(test, &test_path)?;

    Ok((train_path, test_path))
}

/// Write one partition as a headered CSV without an index column.
fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}
