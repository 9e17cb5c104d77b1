//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{TEST_FILE, TRAIN_FILE};

/// Datasplit - Split a clean dataset into stratified train/test partitions
#[derive(Parser, Debug)]
#[command(name = "datasplit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the clean input CSV file
    #[arg(short = 'i', long = "input_data_path")]
    pub input_data_path: PathBuf,

    /// Output directory for the train/test artifacts
    #[arg(short, long, default_value = "datastores/split_data")]
    pub output_dir: PathBuf,

    /// Directory for the run log file
    #[arg(long, default_value = "datastores/logs")]
    pub log_dir: PathBuf,

    /// Column used as the stratification key.
    /// Class proportions of this column are preserved between partitions.
    #[arg(short, long, default_value = "salary")]
    pub stratify_column: String,

    /// Fraction of rows assigned to the test partition (exclusive 0-1 range)
    #[arg(long, default_value = "0.2", value_parser = validate_test_size)]
    pub test_size: f64,

    /// Random seed controlling shuffle reproducibility
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Number of rows to use for schema inference (CSV only).
    /// Higher values improve type detection for ambiguous columns but may be slower.
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Also write a JSON split report into the output directory
    #[arg(long, default_value = "false")]
    pub report_json: bool,
}

impl Cli {
    /// Path of the train partition inside the output directory.
    pub fn train_path(&self) -> PathBuf {
        self.output_dir.join(TRAIN_FILE)
    }

    /// Path of the test partition inside the output directory.
    pub fn test_path(&self) -> PathBuf {
        self.output_dir.join(TEST_FILE)
    }

    /// Path of the JSON split report inside the output directory.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join("split_report.json")
    }
}

/// Validator for the test_size parameter
fn validate_test_size(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value <= 0.0 || value >= 1.0 {
        Err(format!(
            "test_size must be strictly between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
