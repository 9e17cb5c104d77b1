//! Datasplit: Stratified Train/Test Split CLI Tool
//!
//! A pipeline step that loads a cleaned tabular dataset, splits it into
//! stratified train/test partitions, and saves the two partitions as
//! CSV artifacts.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use datasplit::cli::Cli;
use datasplit::logging;
use datasplit::pipeline::{class_counts, load_dataset, save_datasets, split_dataset, SplitConfig};
use datasplit::report::SplitSummary;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = logging::init(&cli.log_dir)?;
    info!("Logging to {}", log_path.display());

    let mut summary = SplitSummary::new(
        &cli.input_data_path,
        &cli.stratify_column,
        cli.test_size,
        cli.seed,
    );

    // Step 1: Load dataset. A missing or unparsable input terminates the
    // run with exit code 1 before any artifact is written.
    info!("Loading clean dataset from: {}", cli.input_data_path.display());
    let step_start = Instant::now();
    let df = match load_dataset(&cli.input_data_path, cli.infer_schema_length) {
        Ok(df) => df,
        Err(err) => {
            error!("Error loading data: {err:#}");
            std::process::exit(1);
        }
    };
    let (rows, cols) = df.shape();
    info!("Successfully loaded dataset with shape ({rows}, {cols})");
    summary.set_load_time(step_start.elapsed());

    // Step 2: Stratified split
    let config = SplitConfig {
        stratify_column: cli.stratify_column.clone(),
        test_size: cli.test_size,
        seed: cli.seed,
    };
    info!(
        "Splitting data (test_size={}, seed={}, stratified by '{}')",
        config.test_size, config.seed, config.stratify_column
    );
    let step_start = Instant::now();
    let (mut train, mut test) = split_dataset(&df, &config)?;
    info!(
        "Split complete: {} train rows, {} test rows",
        train.height(),
        test.height()
    );
    summary.set_split_time(step_start.elapsed());

    summary.set_row_counts(df.height(), train.height(), test.height());
    summary.set_class_balance(
        &class_counts(&df, &config.stratify_column)?,
        &class_counts(&train, &config.stratify_column)?,
        &class_counts(&test, &config.stratify_column)?,
    );

    // Step 3: Save artifacts
    info!("Saving split artifacts to: {}", cli.output_dir.display());
    let step_start = Instant::now();
    let (train_path, test_path) = save_datasets(&mut train, &mut test, &cli.output_dir)?;
    info!("Saved train partition: {}", train_path.display());
    info!("Saved test partition: {}", test_path.display());
    summary.set_save_time(step_start.elapsed());

    if cli.report_json {
        let report_path = cli.report_path();
        summary.write_json(&report_path)?;
        info!("Saved split report: {}", report_path.display());
    }

    summary.display();

    Ok(())
}
