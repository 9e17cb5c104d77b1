//! Stratified train/test splitting

use std::collections::BTreeMap;

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

/// Errors that can occur while splitting a dataset.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The stratification column is not present in the dataset.
    #[error("stratification column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A class has too few rows to appear in both partitions.
    #[error(
        "class '{class}' in column '{column}' has only {count} row(s); \
         stratification requires at least 2 rows per class"
    )]
    ClassTooSmall {
        column: String,
        class: String,
        count: usize,
    },

    /// The requested test fraction is outside the open (0, 1) interval.
    #[error("test_size must be strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Configuration of a stratified split.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Column whose class proportions are preserved between partitions.
    pub stratify_column: String,
    /// Fraction of rows assigned to the test partition.
    pub test_size: f64,
    /// Seed for the shuffle RNG.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            stratify_column: "salary".to_string(),
            test_size: 0.2,
            seed: 42,
        }
    }
}

/// Split `df` into shuffled (train, test) partitions, stratified by
/// `config.stratify_column` and deterministic for a given seed.
///
/// Each class contributes `round(len * test_size)` rows to the test
/// partition, clamped so both partitions receive at least one row per
/// class. Row sets of the two partitions are disjoint and their union is
/// the input dataset.
pub fn split_dataset(
    df: &DataFrame,
    config: &SplitConfig,
) -> Result<(DataFrame, DataFrame), SplitError> {
    if config.test_size <= 0.0 || config.test_size >= 1.0 {
        return Err(SplitError::InvalidTestSize(config.test_size));
    }

    let classes = group_indices_by_class(df, &config.stratify_column)?;

    for (class, indices) in &classes {
        if indices.len() < 2 {
            return Err(SplitError::ClassTooSmall {
                column: config.stratify_column.clone(),
                class: class.clone(),
                count: indices.len(),
            });
        }
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut train_idx: Vec<IdxSize> = Vec::new();
    let mut test_idx: Vec<IdxSize> = Vec::new();

    for (_, mut indices) in classes {
        indices.shuffle(&mut rng);
        let len = indices.len();
        let n_test = ((len as f64 * config.test_size).round() as usize).clamp(1, len - 1);
        test_idx.extend_from_slice(&indices[..n_test]);
        train_idx.extend_from_slice(&indices[n_test..]);
    }

    // Shuffle the partitions so output rows are not grouped by class.
    train_idx.shuffle(&mut rng);
    test_idx.shuffle(&mut rng);

    let train = df.take(&IdxCa::from_vec("idx".into(), train_idx))?;
    let test = df.take(&IdxCa::from_vec("idx".into(), test_idx))?;

    Ok((train, test))
}

/// Per-class row counts for a column, keyed by the class label.
pub fn class_counts(df: &DataFrame, column: &str) -> Result<BTreeMap<String, usize>, SplitError> {
    let classes = group_indices_by_class(df, column)?;
    Ok(classes
        .into_iter()
        .map(|(class, indices)| (class, indices.len()))
        .collect())
}

/// Group row indices by their value in `column`. A BTreeMap keeps class
/// iteration order stable so the same seed always visits classes in the
/// same order. Null values form their own class.
fn group_indices_by_class(
    df: &DataFrame,
    column: &str,
) -> Result<BTreeMap<String, Vec<IdxSize>>, SplitError> {
    let column = df
        .column(column)
        .map_err(|_| SplitError::ColumnNotFound(column.to_string()))?;

    // Rechunk before iterating; Series::iter requires a single chunk.
    let series = column.as_materialized_series().rechunk();

    let mut classes: BTreeMap<String, Vec<IdxSize>> = BTreeMap::new();
    for (idx, value) in series.iter().enumerate() {
        classes
            .entry(class_label(&value))
            .or_default()
            .push(idx as IdxSize);
    }

    Ok(classes)
}

/// Class label for a cell value. String values are used verbatim (their
/// Display impl would quote them) and nulls form their own class.
fn class_label(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(v) => (*v).to_string(),
        AnyValue::StringOwned(v) => v.to_string(),
        other => other.to_string(),
    }
}
