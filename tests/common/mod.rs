//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a small test DataFrame with a `salary` stratification column.
///
/// 10 rows: 6 "low" and 4 "high", each row carrying a unique `id` so
/// partition membership can be tracked across a split.
pub fn create_salary_dataframe() -> DataFrame {
    df! {
        "id" => [0i64, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        "age" => [25i64, 31, 42, 28, 35, 51, 46, 29, 38, 33],
        "salary" => ["low", "low", "low", "low", "low", "low", "high", "high", "high", "high"],
    }
    .unwrap()
}

/// Create a DataFrame with one row per (label, count) pair in `counts`,
/// with unique `id`s and a numeric `score` feature.
pub fn create_stratified_dataframe(counts: &[(&str, usize)]) -> DataFrame {
    let mut ids: Vec<i64> = Vec::new();
    let mut scores: Vec<f64> = Vec::new();
    let mut salaries: Vec<String> = Vec::new();

    let mut next_id = 0i64;
    for (label, count) in counts {
        for _ in 0..*count {
            ids.push(next_id);
            scores.push(next_id as f64 * 0.5);
            salaries.push((*label).to_string());
            next_id += 1;
        }
    }

    df! {
        "id" => ids,
        "score" => scores,
        "salary" => salaries,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("clean_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Collect the `id` column of a DataFrame as a set.
pub fn id_set(df: &DataFrame) -> BTreeSet<i64> {
    df.column("id")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}

/// Collect the `id` column of a DataFrame in row order.
pub fn id_vec(df: &DataFrame) -> Vec<i64> {
    df.column("id")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}
