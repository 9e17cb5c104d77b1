//! End-to-end tests for the split pipeline binary

use assert_cmd::Command;
use polars::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

fn read_csv(path: &std::path::Path) -> DataFrame {
    LazyCsvReader::new(path).finish().unwrap().collect().unwrap()
}

#[test]
fn test_full_pipeline_writes_both_partitions() {
    let mut df = create_stratified_dataframe(&[("low", 60), ("high", 40)]);
    let (temp_dir, csv_path) = create_temp_csv(&mut df);
    let output_dir = temp_dir.path().join("split_data");
    let log_dir = temp_dir.path().join("logs");

    Command::cargo_bin("datasplit")
        .unwrap()
        .arg("--input_data_path")
        .arg(&csv_path)
        .arg("--output-dir")
        .arg(&output_dir)
        .arg("--log-dir")
        .arg(&log_dir)
        .assert()
        .success();

    let train = read_csv(&output_dir.join("train_data.csv"));
    let test = read_csv(&output_dir.join("test_data.csv"));

    assert_eq!(train.height(), 80);
    assert_eq!(test.height(), 20);
    assert!(
        id_set(&train).is_disjoint(&id_set(&test)),
        "Partitions should not share rows"
    );
    assert!(
        log_dir.join("data_split.log").exists(),
        "Run should append to the log file"
    );
}

#[test]
fn test_missing_input_exits_with_code_1_and_no_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("split_data");
    let log_dir = temp_dir.path().join("logs");

    Command::cargo_bin("datasplit")
        .unwrap()
        .arg("--input_data_path")
        .arg(temp_dir.path().join("no_such_file.csv"))
        .arg("--output-dir")
        .arg(&output_dir)
        .arg("--log-dir")
        .arg(&log_dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error loading data"));

    assert!(
        !output_dir.join("train_data.csv").exists(),
        "No train artifact should be written on load failure"
    );
    assert!(
        !output_dir.join("test_data.csv").exists(),
        "No test artifact should be written on load failure"
    );
}

#[test]
fn test_pipeline_is_deterministic_across_runs() {
    let mut df = create_stratified_dataframe(&[("low", 30), ("mid", 12), ("high", 8)]);
    let (temp_dir, csv_path) = create_temp_csv(&mut df);

    let mut artifacts: Vec<(String, String)> = Vec::new();
    for run in ["first", "second"] {
        let output_dir = temp_dir.path().join(run);
        Command::cargo_bin("datasplit")
            .unwrap()
            .arg("--input_data_path")
            .arg(&csv_path)
            .arg("--output-dir")
            .arg(&output_dir)
            .arg("--log-dir")
            .arg(temp_dir.path().join("logs"))
            .assert()
            .success();

        artifacts.push((
            std::fs::read_to_string(output_dir.join("train_data.csv")).unwrap(),
            std::fs::read_to_string(output_dir.join("test_data.csv")).unwrap(),
        ));
    }

    assert_eq!(
        artifacts[0], artifacts[1],
        "Same input and seed should produce byte-identical artifacts"
    );
}

#[test]
fn test_pipeline_writes_json_report_when_requested() {
    let mut df = create_stratified_dataframe(&[("low", 16), ("high", 4)]);
    let (temp_dir, csv_path) = create_temp_csv(&mut df);
    let output_dir = temp_dir.path().join("split_data");

    Command::cargo_bin("datasplit")
        .unwrap()
        .arg("--input_data_path")
        .arg(&csv_path)
        .arg("--output-dir")
        .arg(&output_dir)
        .arg("--log-dir")
        .arg(temp_dir.path().join("logs"))
        .arg("--report-json")
        .assert()
        .success();

    let report_path = output_dir.join("split_report.json");
    assert!(report_path.exists(), "JSON report should be written");

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();

    assert_eq!(report["total_rows"], 20);
    assert_eq!(report["seed"], 42);
    assert_eq!(report["stratify_column"], "salary");
    assert_eq!(
        report["train_rows"].as_u64().unwrap() + report["test_rows"].as_u64().unwrap(),
        20
    );
}

#[test]
fn test_pipeline_respects_custom_stratify_column_and_seed() {
    let mut df = df! {
        "id" => (0i64..50).collect::<Vec<_>>(),
        "grade" => (0..50).map(|i| if i % 5 == 0 { "a" } else { "b" }).collect::<Vec<_>>(),
    }
    .unwrap();
    let (temp_dir, csv_path) = create_temp_csv(&mut df);
    let output_dir = temp_dir.path().join("split_data");

    Command::cargo_bin("datasplit")
        .unwrap()
        .arg("--input_data_path")
        .arg(&csv_path)
        .arg("--output-dir")
        .arg(&output_dir)
        .arg("--log-dir")
        .arg(temp_dir.path().join("logs"))
        .arg("--stratify-column")
        .arg("grade")
        .arg("--seed")
        .arg("7")
        .assert()
        .success();

    let train = read_csv(&output_dir.join("train_data.csv"));
    let test = read_csv(&output_dir.join("test_data.csv"));
    assert_eq!(train.height() + test.height(), 50);
}
