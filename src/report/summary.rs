//! Split summary report generation

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

/// Row counts of one stratification class across the partitions.
#[derive(Debug, Serialize)]
pub struct ClassBalance {
    pub class: String,
    pub total_rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Summary of a completed split run
#[derive(Debug, Serialize)]
pub struct SplitSummary {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Datasplit version
    pub datasplit_version: String,
    /// Input file path
    pub input_file: String,
    /// Stratification column name
    pub stratify_column: String,
    /// Requested test fraction
    pub test_size: f64,
    /// Shuffle seed
    pub seed: u64,
    /// Row count of the input dataset
    pub total_rows: usize,
    /// Row count of the train partition
    pub train_rows: usize,
    /// Row count of the test partition
    pub test_rows: usize,
    /// Per-class row counts across the partitions
    pub class_balance: Vec<ClassBalance>,
    #[serde(skip)]
    pub load_time: Duration,
    #[serde(skip)]
    pub split_time: Duration,
    #[serde(skip)]
    pub save_time: Duration,
}

impl SplitSummary {
    pub fn new(input_file: &Path, stratify_column: &str, test_size: f64, seed: u64) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            datasplit_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            stratify_column: stratify_column.to_string(),
            test_size,
            seed,
            total_rows: 0,
            train_rows: 0,
            test_rows: 0,
            class_balance: Vec::new(),
            load_time: Duration::ZERO,
            split_time: Duration::ZERO,
            save_time: Duration::ZERO,
        }
    }

    pub fn set_row_counts(&mut self, total: usize, train: usize, test: usize) {
        self.total_rows = total;
        self.train_rows = train;
        self.test_rows = test;
    }

    /// Assemble the per-class balance from the class counts of the full
    /// dataset and of each partition.
    pub fn set_class_balance(
        &mut self,
        total: &BTreeMap<String, usize>,
        train: &BTreeMap<String, usize>,
        test: &BTreeMap<String, usize>,
    ) {
        self.class_balance = total
            .iter()
            .map(|(class, &count)| ClassBalance {
                class: class.clone(),
                total_rows: count,
                train_rows: train.get(class).copied().unwrap_or(0),
                test_rows: test.get(class).copied().unwrap_or(0),
            })
            .collect();
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_split_time(&mut self, elapsed: Duration) {
        self.split_time = elapsed;
    }

    pub fn set_save_time(&mut self, elapsed: Duration) {
        self.save_time = elapsed;
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SPLIT SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Input Rows"),
            Cell::new(self.total_rows),
        ]);

        table.add_row(vec![
            Cell::new("🏋️  Train Rows"),
            Cell::new(format!(
                "{} ({:.1}%)",
                self.train_rows,
                self.fraction_of_total(self.train_rows) * 100.0
            ))
            .fg(Color::Green),
        ]);

        table.add_row(vec![
            Cell::new("🧪 Test Rows"),
            Cell::new(format!(
                "{} ({:.1}%)",
                self.test_rows,
                self.fraction_of_total(self.test_rows) * 100.0
            ))
            .fg(Color::Green),
        ]);

        table.add_row(vec![
            Cell::new("🎯 Stratify Column"),
            Cell::new(&self.stratify_column),
        ]);

        table.add_row(vec![
            Cell::new("🎲 Seed"),
            Cell::new(self.seed),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!(
                "{:.2}s",
                (self.load_time + self.split_time + self.save_time).as_secs_f64()
            )),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.class_balance.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("⚖️").cyan(),
                style("CLASS BALANCE").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());

            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec![
                Cell::new("Class").add_attribute(Attribute::Bold),
                Cell::new("Total").add_attribute(Attribute::Bold),
                Cell::new("Train").add_attribute(Attribute::Bold),
                Cell::new("Test").add_attribute(Attribute::Bold),
            ]);

            for balance in &self.class_balance {
                table.add_row(vec![
                    Cell::new(&balance.class),
                    Cell::new(balance.total_rows),
                    Cell::new(balance.train_rows),
                    Cell::new(balance.test_rows),
                ]);
            }

            for line in table.to_string().lines() {
                println!("    {}", line);
            }
        }

        println!();
    }

    /// Serialize the summary as pretty-printed JSON at `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize split report to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write split report: {}", path.display()))?;
        Ok(())
    }

    fn fraction_of_total(&self, rows: usize) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            rows as f64 / self.total_rows as f64
        }
    }
}
