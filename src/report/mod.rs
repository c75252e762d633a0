use crate::cli::formatter::format_duration;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

pub mod svg;

/// One matched benchmark with both suites' mean timings
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub a_ns_per_op: f64,
    pub b_ns_per_op: f64,
    /// How many times faster suite B is than suite A
    pub speedup: f64,
}

impl ComparisonRow {
    pub fn new(name: &str, a_ns_per_op: f64, b_ns_per_op: f64) -> Self {
        Self {
            name: name.to_string(),
            a_ns_per_op,
            b_ns_per_op,
            speedup: a_ns_per_op / b_ns_per_op,
        }
    }
}

/// Side-by-side summary of the matched benchmark set
pub struct ComparisonReport {
    label_a: String,
    label_b: String,
    rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    pub fn new(label_a: &str, label_b: &str, rows: Vec<ComparisonRow>) -> Self {
        Self {
            label_a: label_a.to_string(),
            label_b: label_b.to_string(),
            rows,
        }
    }

    pub fn to_table(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "== Benchmark Comparison ==".bold().cyan()));

        if self.rows.is_empty() {
            output.push_str("No common benchmarks between the two suites.\n");
            return output;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            "Benchmark",
            self.label_a.as_str(),
            self.label_b.as_str(),
            "Speedup",
        ]);

        for row in &self.rows {
            table.add_row(vec![
                row.name.clone(),
                format_duration(row.a_ns_per_op),
                format_duration(row.b_ns_per_op),
                format!("{:.2}x", row.speedup),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    pub fn to_json(&self) -> crate::Result<String> {
        let json = serde_json::json!({
            "suite_a": self.label_a,
            "suite_b": self.label_b,
            "benchmarks": &self.rows,
        });
        Ok(serde_json::to_string_pretty(&json)?)
    }

    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "benchmark,{}_ns_per_op,{}_ns_per_op,speedup\n",
            column_slug(&self.label_a),
            column_slug(&self.label_b)
        ));
        for row in &self.rows {
            output.push_str(&format!(
                "{},{},{},{:.4}\n",
                row.name, row.a_ns_per_op, row.b_ns_per_op, row.speedup
            ));
        }
        output
    }

    pub fn print_table(&self) {
        println!("{}", self.to_table());
    }

    pub fn print_json(&self) -> crate::Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }

    pub fn print_csv(&self) {
        print!("{}", self.to_csv());
    }
}

fn column_slug(label: &str) -> String {
    label.to_lowercase().replace([' ', '-'], "_")
}
