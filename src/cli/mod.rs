pub mod charts;
pub mod formatter;

use crate::bench::{aggregate, collect, matched_names};
use crate::report::{svg, ComparisonReport, ComparisonRow};
use crate::cli::charts::GroupedBarChart;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "benchbar",
    version,
    about = "Comparative benchmark charts from Go-style benchmark output",
    long_about = "Benchbar reads `go test -bench` style output files from two benchmark \
                  suites, averages repeated runs per benchmark, matches benchmarks across \
                  the suites by prefix-normalized name, and renders a grouped bar chart \
                  on a logarithmic time axis."
)]
pub struct Cli {
    /// Glob pattern for suite A output files
    #[arg(long, value_name = "GLOB")]
    pub suite_a_glob: String,

    /// Glob pattern for suite B output files
    #[arg(long, value_name = "GLOB")]
    pub suite_b_glob: String,

    /// Name prefix stripped from suite A benchmark names
    #[arg(long, default_value = "", value_name = "PREFIX")]
    pub suite_a_prefix: String,

    /// Name prefix re-attached when resolving suite B benchmark names
    #[arg(long, default_value = "", value_name = "PREFIX")]
    pub suite_b_prefix: String,

    /// Legend label for suite A (defaults to the prefix)
    #[arg(long, value_name = "LABEL")]
    pub suite_a_label: Option<String>,

    /// Legend label for suite B (defaults to the prefix)
    #[arg(long, value_name = "LABEL")]
    pub suite_b_label: Option<String>,

    /// Write the chart as an SVG file instead of drawing it in the terminal
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Summary output format (text, json, csv)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Terminal chart width in columns
    #[arg(long, default_value = "60")]
    pub width: usize,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run the whole pipeline: collect both suites, aggregate, match, render.
///
/// `json`/`csv` formats replace the chart and table with machine-readable
/// output; `--output` persists the SVG chart regardless of format.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};

    let label_a = cli
        .suite_a_label
        .clone()
        .unwrap_or_else(|| default_label(&cli.suite_a_prefix, "suite A"));
    let label_b = cli
        .suite_b_label
        .clone()
        .unwrap_or_else(|| default_label(&cli.suite_b_prefix, "suite B"));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );

    spinner.set_message(format!("Collecting {}...", cli.suite_a_glob));
    let groups_a = collect(&cli.suite_a_glob)
        .with_context(|| format!("collecting suite A ({})", cli.suite_a_glob))?;

    spinner.set_message(format!("Collecting {}...", cli.suite_b_glob));
    let groups_b = collect(&cli.suite_b_glob)
        .with_context(|| format!("collecting suite B ({})", cli.suite_b_glob))?;

    spinner.finish_and_clear();

    debug!(
        "collected {} suite A and {} suite B benchmarks",
        groups_a.len(),
        groups_b.len()
    );

    let suite_a = aggregate(groups_a);
    let suite_b = aggregate(groups_b);

    let matched = matched_names(&cli.suite_a_prefix, &suite_a, &cli.suite_b_prefix, &suite_b);
    if cli.verbose > 0 {
        eprintln!("Matched {} benchmarks across suites", matched.len());
    }

    let mut rows = Vec::with_capacity(matched.len());
    for name in &matched {
        // Matched names re-prefix to valid keys in both suites
        let a = suite_a[&format!("{}{}", cli.suite_a_prefix, name)];
        let b = suite_b[&format!("{}{}", cli.suite_b_prefix, name)];
        rows.push(ComparisonRow::new(name, a, b));
    }

    let title = format!(
        "Benchmark Comparison: {} vs {} (averaged over multiple runs)",
        label_b, label_a
    );
    let mut chart = GroupedBarChart::new(&title, &label_a, &label_b).with_width(cli.width);
    for row in &rows {
        chart.add_pair(&row.name, row.a_ns_per_op, row.b_ns_per_op);
    }

    if let Some(path) = &cli.output {
        svg::write_svg(path, &chart)
            .with_context(|| format!("writing chart to {}", path.display()))?;
        eprintln!("Wrote {}", path.display());
    }

    let report = ComparisonReport::new(&label_a, &label_b, rows);
    match cli.format.as_str() {
        "json" => report.print_json()?,
        "csv" => report.print_csv(),
        _ => {
            if cli.output.is_none() {
                println!("{}", chart.render());
            }
            report.print_table();
        }
    }

    Ok(())
}

fn default_label(prefix: &str, fallback: &str) -> String {
    let trimmed = prefix.trim_end_matches('_');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
