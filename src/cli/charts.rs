/// ASCII chart visualization for terminal output
/// Draws grouped bar pairs on a log10 time axis, one row per suite

use crate::cli::formatter::format_duration;
use colored::*;

/// Grouped bar chart for terminal display
///
/// One bar pair per benchmark, suite A above suite B, bar lengths scaled
/// by log10 of the mean ns/op. Built explicitly by the caller and rendered
/// on demand; holds no global state.
pub struct GroupedBarChart {
    title: String,
    series: (String, String),
    data: Vec<(String, f64, f64)>,
    width: usize,
    show_values: bool,
}

impl GroupedBarChart {
    pub fn new(title: &str, series_a: &str, series_b: &str) -> Self {
        Self {
            title: title.to_string(),
            series: (series_a.to_string(), series_b.to_string()),
            data: Vec::new(),
            width: 60,
            show_values: true,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(10);
        self
    }

    pub fn add_pair(&mut self, label: &str, a: f64, b: f64) {
        self.data.push((label.to_string(), a, b));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> (&str, &str) {
        (&self.series.0, &self.series.1)
    }

    pub fn pairs(&self) -> &[(String, f64, f64)] {
        &self.data
    }

    /// Whole-decade log10 axis bounds covering every positive value.
    ///
    /// Degenerate inputs (no bars, all values non-positive) fall back to
    /// the first decade so rendering still produces a frame.
    pub fn axis_bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (_, a, b) in &self.data {
            for v in [*a, *b] {
                if v > 0.0 {
                    lo = lo.min(v);
                    hi = hi.max(v);
                }
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 1.0);
        }
        let lo = lo.log10().floor();
        let mut hi = hi.log10().ceil();
        if hi <= lo {
            hi = lo + 1.0;
        }
        (lo, hi)
    }

    fn scaled(&self, value: f64, lo: f64, hi: f64) -> usize {
        if value <= 0.0 {
            return 0;
        }
        let t = (value.log10() - lo) / (hi - lo);
        (t.clamp(0.0, 1.0) * self.width as f64) as usize
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        // Title and legend
        output.push_str(&format!("\n{}\n", self.title.bold().cyan()));
        output.push_str(&"─".repeat(self.width + 20));
        output.push('\n');
        output.push_str(&format!(
            "  {} {}   {} {}\n\n",
            "■".blue(),
            self.series.0,
            "■".green(),
            self.series.1
        ));

        if self.data.is_empty() {
            output.push_str("  (no matching benchmarks)\n");
            return output;
        }

        let (lo, hi) = self.axis_bounds();
        let max_label_len = self
            .data
            .iter()
            .map(|(l, _, _)| l.len())
            .max()
            .unwrap_or(10);

        for (label, a, b) in &self.data {
            let bar_a = self.bar(*a, lo, hi);
            let bar_b = self.bar(*b, lo, hi);

            let formatted_label = format!("{:width$}", label, width = max_label_len);
            let blank_label = " ".repeat(max_label_len);

            if self.show_values {
                output.push_str(&format!(
                    "  {} │{} {}\n",
                    formatted_label.yellow(),
                    bar_a.blue(),
                    format_duration(*a)
                ));
                output.push_str(&format!(
                    "  {} │{} {}\n",
                    blank_label,
                    bar_b.green(),
                    format_duration(*b)
                ));
            } else {
                output.push_str(&format!("  {} │{}\n", formatted_label.yellow(), bar_a.blue()));
                output.push_str(&format!("  {} │{}\n", blank_label, bar_b.green()));
            }
        }

        output.push_str(&format!(
            "\n  log scale: {} to {}\n",
            format_duration(10f64.powf(lo)),
            format_duration(10f64.powf(hi))
        ));

        output
    }

    fn bar(&self, value: f64, lo: f64, hi: f64) -> String {
        let filled = self.scaled(value, lo, hi);
        format!("{}{}", "█".repeat(filled), "░".repeat(self.width - filled))
    }
}
