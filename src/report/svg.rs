/// SVG chart output
///
/// Hand-written SVG: vertical grouped bars on a log10 time axis with
/// decade gridlines, rotated category labels, and a legend. No plotting
/// dependency.

use crate::cli::charts::GroupedBarChart;
use crate::cli::formatter::format_duration;
use crate::{BenchbarError, Result};
use std::path::Path;

const SVG_W: f64 = 1120.0;
const SVG_H: f64 = 560.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 150.0;

const COLOR_A: &str = "#4C78A8";
const COLOR_B: &str = "#54A24B";

/// Render `chart` as SVG and write it to `path`.
pub fn write_svg(path: &Path, chart: &GroupedBarChart) -> Result<()> {
    let svg = render_svg(chart);
    std::fs::write(path, svg)
        .map_err(|e| BenchbarError::Chart(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

/// Render `chart` as a standalone SVG document.
///
/// An empty chart still renders a complete frame with zero bars.
pub fn render_svg(chart: &GroupedBarChart) -> String {
    let plot_w = SVG_W - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = SVG_H - MARGIN_TOP - MARGIN_BOTTOM;
    let plot_bottom = MARGIN_TOP + plot_h;

    let (lo, hi) = chart.axis_bounds();
    let y_of = |v: f64| -> f64 {
        if v <= 0.0 {
            return plot_bottom;
        }
        let t = ((v.log10() - lo) / (hi - lo)).clamp(0.0, 1.0);
        plot_bottom - t * plot_h
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SVG_W}\" height=\"{SVG_H}\" \
         font-family=\"monospace,Arial,sans-serif\">\n"
    ));
    out.push_str(&format!(
        "<rect width=\"{SVG_W}\" height=\"{SVG_H}\" fill=\"#FAFAFA\"/>\n"
    ));

    // Title
    out.push_str(&format!(
        "<text x=\"{:.1}\" y=\"30\" text-anchor=\"middle\" font-size=\"15\" \
         font-weight=\"bold\" fill=\"#222\">{}</text>\n",
        SVG_W / 2.0,
        escape(chart.title())
    ));

    // Plot frame
    out.push_str(&format!(
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" \
         fill=\"white\" stroke=\"#DDD\" stroke-width=\"1\"/>\n",
        MARGIN_LEFT, MARGIN_TOP, plot_w, plot_h
    ));

    // Horizontal gridlines at 1/2/5 ticks per decade
    for tick in log_ticks(lo, hi) {
        let ty = y_of(tick);
        out.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{ty:.1}\" x2=\"{:.1}\" y2=\"{ty:.1}\" \
             stroke=\"#EEE\" stroke-width=\"1\" stroke-dasharray=\"4 3\"/>\n",
            MARGIN_LEFT,
            MARGIN_LEFT + plot_w
        ));
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" \
             fill=\"#888\">{}</text>\n",
            MARGIN_LEFT - 6.0,
            ty + 3.5,
            format_duration(tick)
        ));
    }

    // Y-axis title
    out.push_str(&format!(
        "<text x=\"18\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\" fill=\"#555\" \
         transform=\"rotate(-90 18 {:.1})\">Average ns/op (log scale)</text>\n",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    ));

    // Bars, one offset pair per matched benchmark
    let pairs = chart.pairs();
    if !pairs.is_empty() {
        let group_w = plot_w / pairs.len() as f64;
        let bar_w = (group_w * 0.35).min(48.0);

        for (i, (label, a, b)) in pairs.iter().enumerate() {
            let cx = MARGIN_LEFT + (i as f64 + 0.5) * group_w;

            let ya = y_of(*a);
            out.push_str(&format!(
                "<rect class=\"bar-a\" x=\"{:.1}\" y=\"{ya:.1}\" width=\"{bar_w:.1}\" \
                 height=\"{:.1}\" fill=\"{COLOR_A}\"/>\n",
                cx - bar_w,
                plot_bottom - ya
            ));

            let yb = y_of(*b);
            out.push_str(&format!(
                "<rect class=\"bar-b\" x=\"{cx:.1}\" y=\"{yb:.1}\" width=\"{bar_w:.1}\" \
                 height=\"{:.1}\" fill=\"{COLOR_B}\"/>\n",
                plot_bottom - yb
            ));

            // Rotated category label
            out.push_str(&format!(
                "<text x=\"{cx:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" \
                 fill=\"#333\" transform=\"rotate(-45 {cx:.1} {:.1})\">{}</text>\n",
                plot_bottom + 16.0,
                plot_bottom + 16.0,
                escape(label)
            ));
        }
    }

    // Legend
    let (series_a, series_b) = chart.series();
    let lx = MARGIN_LEFT + plot_w - 180.0;
    let ly = MARGIN_TOP + 12.0;
    out.push_str(&format!(
        "<rect x=\"{lx:.1}\" y=\"{ly:.1}\" width=\"12\" height=\"12\" fill=\"{COLOR_A}\"/>\n"
    ));
    out.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"#333\">{}</text>\n",
        lx + 18.0,
        ly + 10.0,
        escape(series_a)
    ));
    out.push_str(&format!(
        "<rect x=\"{lx:.1}\" y=\"{:.1}\" width=\"12\" height=\"12\" fill=\"{COLOR_B}\"/>\n",
        ly + 18.0
    ));
    out.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"#333\">{}</text>\n",
        lx + 18.0,
        ly + 28.0,
        escape(series_b)
    ));

    out.push_str("</svg>\n");
    out
}

/// 1/2/5 ticks per decade over the whole-decade range [10^lo, 10^hi]
fn log_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut p = lo as i32;
    while 10f64.powi(p) <= 10f64.powf(hi) {
        for m in [1.0, 2.0, 5.0] {
            let v = m * 10f64.powi(p);
            if v <= 10f64.powf(hi) * 1.0001 {
                ticks.push(v);
            }
        }
        p += 1;
    }
    ticks
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_bar_pair_per_benchmark() {
        let mut chart = GroupedBarChart::new("Comparison", "Protobuf", "Rdgproto");
        chart.add_pair("Login", 120.0, 60.0);
        chart.add_pair("Blob", 900.0, 450.0);

        let svg = render_svg(&chart);
        assert_eq!(svg.matches("class=\"bar-a\"").count(), 2);
        assert_eq!(svg.matches("class=\"bar-b\"").count(), 2);
        assert!(svg.contains("rotate(-45"));
        assert!(svg.contains("Comparison"));
    }

    #[test]
    fn test_empty_chart_has_frame_and_zero_bars() {
        let chart = GroupedBarChart::new("Empty", "A", "B");
        let svg = render_svg(&chart);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Empty"));
        assert_eq!(svg.matches("class=\"bar-a\"").count(), 0);
        assert_eq!(svg.matches("class=\"bar-b\"").count(), 0);
    }

    #[test]
    fn test_log_ticks_cover_decades() {
        let ticks = log_ticks(1.0, 3.0);
        assert_eq!(ticks, vec![10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0]);
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut chart = GroupedBarChart::new("a < b", "A", "B");
        chart.add_pair("Enc<ode>", 10.0, 20.0);
        let svg = render_svg(&chart);
        assert!(svg.contains("a &lt; b"));
        assert!(svg.contains("Enc&lt;ode&gt;"));
    }
}
