/// Benchmark output line parsing
///
/// Recognizes Go-testing style result lines and extracts the benchmark
/// name and its ns/op timing.

use regex::Regex;
use std::sync::OnceLock;

/// One timing extracted from a single benchmark output line
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub ns_per_op: f64,
}

/// Shape of a result line: literal `Benchmark` prefix, word-character name,
/// hyphenated core count, iteration count, timing, literal `ns/op` marker.
/// Example: `BenchmarkEncodeSmall-8   1000000   123.45 ns/op`
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^Benchmark(\w+)-\d+\s+\d+\s+([\d.]+) ns/op")
            .expect("benchmark line pattern is valid")
    })
}

/// Extract a [`Measurement`] from one line of benchmark output.
///
/// Returns `None` for headers, blank lines, and any other line that does
/// not match the result-line shape. Skipping unmatched lines is the
/// explicit policy, not an error.
pub fn parse_bench_line(line: &str) -> Option<Measurement> {
    let caps = line_pattern().captures(line)?;
    let name = caps[1].to_string();
    let ns_per_op = caps[2].parse().ok()?;
    Some(Measurement { name, ns_per_op })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_result_line() {
        let m = parse_bench_line("BenchmarkEncodeSmall-8   1000000   123.45 ns/op").unwrap();
        assert_eq!(m.name, "EncodeSmall");
        assert_eq!(m.ns_per_op, 123.45);
        assert!(m.ns_per_op > 0.0);
    }

    #[test]
    fn test_parses_underscored_name() {
        let m = parse_bench_line("BenchmarkProtobuf_Login_Marshal-16  500000  210.7 ns/op").unwrap();
        assert_eq!(m.name, "Protobuf_Login_Marshal");
        assert_eq!(m.ns_per_op, 210.7);
    }

    #[test]
    fn test_trailing_fields_are_tolerated() {
        // `go test -benchmem` appends allocation columns after ns/op
        let m = parse_bench_line("BenchmarkBlob_Unmarshal-8  200000  88.2 ns/op  48 B/op  2 allocs/op")
            .unwrap();
        assert_eq!(m.name, "Blob_Unmarshal");
        assert_eq!(m.ns_per_op, 88.2);
    }

    #[test]
    fn test_skips_unrelated_lines() {
        assert_eq!(parse_bench_line("// comment: ignore me"), None);
        assert_eq!(parse_bench_line(""), None);
        assert_eq!(parse_bench_line("goos: linux"), None);
        assert_eq!(parse_bench_line("pkg: github.com/example/bench"), None);
        assert_eq!(parse_bench_line("PASS"), None);
        assert_eq!(parse_bench_line("ok  \tgithub.com/example/bench\t12.3s"), None);
    }

    #[test]
    fn test_requires_full_shape() {
        // missing core-count suffix
        assert_eq!(parse_bench_line("BenchmarkFoo  1000  10.0 ns/op"), None);
        // missing unit marker
        assert_eq!(parse_bench_line("BenchmarkFoo-4  1000  10.0"), None);
        // indented lines are not result lines
        assert_eq!(parse_bench_line("  BenchmarkFoo-4  1000  10.0 ns/op"), None);
    }
}
