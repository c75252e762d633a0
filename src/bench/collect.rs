/// Benchmark output collection
///
/// Walks a glob pattern and groups every extracted ns/op timing by raw
/// benchmark name across all matched files.

use crate::bench::parse::parse_bench_line;
use crate::{BenchbarError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::debug;

/// Read every file matched by `pattern` and group ns/op timings by raw
/// benchmark name.
///
/// A pattern matching zero files yields an empty map, not an error.
/// Unmatched lines are skipped. A file that cannot be opened or read
/// aborts the walk with an error naming the file.
pub fn collect(pattern: &str) -> Result<HashMap<String, Vec<f64>>> {
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

    let paths =
        glob::glob(pattern).map_err(|e| BenchbarError::Pattern(pattern.to_string(), e))?;

    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            BenchbarError::Read(path, e.into_error())
        })?;

        let file = File::open(&path).map_err(|e| BenchbarError::Read(path.clone(), e))?;
        let reader = BufReader::new(file);

        let mut extracted = 0usize;
        for line in reader.lines() {
            let line = line.map_err(|e| BenchbarError::Read(path.clone(), e))?;
            if let Some(m) = parse_bench_line(&line) {
                groups.entry(m.name).or_default().push(m.ns_per_op);
                extracted += 1;
            }
        }
        debug!("{}: {} measurements", path.display(), extracted);
    }

    Ok(groups)
}
