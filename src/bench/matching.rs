use std::collections::HashMap;
use tracing::debug;

/// Benchmark names present in both suites after stripping each suite's
/// label prefix, sorted ascending with no duplicates.
///
/// Suite A keys are the candidates: a name is included iff re-attaching
/// `prefix_b` resolves to a key of suite B. A name present only in suite B
/// is never surfaced. Keys that do not carry `prefix_a` participate
/// unchanged.
pub fn matched_names(
    prefix_a: &str,
    suite_a: &HashMap<String, f64>,
    prefix_b: &str,
    suite_b: &HashMap<String, f64>,
) -> Vec<String> {
    let mut names: Vec<String> = suite_a
        .keys()
        .map(|k| k.strip_prefix(prefix_a).unwrap_or(k).to_string())
        .filter(|n| suite_b.contains_key(&format!("{}{}", prefix_b, n)))
        .collect();
    names.sort();
    names.dedup();
    debug!("{} benchmarks matched across suites", names.len());
    names
}
