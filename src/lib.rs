pub mod bench;
pub mod cli;
pub mod report;

pub use crate::bench::{aggregate, collect, matched_names, parse_bench_line, Measurement};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchbarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern '{0}': {1}")]
    Pattern(String, glob::PatternError),

    #[error("Failed to read {}: {}", .0.display(), .1)]
    Read(std::path::PathBuf, std::io::Error),

    #[error("Chart output error: {0}")]
    Chart(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BenchbarError>;
