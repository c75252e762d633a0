use benchbar::cli::Cli;
use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging with BENCHBAR_LOG environment variable support
    let log_level = std::env::var("BENCHBAR_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = benchbar::cli::run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<benchbar::BenchbarError>() {
            Some(benchbar::BenchbarError::Pattern(_, _)) => 2,
            Some(benchbar::BenchbarError::Io(_)) | Some(benchbar::BenchbarError::Read(_, _)) => 3,
            Some(benchbar::BenchbarError::Chart(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}
