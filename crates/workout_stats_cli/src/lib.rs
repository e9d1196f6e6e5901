//! Batch driver: reads sensor packages, prints one summary line per package.

use std::io::Write;
use std::path::Path;

use tracing_subscriber::EnvFilter;
use workout_stats::{Package, SummaryMessage};

pub mod config;
pub mod error;

pub use config::{Config, OutputFormat};
pub use error::{CliError, CliResult};

const DEFAULT_LOG_FILTER: &str = "info";

/// Packages processed when no batch file is configured.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load a JSON array of packages from `path`.
pub fn load_packages(path: &Path) -> CliResult<Vec<Package>> {
    let raw = std::fs::read_to_string(path)?;
    let packages: Vec<Package> = serde_json::from_str(&raw)?;
    if packages.is_empty() {
        return Err(CliError::Config(format!(
            "{} contains no packages",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), count = packages.len(), "loaded packages");
    Ok(packages)
}

/// Build the log filter from a level/directive string, falling back to `info` when it
/// does not parse.
pub fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
}

/// Process `packages` in order, writing one line per successful package to `out`.
///
/// A package that fails to build is logged and skipped; the count lands in
/// [`BatchReport::failed`]. Write failures abort the batch.
pub fn run_batch<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> CliResult<BatchReport> {
    let mut report = BatchReport::default();
    for (index, package) in packages.iter().enumerate() {
        match package.read() {
            Ok(training) => {
                write_summary(out, &training.summary(), format)?;
                report.processed += 1;
            }
            Err(err) => {
                tracing::error!(index, workout_type = %package.workout_type, %err, "skipping package");
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

fn write_summary<W: Write>(
    out: &mut W,
    summary: &SummaryMessage,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{summary}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(summary)?)?,
    }
    Ok(())
}
