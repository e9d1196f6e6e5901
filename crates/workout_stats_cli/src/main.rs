use std::io::{self, Write};

use workout_stats_cli::{Config, default_packages, load_packages, log_filter, run_batch};

fn main() -> anyhow::Result<()> {
    // Log level from `WORKOUT_STATS_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(log_filter(&config.log_level))
        .init();
    tracing::debug!("workout_stats: log filter: {}", config.log_level);

    let packages = match &config.input {
        Some(path) => load_packages(path)?,
        None => default_packages(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_batch(&packages, config.format, &mut out)?;
    out.flush()?;

    tracing::info!(
        processed = report.processed,
        failed = report.failed,
        "workout_stats: batch finished"
    );
    if report.failed > 0 {
        anyhow::bail!("{} of {} packages failed", report.failed, packages.len());
    }
    Ok(())
}
