use anyhow::Result;
use std::path::Path;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

pub const LOG_PREFIX: &str = "tally";

/// Send tracing output to a daily-rolling file. The terminal belongs to the TUI,
/// so nothing is written to stdout. `RUST_LOG` takes precedence over `log_level`.
pub fn enable_logging(log_dir: &Path, log_level: &str) -> Result<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .build(log_dir)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={log_level}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(appender)
        .init();
    Ok(())
}
