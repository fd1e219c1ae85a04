//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "agrihub.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_dir>/logs/` since the TUI owns stdout.
/// Log level is controlled by the `AGRIHUB_LOG` environment variable.
///
/// # Examples
/// ```bash
/// AGRIHUB_LOG=debug cargo run
/// AGRIHUB_LOG=agrihub_app=trace cargo run
/// ```
pub fn init(data_dir: &Path) -> Result<()> {
    let log_dir = log_directory(data_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via AGRIHUB_LOG
    let env_filter = EnvFilter::try_from_env("AGRIHUB_LOG").unwrap_or_else(|_| {
        EnvFilter::new("agrihub=info,agrihub_app=info,agrihub_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("AgriHub starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Default data directory (`$XDG_DATA_HOME/agrihub` or platform equivalent)
pub fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("agrihub")
}

/// Get the log directory path under a data directory
pub fn log_directory(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}
