//! File logging via `tracing`
//!
//! The TUI owns the terminal and headless mode owns stdout, so log output
//! goes to a daily file under `<data_local_dir>/codecracker/logs/`. Set
//! `CODECRACKER_LOG` to an `EnvFilter` directive to change verbosity, e.g.
//! `CODECRACKER_LOG=codecracker_client=trace`.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the filter directive
pub const LOG_ENV_VAR: &str = "CODECRACKER_LOG";

/// Prefix of the daily files (`codecracker.log.YYYY-MM-DD`)
const LOG_FILE_PREFIX: &str = "codecracker.log";

/// Used when `CODECRACKER_LOG` is unset or unparseable
const DEFAULT_FILTER: &str =
    "codecracker=info,codecracker_app=info,codecracker_client=info,codecracker_tui=info,warn";

/// Install the global subscriber. Call once, before anything logs.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let writer = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "CodeCracker starting"
    );

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("codecracker")
        .join("logs")
}
