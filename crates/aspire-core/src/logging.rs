//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "ASPIRE_LOG";

const LOG_FILE_NAME: &str = "aspire.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/aspire/logs/` because stdout belongs
/// to the terminal UI. Log level is controlled by `ASPIRE_LOG`.
///
/// # Examples
/// ```bash
/// ASPIRE_LOG=debug cargo run
/// ASPIRE_LOG=aspire_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    tracing_subscriber::registry()
        .with(env_filter())
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
    tracing::info!("Aspire landing page starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Build the filter from `ASPIRE_LOG`, defaulting to info for our crates
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("aspire_landing=info,aspire_app=info,aspire_tui=info,warn")
    })
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("aspire").join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_file_lives_in_aspire_logs() {
        let path = get_current_log_file();
        assert!(path.ends_with("aspire/logs/aspire.log"));
    }

    #[test]
    #[serial]
    fn test_env_filter_reads_env_var() {
        std::env::set_var(LOG_ENV_VAR, "aspire_app=trace");
        let filter = env_filter().to_string();
        std::env::remove_var(LOG_ENV_VAR);

        assert!(filter.contains("aspire_app=trace"));
    }

    #[test]
    #[serial]
    fn test_env_filter_default() {
        std::env::remove_var(LOG_ENV_VAR);
        let filter = env_filter().to_string();

        assert!(filter.contains("aspire_app=info"));
        assert!(filter.contains("warn"));
    }
}
