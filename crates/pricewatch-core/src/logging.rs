//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "PRICEWATCH_LOG";

const LOG_FILE_PREFIX: &str = "pricewatch.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data dir>/pricewatch/logs/`, never to the terminal,
/// since the TUI owns stdout. Log level is controlled by `PRICEWATCH_LOG`.
///
/// # Examples
/// ```bash
/// PRICEWATCH_LOG=debug pricewatch
/// PRICEWATCH_LOG=pricewatch_app=trace pricewatch
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_directive()),
    };
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into()))
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &log_dir,
            LOG_FILE_PREFIX,
        ));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %log_dir.display(),
        "---- pricewatch session ----"
    );
    Ok(())
}

/// Filter used when `PRICEWATCH_LOG` is unset or invalid
fn default_directive() -> &'static str {
    "pricewatch=info,pricewatch_core=info,pricewatch_app=info,pricewatch_tui=info,warn"
}

/// `<data dir>/pricewatch/logs`, or `./pricewatch/logs` without a data dir
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("pricewatch").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = get_log_directory();
        assert!(dir.ends_with("pricewatch/logs"));
    }

    #[test]
    fn test_default_directive_parses() {
        let filter = EnvFilter::try_new(default_directive());
        assert!(filter.is_ok());
    }
}
