//! Structured Logger
//!
//! Wraps `tracing` to provide console output, daily-rolling NDJSON files,
//! and environment-based level control.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix for the rolling log: `devlog.log.YYYY-MM-DD`.
const LOG_FILE_PREFIX: &str = "devlog.log";

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global structured logger with a console layer on stderr
/// and a rolling JSON file layer in `log_dir`.
///
/// Falls back to console-only output if `log_dir` cannot be used. Returns
/// `false` if a global subscriber was already installed.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) -> bool {
    let file_appender = match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir.as_ref())
    {
        Ok(appender) => appender,
        Err(err) => {
            let installed = init_console_logger(level);
            tracing::warn!(
                dir = %log_dir.as_ref().display(),
                error = %err,
                "Rolling log file unavailable; logging to console only"
            );
            return installed;
        }
    };

    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_ansi(false);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
}

/// Console-only variant for hosts without a log directory.
pub fn init_console_logger(level: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .is_ok()
}
