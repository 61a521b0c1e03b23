//! CLI message subcommands: record, replay, and wipe diagnostic messages.

use anyhow::{Context, Result};
use devlog::{DevLogConfig, DevLogger, LineFormatter, Severity};
use tracing::debug;

use crate::terminal_output::{note_success, note_warn, paint_line, supports_color};

pub fn record(
    config: &DevLogConfig,
    severity: Severity,
    event_id: i64,
    message: &str,
) -> Result<()> {
    let logger = DevLogger::from_config(config);
    if !logger.is_enabled() {
        note_warn("Diagnostic logging is disabled; message not recorded (run `devlog enable`)");
        return Ok(());
    }

    logger
        .log(severity, event_id, message)
        .context("Failed to record message")?;
    debug!(%severity, event_id, "Recorded message");
    Ok(())
}

pub fn show(config: &DevLogConfig, json: bool) -> Result<()> {
    let logger = DevLogger::from_config(config);

    if json {
        let rows = logger.rows().context("Failed to read stored messages")?;
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if !supports_color() {
        for line in logger.messages().context("Failed to read stored messages")? {
            println!("{line}");
        }
        return Ok(());
    }

    // Same lines, painted per severity, so the rows are needed alongside.
    let rows = logger.rows().context("Failed to read stored messages")?;
    let formatter = LineFormatter::new(config.time_format.clone());
    for row in &rows {
        println!("{}", paint_line(row.severity, &formatter.format_row(row)));
    }
    Ok(())
}

pub fn clear(config: &DevLogConfig) -> Result<()> {
    DevLogger::from_config(config)
        .clear()
        .context("Failed to clear stored messages")?;
    note_success("Stored messages cleared");
    Ok(())
}
