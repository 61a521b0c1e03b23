//! CLI switch subcommands: turn diagnostic logging on or off and report state.

use anyhow::{Context, Result};
use devlog::{DevLogConfig, DevLogSettings, DevLogger};

use crate::terminal_output::note_success;

pub fn set_enabled(config: &DevLogConfig, enabled: bool) -> Result<()> {
    DevLogSettings::in_dir(&config.data_dir)
        .set_enabled(enabled)
        .context("Failed to save the logging switch")?;

    if enabled {
        note_success("Diagnostic logging enabled");
    } else {
        note_success("Diagnostic logging disabled");
    }
    Ok(())
}

pub fn status(config: &DevLogConfig) -> Result<()> {
    let logger = DevLogger::from_config(config);

    // Reading would create the database; a missing file simply holds nothing.
    let stored = if logger.db_path().exists() {
        logger.rows().context("Failed to read stored messages")?.len()
    } else {
        0
    };

    let state = if logger.is_enabled() { "enabled" } else { "disabled" };
    println!("Diagnostic logging: {state}");
    println!("Database: {}", logger.db_path().display());
    println!("Stored messages: {stored}");
    Ok(())
}
