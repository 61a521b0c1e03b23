//! devlog CLI
//!
//! Thin host around the devlog facade for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Turn diagnostic logging on
//! devlog enable
//!
//! # Record a message, optionally tied to an event
//! devlog log info "sync started"
//! devlog log error --event-id 42 "disk full"
//!
//! # Replay everything recorded so far
//! devlog show
//! devlog show --json
//!
//! # Wipe history, turn logging off, check state
//! devlog clear
//! devlog disable
//! devlog status
//! ```

mod log_cmd;
mod switch_cmd;
mod terminal_output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devlog::{DevLogConfig, Severity};
use tracing::error;

use terminal_output::note_error;

#[derive(Parser)]
#[command(name = "devlog")]
#[command(about = "devlog: gated diagnostic message log")]
#[command(version)]
struct Cli {
    /// Directory holding the database and settings (overrides DEVLOG_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allow messages to be recorded
    Enable,
    /// Stop recording messages (history is kept)
    Disable,
    /// Show the switch state, database location, and message count
    Status,
    /// Record one message
    Log {
        /// error, warn, info, debug, or a raw numeric severity
        severity: Severity,
        /// Application event the message relates to (0 = none)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        event_id: i64,
        /// Message text
        message: String,
    },
    /// Print stored messages, oldest first
    Show {
        /// Print raw rows as JSON instead of formatted lines
        #[arg(long)]
        json: bool,
    },
    /// Delete all stored messages
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = DevLogConfig::from_env();
    if let Some(home) = &cli.home {
        config = config.with_data_dir(home);
    }

    match &config.log_dir {
        Some(dir) => devlog_logging::init_logger(dir, &config.log_level),
        None => devlog_logging::init_console_logger(&config.log_level),
    };

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = ?err, "Command failed");
            note_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &DevLogConfig) -> Result<()> {
    match command {
        Commands::Enable => switch_cmd::set_enabled(config, true),
        Commands::Disable => switch_cmd::set_enabled(config, false),
        Commands::Status => switch_cmd::status(config),
        Commands::Log {
            severity,
            event_id,
            message,
        } => log_cmd::record(config, severity, event_id, &message),
        Commands::Show { json } => log_cmd::show(config, json),
        Commands::Clear => log_cmd::clear(config),
    }
}
