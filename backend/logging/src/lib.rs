//! Operational logging for devlog hosts.
//!
//! This is the process's own `tracing` output (console plus rolling NDJSON
//! files), separate from the diagnostic `messages` table the facade writes.

pub mod logger;

pub use logger::{init_console_logger, init_logger};
