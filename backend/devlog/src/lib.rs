//! `devlog`: a diagnostic logger for host applications.
//!
//! Severity-tagged messages, optionally tied to an application event id, are
//! appended to a local SQLite table while a persisted switch is on, and can be
//! replayed later as display lines. Logging failures are reported to the
//! caller but are never meant to take the host down with them.
//!
//! ```no_run
//! use devlog::{DevLogConfig, DevLogger};
//!
//! let logger = DevLogger::from_config(&DevLogConfig::from_env());
//! let _ = logger.info("sync started");
//! let _ = logger.error_event(42, "disk full");
//! for line in logger.messages().unwrap_or_default() {
//!     println!("{line}");
//! }
//! ```

pub mod format;
pub mod logger;

pub use devlog_config::{DevLogConfig, DevLogSettings, MemorySettingsStore, SettingsStore, YamlSettingsStore};
pub use devlog_core::{Clock, DevLogError, LogRow, ManualClock, Result, Severity, SystemClock};
pub use devlog_store::{LogStore, SCHEMA_VERSION};
pub use format::LineFormatter;
pub use logger::DevLogger;
