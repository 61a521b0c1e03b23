//! The logger facade host applications call into.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use devlog_config::{DevLogConfig, DevLogSettings, SettingsStore};
use devlog_core::{Clock, DevLogError, LogRow, Result, Severity, SystemClock};
use devlog_store::LogStore;
use tracing::warn;

use crate::format::LineFormatter;

/// Severity-leveled diagnostic logger.
///
/// The enablement switch is read once, when the logger is built, and that
/// snapshot holds for the logger's lifetime. While disabled, the write calls
/// return immediately without touching storage; [`DevLogger::messages`] and
/// [`DevLogger::clear`] keep working either way.
///
/// Every operation opens the database, does one unit of work and releases it
/// again, so nothing is held open between calls. All calls block on disk I/O.
pub struct DevLogger {
    db_path: PathBuf,
    enabled: bool,
    clock: Arc<dyn Clock>,
    formatter: LineFormatter,
}

impl DevLogger {
    /// Build a logger over `db_path`, gated by `settings`.
    ///
    /// If the switch cannot be read the logger starts disabled.
    pub fn new<S: SettingsStore>(settings: &DevLogSettings<S>, db_path: impl AsRef<Path>) -> Self {
        let db_path = db_path.as_ref();
        Self::try_new(settings, db_path).unwrap_or_else(|err| {
            warn!(error = %err, "Diagnostic logging disabled");
            Self::with_flag(db_path, false)
        })
    }

    /// Like [`DevLogger::new`], but surfaces an unreadable switch as
    /// [`DevLogError::ConfigReadFailure`].
    pub fn try_new<S: SettingsStore>(
        settings: &DevLogSettings<S>,
        db_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let enabled = settings
            .is_logging_enabled()
            .map_err(DevLogError::ConfigReadFailure)?;
        Ok(Self::with_flag(db_path, enabled))
    }

    /// Logger with the switch state given directly.
    pub fn with_flag(db_path: impl AsRef<Path>, enabled: bool) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            enabled,
            clock: Arc::new(SystemClock),
            formatter: LineFormatter::default(),
        }
    }

    /// Logger for a host configured through [`DevLogConfig`]: the switch is
    /// read from the YAML settings in `data_dir`.
    pub fn from_config(config: &DevLogConfig) -> Self {
        let settings = DevLogSettings::in_dir(&config.data_dir);
        Self::new(&settings, &config.db_path)
            .with_formatter(LineFormatter::new(config.time_format.clone()))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_formatter(mut self, formatter: LineFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn error(&self, message: &str) -> Result<()> {
        self.log(Severity::Error, 0, message)
    }

    pub fn error_event(&self, event_id: i64, message: &str) -> Result<()> {
        self.log(Severity::Error, event_id, message)
    }

    pub fn warn(&self, message: &str) -> Result<()> {
        self.log(Severity::Warning, 0, message)
    }

    pub fn warn_event(&self, event_id: i64, message: &str) -> Result<()> {
        self.log(Severity::Warning, event_id, message)
    }

    pub fn info(&self, message: &str) -> Result<()> {
        self.log(Severity::Info, 0, message)
    }

    pub fn info_event(&self, event_id: i64, message: &str) -> Result<()> {
        self.log(Severity::Info, event_id, message)
    }

    pub fn debug(&self, message: &str) -> Result<()> {
        self.log(Severity::Debug, 0, message)
    }

    pub fn debug_event(&self, event_id: i64, message: &str) -> Result<()> {
        self.log(Severity::Debug, event_id, message)
    }

    /// Append one row at any severity, including unrecognized codes.
    /// A no-op while disabled.
    pub fn log(&self, severity: Severity, event_id: i64, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let severity = severity.normalized();
        self.with_store(|store| store.append(severity, event_id, message))
    }

    /// Wipe the stored history. Allowed even while disabled.
    pub fn clear(&self) -> Result<()> {
        self.with_store(|store| store.clear().map(|_| ()))
    }

    /// Every stored row rendered as a display line, oldest first.
    /// Re-reads storage on each call.
    pub fn messages(&self) -> Result<Vec<String>> {
        let rows = self.rows()?;
        Ok(rows
            .iter()
            .map(|row| self.formatter.format_row(row))
            .collect())
    }

    /// Every stored row, oldest first, unrendered.
    pub fn rows(&self) -> Result<Vec<LogRow>> {
        self.with_store(|store| store.read_all())
    }

    /// Open the store for a single unit of work. The connection is released
    /// before returning, on success and failure alike.
    fn with_store<T>(&self, work: impl FnOnce(&LogStore) -> Result<T>) -> Result<T> {
        let store = LogStore::open_with(&self.db_path, Arc::clone(&self.clock))?;
        let out = work(&store)?;
        Ok(settle(out, store.close()))
    }
}

/// The work already committed, so a failed close is only worth a warning.
fn settle<T>(out: T, closed: Result<()>) -> T {
    if let Err(err) = closed {
        warn!(error = %err, "Failed to close log store after completed operation");
    }
    out
}
