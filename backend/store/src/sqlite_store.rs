//! SQLite-backed append-only message table.
//!
//! A `LogStore` wraps one connection. Callers are expected to hold it for a
//! single unit of work and drop it (or call [`LogStore::close`]) right after,
//! so the file is never kept open between log calls. Rows are only appended
//! or wiped in bulk; nothing is updated in place.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use devlog_core::{Clock, DevLogError, LogRow, Result, Severity, SystemClock};
use rusqlite::{params, Connection};
use tracing::debug;

use crate::schema::{self, SCHEMA_VERSION, TABLE_NAME};

/// How long a connection waits on a lock held by another writer.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct LogStore {
    conn: Connection,
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl LogStore {
    /// Create or open the database at `path`, stamping rows with the system clock.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, Arc::new(SystemClock))
    }

    /// Create or open the database at `path` with an explicit time source.
    pub fn open_with(path: impl AsRef<Path>, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::open_versioned(path, clock, SCHEMA_VERSION)
    }

    /// Open expecting a specific schema version. A database written under any
    /// other version is wiped.
    pub fn open_versioned(
        path: impl AsRef<Path>,
        clock: Arc<dyn Clock>,
        version: i32,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| DevLogError::storage_unavailable(&path, e))?;
        }

        let mut conn =
            Connection::open(&path).map_err(|e| DevLogError::storage_unavailable(&path, e))?;
        Self::configure(&mut conn, version)
            .map_err(|e| DevLogError::storage_unavailable(&path, e))?;

        debug!(path = %path.display(), "Log store opened");
        Ok(Self { conn, path, clock })
    }

    /// Open a private in-memory database (for tests).
    pub fn in_memory(clock: Arc<dyn Clock>) -> Result<Self> {
        let path = PathBuf::from(":memory:");
        let mut conn = Connection::open_in_memory()
            .map_err(|e| DevLogError::storage_unavailable(&path, e))?;
        schema::prepare(&mut conn, SCHEMA_VERSION)
            .map_err(|e| DevLogError::storage_unavailable(&path, e))?;
        Ok(Self { conn, path, clock })
    }

    fn configure(conn: &mut Connection, version: i32) -> rusqlite::Result<()> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        // Readers never block the appending connection.
        let _mode: String = conn.query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))?;
        schema::prepare(conn, version)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Schema version recorded in the open database.
    pub fn schema_version(&self) -> Result<i32> {
        schema::on_disk_version(&self.conn).map_err(DevLogError::ReadFailure)
    }

    /// Insert one row stamped with the current time.
    pub fn append(&self, severity: Severity, correlation_id: i64, message: &str) -> Result<()> {
        let time = self.clock.now_millis();
        self.conn
            .execute(
                &format!("INSERT INTO {TABLE_NAME} (time, sev, evId, msg) VALUES (?1, ?2, ?3, ?4)"),
                params![time, severity.code(), correlation_id, message],
            )
            .map_err(DevLogError::WriteFailure)?;
        Ok(())
    }

    /// Every row, oldest first.
    ///
    /// Insertion order is taken from the implicit `rowid`. Runs as one
    /// statement, so it sees a consistent snapshot even while other
    /// connections append.
    pub fn read_all(&self) -> Result<Vec<LogRow>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT time, sev, evId, msg FROM {TABLE_NAME} ORDER BY rowid ASC"
            ))
            .map_err(DevLogError::ReadFailure)?;

        let rows = stmt
            .query_map([], row_to_log_row)
            .map_err(DevLogError::ReadFailure)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(DevLogError::ReadFailure)?;
        Ok(rows)
    }

    /// Delete every row. Returns how many were removed.
    ///
    /// Not coordinated with other connections: a row appended concurrently
    /// may or may not survive.
    pub fn clear(&self) -> Result<usize> {
        let n = self
            .conn
            .execute(&format!("DELETE FROM {TABLE_NAME}"), [])
            .map_err(DevLogError::WriteFailure)?;
        debug!(path = %self.path.display(), removed = n, "Log store cleared");
        Ok(n)
    }

    /// Release the connection, reporting any error SQLite raises on close.
    /// Dropping the store releases it too, silently.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, e)| DevLogError::storage_unavailable(path, e))
    }
}

// ---------------------------------------------------------------------------
// Row deserialization helper
// ---------------------------------------------------------------------------

fn row_to_log_row(row: &rusqlite::Row) -> rusqlite::Result<LogRow> {
    let timestamp: Option<i64> = row.get(0)?;
    let severity: Option<i64> = row.get(1)?;
    let correlation_id: Option<i64> = row.get(2)?;
    let message: Option<String> = row.get(3)?;

    Ok(LogRow {
        timestamp: timestamp.unwrap_or_default(),
        severity: Severity::from_code(severity.unwrap_or_default()),
        correlation_id: correlation_id.unwrap_or_default(),
        message: message.unwrap_or_default(),
    })
}
