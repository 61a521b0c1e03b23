//! Layout of the `messages` table and its drop-and-recreate versioning.
//!
//! The version lives in SQLite's `PRAGMA user_version`. Any mismatch between
//! the on-disk version and the expected one discards the table: the log is
//! diagnostic, not authoritative, so losing it on a layout change is fine.

use rusqlite::{Connection, OptionalExtension, TransactionBehavior};
use tracing::{debug, info};

/// Layout version written by this build.
pub const SCHEMA_VERSION: i32 = 1;

pub const TABLE_NAME: &str = "messages";

pub const COL_TIME: &str = "time";
pub const COL_SEVERITY: &str = "sev";
pub const COL_EVENT_ID: &str = "evId";
pub const COL_MESSAGE: &str = "msg";

fn create_table_sql() -> String {
    format!(
        "CREATE TABLE {TABLE_NAME} (
             {COL_TIME}     INTEGER,
             {COL_SEVERITY} INTEGER,
             {COL_EVENT_ID} INTEGER,
             {COL_MESSAGE}  TEXT
         )"
    )
}

/// Bring the database to `expected` version, creating or recreating the table.
pub(crate) fn prepare(conn: &mut Connection, expected: i32) -> rusqlite::Result<()> {
    // Immediate so two processes opening a fresh file do not both create.
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let on_disk: i32 = tx.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    let exists = tx
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [TABLE_NAME],
            |_| Ok(()),
        )
        .optional()?
        .is_some();

    if exists && on_disk == expected {
        return tx.commit();
    }

    if exists {
        info!(
            from = on_disk,
            to = expected,
            "Schema version changed; dropping {TABLE_NAME}"
        );
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {TABLE_NAME}"))?;
    }

    let ddl = create_table_sql();
    debug!(query = %ddl, "Creating table");
    tx.execute_batch(&ddl)?;
    tx.pragma_update(None, "user_version", expected)?;
    tx.commit()
}

/// Version currently recorded in the database header.
pub(crate) fn on_disk_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}
