//! Default names and values shared by the devlog crates.

/// Directory under the user's home holding all devlog state.
pub const DEFAULT_DIR_NAME: &str = ".devlog";

/// SQLite file holding the `messages` table.
pub const DEFAULT_DB_FILE: &str = "devlog_v1.db";

/// Settings namespace for the logger switch. Persisted as `<namespace>.yaml`.
pub const SETTINGS_NAMESPACE: &str = "devlog";

/// Key of the enablement flag inside [`SETTINGS_NAMESPACE`].
pub const ENABLED_KEY: &str = "enabled";

/// Logging stays off until someone turns it on.
pub const DEFAULT_ENABLED: bool = false;

/// strftime pattern for the timestamp prefix of each rendered line.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Level for the process's own tracing output.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
