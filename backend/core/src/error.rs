use std::path::PathBuf;

use thiserror::Error;

/// Error type for every devlog operation.
///
/// Logging is never load-bearing for the host, so callers doing
/// logging-adjacent work are expected to discard these rather than
/// propagate them further.
#[derive(Debug, Error)]
pub enum DevLogError {
    /// The database file could not be opened or its schema prepared.
    #[error("log storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An insert or delete failed after the store was opened.
    #[error("log write failed: {0}")]
    WriteFailure(#[source] rusqlite::Error),

    /// A query failed after the store was opened.
    #[error("log read failed: {0}")]
    ReadFailure(#[source] rusqlite::Error),

    /// The enablement flag could not be read.
    #[error("logger settings unreadable: {0:#}")]
    ConfigReadFailure(anyhow::Error),
}

impl DevLogError {
    pub fn storage_unavailable(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DevLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_unavailable_names_the_path() {
        let err = DevLogError::storage_unavailable(
            "/nowhere/devlog_v1.db",
            rusqlite::Error::InvalidQuery,
        );
        let text = err.to_string();
        assert!(text.contains("/nowhere/devlog_v1.db"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_failure_keeps_context_chain() {
        let inner = anyhow::anyhow!("permission denied").context("reading devlog.yaml");
        let err = DevLogError::ConfigReadFailure(inner);
        let text = err.to_string();
        assert!(text.contains("reading devlog.yaml"));
        assert!(text.contains("permission denied"));
    }
}
