//! Runtime configuration for hosts embedding the devlog facade.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_DB_FILE, DEFAULT_LOG_LEVEL, DEFAULT_TIME_FORMAT};
use crate::io::{config_dir, data_dir_from};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevLogConfig {
    /// Directory holding the database and the settings namespace
    pub data_dir: PathBuf,
    /// SQLite database holding the `messages` table
    pub db_path: PathBuf,
    /// Directory for the process's own rolling tracing logs, if any
    pub log_dir: Option<PathBuf>,
    /// Level filter for the process's own tracing output
    pub log_level: String,
    /// strftime pattern used when rendering stored rows
    pub time_format: String,
}

impl Default for DevLogConfig {
    fn default() -> Self {
        Self::in_dir(config_dir())
    }
}

impl DevLogConfig {
    /// All state rooted at `dir`, everything else at defaults.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let data_dir = dir.as_ref().to_path_buf();
        Self {
            db_path: data_dir.join(DEFAULT_DB_FILE),
            data_dir,
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Same as [`DevLogConfig::from_env`] with a custom lookup (useful for testing).
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::in_dir(data_dir_from(lookup("DEVLOG_HOME")));
        if let Some(db) = lookup("DEVLOG_DB") {
            config.db_path = PathBuf::from(db);
        }
        config.log_dir = lookup("DEVLOG_LOG_DIR").map(PathBuf::from);
        if let Some(level) = lookup("RUST_LOG") {
            config.log_level = level;
        }
        if let Some(format) = lookup("DEVLOG_TIME_FORMAT") {
            config.time_format = format;
        }
        config
    }

    /// Replace the data directory, moving the database along with it unless
    /// it was pointed elsewhere explicitly.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let default_db = self.data_dir.join(DEFAULT_DB_FILE);
        self.data_dir = dir.as_ref().to_path_buf();
        if self.db_path == default_db {
            self.db_path = self.data_dir.join(DEFAULT_DB_FILE);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn in_dir_places_database_inside() {
        let config = DevLogConfig::in_dir("/var/lib/app");
        assert_eq!(config.db_path, PathBuf::from("/var/lib/app/devlog_v1.db"));
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn env_overrides_apply() {
        let vars = env(&[
            ("DEVLOG_HOME", "/srv/devlog"),
            ("DEVLOG_DB", "/tmp/other.db"),
            ("DEVLOG_LOG_DIR", "/tmp/logs"),
            ("RUST_LOG", "debug"),
            ("DEVLOG_TIME_FORMAT", "%H:%M"),
        ]);
        let config = DevLogConfig::from_env_with(|k| vars.get(k).cloned());
        assert_eq!(config.data_dir, PathBuf::from("/srv/devlog"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.time_format, "%H:%M");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let vars = env(&[("DEVLOG_HOME", "/srv/devlog"), ("RUST_LOG", "  ")]);
        let config = DevLogConfig::from_env_with(|k| vars.get(k).cloned());
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn blank_home_matches_default_resolution() {
        let vars = env(&[("DEVLOG_HOME", "")]);
        let config = DevLogConfig::from_env_with(|k| vars.get(k).cloned());
        assert_eq!(config.data_dir, crate::io::default_dir());
    }

    #[test]
    fn with_data_dir_moves_default_database() {
        let config = DevLogConfig::in_dir("/a").with_data_dir("/b");
        assert_eq!(config.db_path, PathBuf::from("/b/devlog_v1.db"));

        let mut pinned = DevLogConfig::in_dir("/a");
        pinned.db_path = PathBuf::from("/elsewhere.db");
        let pinned = pinned.with_data_dir("/b");
        assert_eq!(pinned.db_path, PathBuf::from("/elsewhere.db"));
    }
}
