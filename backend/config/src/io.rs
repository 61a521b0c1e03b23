//! Settings persistence: one YAML map per namespace, written atomically.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_yaml::Value;
use tracing::{debug, info};

use crate::defaults::DEFAULT_DIR_NAME;

/// Resolve the devlog data directory.
/// Priority: `DEVLOG_HOME` env > `~/.devlog/` > `./.devlog`
pub fn config_dir() -> PathBuf {
    data_dir_from(std::env::var("DEVLOG_HOME").ok())
}

/// Data directory for a `DEVLOG_HOME` value; blank counts as unset.
pub(crate) fn data_dir_from(home: Option<String>) -> PathBuf {
    match home.filter(|dir| !dir.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => default_dir(),
    }
}

/// `~/.devlog`, or `./.devlog` when there is no home directory.
pub fn default_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DEFAULT_DIR_NAME),
        None => PathBuf::from(DEFAULT_DIR_NAME),
    }
}

/// Key/value store for persisted settings.
pub trait SettingsStore: Send + Sync {
    /// Read a boolean, returning `default` when the key was never written.
    fn get_bool(&self, key: &str, default: bool) -> Result<bool>;

    /// Persist a boolean under `key`.
    fn set_bool(&self, key: &str, value: bool) -> Result<()>;
}

/// Settings namespace backed by `<dir>/<namespace>.yaml`.
///
/// A missing file reads as "nothing set". Every write rewrites the whole
/// file through a temp file and a rename.
#[derive(Debug, Clone)]
pub struct YamlSettingsStore {
    path: PathBuf,
}

impl YamlSettingsStore {
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{namespace}.yaml")),
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, Value>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Settings file does not exist; using defaults");
            return Ok(BTreeMap::new());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings YAML at: {}", self.path.display()))
    }

    fn store(&self, values: &BTreeMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let yaml = serde_yaml::to_string(values).context("Failed to serialize settings to YAML")?;

        let tmp_path = self.path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml.as_bytes())
            .with_context(|| format!("Failed to write temp settings: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!("Failed to rename temp settings to: {}", self.path.display())
        })?;

        Ok(())
    }
}

impl SettingsStore for YamlSettingsStore {
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.load()?.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(value)) => Ok(*value),
            Some(other) => bail!(
                "setting '{key}' in {} is not a boolean: {other:?}",
                self.path.display()
            ),
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), Value::Bool(value));
        self.store(&values)?;
        info!(path = %self.path.display(), key, value, "Wrote setting");
        Ok(())
    }
}
