//! The persisted switch that turns diagnostic logging on and off.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use anyhow::{anyhow, Result};

use crate::defaults::{DEFAULT_ENABLED, ENABLED_KEY, SETTINGS_NAMESPACE};
use crate::io::{SettingsStore, YamlSettingsStore};

/// Typed view over the `devlog` settings namespace.
#[derive(Debug, Clone)]
pub struct DevLogSettings<S> {
    store: S,
}

impl DevLogSettings<YamlSettingsStore> {
    /// Settings persisted as `devlog.yaml` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(YamlSettingsStore::new(dir, SETTINGS_NAMESPACE))
    }
}

impl<S: SettingsStore> DevLogSettings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether log writes are allowed. `false` if never set.
    pub fn is_logging_enabled(&self) -> Result<bool> {
        self.store.get_bool(ENABLED_KEY, DEFAULT_ENABLED)
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.store.set_bool(ENABLED_KEY, enabled)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-process settings map for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, bool>>,
    fail_reads: bool,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: bool) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.write() {
            values.insert(key.to_string(), value);
        }
        store
    }

    /// A store whose reads always fail, to exercise fail-safe paths.
    pub fn unreadable() -> Self {
        Self {
            values: RwLock::default(),
            fail_reads: true,
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        if self.fail_reads {
            return Err(anyhow!("settings store is unreadable"));
        }
        let values = self
            .values
            .read()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        Ok(values.get(key).copied().unwrap_or(default))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        (**self).get_bool(key, default)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        (**self).set_bool(key, value)
    }
}
