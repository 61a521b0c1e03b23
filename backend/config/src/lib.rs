//! `devlog-config` — runtime configuration for the devlog diagnostic logger.
//!
//! Provides:
//! - Data directory resolution (`DEVLOG_HOME` > `~/.devlog`)
//! - Typed runtime config with environment overrides
//! - Key/value settings persistence (YAML file per namespace, atomic writes)
//! - The `enabled` switch that gates every log write

pub mod defaults;
pub mod io;
pub mod schema;
pub mod settings;

pub use io::{config_dir, default_dir, SettingsStore, YamlSettingsStore};
pub use schema::DevLogConfig;
pub use settings::{DevLogSettings, MemorySettingsStore};
