//! Configuration management for dockalias

pub mod schema;

pub use schema::Config;

use crate::error::{DockaliasError, DockaliasResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File name of the project-local configuration
pub const LOCAL_CONFIG_FILE: &str = ".dockalias.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dockalias")
            .join("config.toml")
    }

    /// Find `.dockalias.toml` in `start` or its nearest ancestor
    ///
    /// A relative `start` is resolved against the current directory first,
    /// so `-C .` walks the same ancestors as no `-C` at all.
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        let start = std::fs::canonicalize(start)
            .or_else(|_| std::path::absolute(start))
            .unwrap_or_else(|_| start.to_path_buf());

        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load the global config, overlay the local one, then deserialize
    ///
    /// Missing global config means defaults. Tables are merged key by key
    /// with local values winning; arrays (including `[[alias]]` lists) are
    /// replaced wholesale. The global file is checked on its own first so
    /// errors name the file that holds the bad value.
    pub async fn load_merged(&self, local: Option<&Path>) -> DockaliasResult<Config> {
        let mut merged = toml::Table::new();

        if self.config_path.exists() {
            merged = read_table(&self.config_path).await?;
            deserialize(merged.clone(), &self.config_path)?;
        } else {
            debug!("Config file not found, using defaults");
        }

        match local {
            Some(path) => {
                debug!("Merging local config: {}", path.display());
                merge_tables(&mut merged, read_table(path).await?);
                deserialize(merged, path)
            }
            None => deserialize(merged, &self.config_path),
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_table(path: &Path) -> DockaliasResult<toml::Table> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| DockaliasError::io(format!("reading config from {}", path.display()), e))?;

    content
        .parse::<toml::Table>()
        .map_err(|e| DockaliasError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

fn deserialize(table: toml::Table, source: &Path) -> DockaliasResult<Config> {
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| DockaliasError::ConfigInvalid {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (Some(slot), value) => *slot = value,
            (None, value) => {
                base.insert(key, value);
            }
        }
    }
}
