//! User configuration, stored as TOML in the config directory.
//!
//! Missing keys fill in from defaults, so a partial file (or none at all)
//! always yields a usable config. The first `load()` writes the defaults
//! out so users have a file to edit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::platform;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Catalog source — a local TOML file; the bundled catalog is the fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the user catalog file.
    /// Defaults to `$XDG_CONFIG_HOME/podshelf/podcasts.toml`.
    #[serde(default = "default_catalog_toml")]
    pub catalog_toml: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Number of card columns in the grid.
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u16,
    #[serde(default = "default_show_keys_bar")]
    pub show_keys_bar: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_toml: default_catalog_toml(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            grid_columns: default_grid_columns(),
            show_keys_bar: default_show_keys_bar(),
        }
    }
}

fn default_catalog_toml() -> PathBuf {
    platform::config_dir().join("podcasts.toml")
}

fn default_grid_columns() -> u16 {
    3
}

fn default_show_keys_bar() -> bool {
    true
}

impl Config {
    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read from `path`, writing the defaults there first when the file
    /// does not exist yet.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("wrote default config to {}", path.display());
            return Ok(config);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.ui.grid_columns, 3);
        assert!(config.ui.show_keys_bar);
        assert!(config
            .catalog
            .catalog_toml
            .ends_with("podshelf/podcasts.toml"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[ui]\ngrid_columns = 2\n").unwrap();
        assert_eq!(config.ui.grid_columns, 2);
        assert!(config.ui.show_keys_bar);
        assert!(config.catalog.catalog_toml.ends_with("podcasts.toml"));
    }

    #[test]
    fn first_load_writes_defaults_then_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let first = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first.ui.grid_columns, 3);

        let mut edited = first;
        edited.ui.grid_columns = 5;
        edited.save_to(&path).unwrap();
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.ui.grid_columns, 5);
    }
}
