//! Configuration file management for busyblocks
//!
//! Values live in ~/.busyblocks/config.toml and can be overridden by
//! environment variables, which in turn are overridden by command-line flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::database::config::{get_config_dir, get_default_db_path};
use crate::env::paths as env_paths;

const LST_PATH_KEY: &str = "lst-path";
const DB_PATH_KEY: &str = "db-path";

/// Configuration structure matching config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lst: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<PathBuf>,
}

impl Config {
    /// Get the config file path (~/.busyblocks/config.toml)
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::get_config_path()?)
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: impl AsRef<Path>) -> Result<()> {
        let config_path = config_path.as_ref();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))
    }

    /// Get a config value by key
    pub fn get(&self, key: &str) -> Option<String> {
        let path = match key {
            LST_PATH_KEY | "lst_path" => self.paths.lst.as_ref(),
            DB_PATH_KEY | "db_path" => self.paths.db.as_ref(),
            _ => None,
        };
        path.map(|p| p.display().to_string())
    }

    /// Set a config value by key
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            LST_PATH_KEY | "lst_path" => self.paths.lst = Some(PathBuf::from(value)),
            DB_PATH_KEY | "db_path" => self.paths.db = Some(PathBuf::from(value)),
            _ => anyhow::bail!("Unknown config key: {key} (expected {LST_PATH_KEY} or {DB_PATH_KEY})"),
        }
        Ok(())
    }

    /// Unset (remove) a config value by key
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            LST_PATH_KEY | "lst_path" => self.paths.lst = None,
            DB_PATH_KEY | "db_path" => self.paths.db = None,
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }

    /// Get all config values as key-value pairs
    pub fn list(&self) -> Vec<(String, String)> {
        [LST_PATH_KEY, DB_PATH_KEY]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Pick the report path: flag, then environment value, then config file.
    pub fn resolve_lst_path(
        &self,
        flag: Option<PathBuf>,
        env_value: Option<String>,
    ) -> Result<PathBuf> {
        flag.or_else(|| non_empty(env_value))
            .or_else(|| self.paths.lst.clone())
            .with_context(|| {
                format!(
                    "No report path given: pass --lst, set {}, or run `busyblocks config set {LST_PATH_KEY} <path>`",
                    env_paths::LST_PATH
                )
            })
    }

    /// Pick the database path: flag, then environment value, then config
    /// file, then ~/.busyblocks/schedule.db.
    pub fn resolve_db_path(
        &self,
        flag: Option<PathBuf>,
        env_value: Option<String>,
    ) -> Result<PathBuf> {
        match flag
            .or_else(|| non_empty(env_value))
            .or_else(|| self.paths.db.clone())
        {
            Some(path) => Ok(path),
            None => get_default_db_path(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<PathBuf> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Report path from flag, `BUSYBLOCKS_LST` or config.toml
pub fn resolve_lst_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    let config = Config::load()?;
    config.resolve_lst_path(flag, std::env::var(env_paths::LST_PATH).ok())
}

/// Database path from flag, `BUSYBLOCKS_DB`, config.toml or the default
pub fn resolve_db_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    let config = Config::load()?;
    config.resolve_db_path(flag, std::env::var(env_paths::DB_PATH).ok())
}
