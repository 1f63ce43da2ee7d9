//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/qotd/config.toml)
//! 3. Environment variables (QOTD_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "QOTD";

/// How many remote records a sync cycle fetches by default
pub const DEFAULT_FETCH_LIMIT: usize = 5;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory for data storage (quotes file, sync state)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Remote quote server base URL (optional)
    #[serde(default)]
    pub server_url: Option<String>,

    /// Whether sync is enabled
    #[serde(default)]
    pub sync_enabled: bool,

    /// Number of remote records fetched per sync cycle
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            server_url: None,
            sync_enabled: false,
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (QOTD_DATA_DIR, QOTD_SERVER_URL, QOTD_SYNC_ENABLED)
    /// 2. Config file (~/.config/qotd/config.toml or QOTD_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // QOTD_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // QOTD_SERVER_URL
        if let Ok(val) = std::env::var(format!("{}_SERVER_URL", ENV_PREFIX)) {
            self.server_url = if val.is_empty() { None } else { Some(val) };
        }

        // QOTD_SYNC_ENABLED
        if let Ok(val) = std::env::var(format!("{}_SYNC_ENABLED", ENV_PREFIX)) {
            self.sync_enabled = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with QOTD_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("qotd")
            .join("config.toml")
    }

    /// Get the path to the persisted quote collection
    pub fn quotes_path(&self) -> PathBuf {
        self.data_dir.join("quotes.json")
    }

    /// Get the path to the persisted selected-category filter
    pub fn selected_category_path(&self) -> PathBuf {
        self.data_dir.join("selected_category")
    }

    /// Get the path to the sync state file
    pub fn sync_state_path(&self) -> PathBuf {
        self.data_dir.join("sync_state.json")
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("qotd")
}

fn default_fetch_limit() -> usize {
    DEFAULT_FETCH_LIMIT
}
