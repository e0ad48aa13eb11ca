use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    NoConfigDir,
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Saved theme token ("dark" or "light")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl AppConfig {
    /// Default config file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("thumbgrab");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path`. A missing file yields the default config.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Could not create config directory: {}", e);
            }
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Durable storage for the theme token
pub trait ThemeStore {
    fn load_theme(&self) -> Option<String>;
    fn save_theme(&mut self, token: &str) -> Result<(), ConfigError>;
}

/// Theme storage backed by the on-disk config file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: AppConfig,
}

impl ConfigStore {
    /// Open the store at `path`, falling back to defaults on any read/parse error
    pub fn open(path: PathBuf) -> Self {
        let config = match AppConfig::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                AppConfig::default()
            }
        };
        Self { path, config }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for ConfigStore {
    fn load_theme(&self) -> Option<String> {
        self.config.theme.clone()
    }

    fn save_theme(&mut self, token: &str) -> Result<(), ConfigError> {
        self.config.theme = Some(token.to_string());
        self.config.save_to(&self.path)
    }
}

/// In-memory store, used by tests and when no config directory exists
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub theme: Option<String>,
    pub writes: usize,
}

impl ThemeStore for MemoryStore {
    fn load_theme(&self) -> Option<String> {
        self.theme.clone()
    }

    fn save_theme(&mut self, token: &str) -> Result<(), ConfigError> {
        self.theme = Some(token.to_string());
        self.writes += 1;
        Ok(())
    }
}
