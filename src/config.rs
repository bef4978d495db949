//! Configuration module for facetr
//!
//! Manages default dataset locations and session defaults.
//! Configuration is stored in the user's config directory
//! (`~/.config/facetr/config.toml` on Linux) and can be overridden by
//! `FACETR_*` environment variables.

use crate::browse::models::{SortDirection, SortKey, TagMode};
use crate::search::normalize::MAX_QUERY_CHARS;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const fn default_max_query_chars() -> usize {
    MAX_QUERY_CHARS
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FacetrConfig {
    /// Default dataset file (JSON array of entries)
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Default taxonomy file (TOML)
    #[serde(default)]
    pub taxonomy: Option<PathBuf>,

    /// Tag mode a new session starts with
    #[serde(default)]
    pub default_tag_mode: TagMode,

    /// Sort key a new session starts with
    #[serde(default)]
    pub default_sort_key: SortKey,

    /// Sort direction a new session starts with
    #[serde(default)]
    pub default_sort_direction: SortDirection,

    /// Cap on a normalized query, in code points
    #[serde(default = "default_max_query_chars")]
    pub max_query_chars: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for FacetrConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            taxonomy: None,
            default_tag_mode: TagMode::default(),
            default_sort_key: SortKey::default(),
            default_sort_direction: SortDirection::default(),
            max_query_chars: MAX_QUERY_CHARS,
            quiet: false,
        }
    }
}

impl FacetrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("facetr").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it with defaults if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(config_path)?;
            tracing::info!(path = %config_path.display(), "created default config");
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("FACETR"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the dataset path, preferring an explicit override
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if neither the override nor the config names a dataset.
    pub fn dataset_path(&self, overridden: Option<&Path>) -> Result<PathBuf, ConfigError> {
        overridden
            .map(Path::to_path_buf)
            .or_else(|| self.dataset.clone())
            .ok_or_else(|| ConfigError::Message("No dataset given and none configured".to_string()))
    }

    /// Resolve the taxonomy path, preferring an explicit override
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if neither the override nor the config names a taxonomy.
    pub fn taxonomy_path(&self, overridden: Option<&Path>) -> Result<PathBuf, ConfigError> {
        overridden
            .map(Path::to_path_buf)
            .or_else(|| self.taxonomy.clone())
            .ok_or_else(|| ConfigError::Message("No taxonomy given and none configured".to_string()))
    }
}
