//! Configuration management

use crate::domain::DEFAULT_EXPANSION_LIMIT;
use crate::error::{Result, TagAliasError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cap on expansion steps per resolution
    pub limit: usize,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            limit: DEFAULT_EXPANSION_LIMIT,
            created: Utc::now(),
        }
    }

    /// Load config from .tagalias/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tagalias").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagAliasError::NotTagaliasDirectory(path.to_path_buf())
            } else {
                TagAliasError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagAliasError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagalias/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tagalias_dir = path.join(".tagalias");
        let config_path = tagalias_dir.join("config.toml");

        if !tagalias_dir.exists() {
            fs::create_dir(&tagalias_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagAliasError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
