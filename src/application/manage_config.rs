//! Config management use case

use crate::error::{Result, TagAliasError};
use crate::infrastructure::{AliasRepository, Config, FileSystemRepository};

/// Service for managing store configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "limit" => Ok(config.limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TagAliasError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: limit, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "limit" => {
                let limit: usize = value.parse().map_err(|_| {
                    TagAliasError::Config(format!(
                        "Invalid limit '{}': expected a positive integer",
                        value
                    ))
                })?;
                if limit == 0 {
                    return Err(TagAliasError::Config(
                        "Invalid limit '0': the expansion limit must be at least 1".to_string(),
                    ));
                }
                config.limit = limit;
            }
            "created" => {
                return Err(TagAliasError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TagAliasError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
