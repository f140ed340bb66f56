//! File system repository

use crate::domain::AliasStore;
use crate::error::{Result, TagAliasError};
use crate::infrastructure::{store_file, Config};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for alias persistence
pub trait AliasRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagalias/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagalias/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Load the alias store from .tagalias/aliases.toml
    fn load_store(&self) -> Result<AliasStore>;

    /// Save the alias store to .tagalias/aliases.toml
    fn save_store(&self, store: &AliasStore) -> Result<()>;

    /// Check if .tagalias directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagalias directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of AliasRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the store root by walking up from the current directory.
    /// First checks TAGALIAS_ROOT environment variable, then falls back to
    /// discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGALIAS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_tagalias_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagAliasError::Config(format!(
                    "TAGALIAS_ROOT is set to '{}' but no .tagalias directory found. \
                    Run 'tagalias init' in that directory or unset TAGALIAS_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tagalias_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .tagalias
                    return Err(TagAliasError::NotTagaliasDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .tagalias directory
    fn has_tagalias_dir(path: &Path) -> bool {
        path.join(".tagalias").is_dir()
    }
}

impl AliasRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn load_store(&self) -> Result<AliasStore> {
        store_file::load_from_dir(&self.root)
    }

    fn save_store(&self, store: &AliasStore) -> Result<()> {
        store_file::save_to_dir(store, &self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_tagalias_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tagalias_dir = self.root.join(".tagalias");

        if tagalias_dir.exists() {
            return Err(TagAliasError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&tagalias_dir)?;
        Ok(())
    }
}
