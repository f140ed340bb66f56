//! Initialize alias store use case

use crate::domain::AliasStore;
use crate::error::Result;
use crate::infrastructure::{AliasRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new alias store at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Create .tagalias directory with default config and an empty store
    repo.initialize()?;
    repo.save_config(&Config::new())?;
    repo.save_store(&AliasStore::new())?;

    println!("Initialized tagalias store at {}", path.display());

    Ok(())
}
