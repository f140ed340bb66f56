//! Alias store persistence
//!
//! Definitions live in `.tagalias/aliases.toml` as a single `[aliases]`
//! table mapping each name to its raw expansion tokens. Inner alias
//! references are stored unexpanded so the file round-trips losslessly.

use crate::domain::AliasStore;
use crate::error::{Result, TagAliasError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    aliases: BTreeMap<String, Vec<String>>,
}

impl StoreFile {
    fn from_store(store: &AliasStore) -> Self {
        StoreFile {
            aliases: store
                .iter()
                .map(|def| (def.name.clone(), def.expansion.clone()))
                .collect(),
        }
    }

    fn into_store(self) -> Result<AliasStore> {
        let mut store = AliasStore::new();
        for (name, expansion) in self.aliases {
            store.define(&name, expansion)?;
        }
        Ok(store)
    }
}

/// Load the alias store from .tagalias/aliases.toml in the given directory
pub fn load_from_dir(path: &Path) -> Result<AliasStore> {
    let store_path = path.join(".tagalias").join("aliases.toml");

    let contents = fs::read_to_string(&store_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TagAliasError::NotTagaliasDirectory(path.to_path_buf())
        } else {
            TagAliasError::Io(e)
        }
    })?;

    let file: StoreFile = toml::from_str(&contents)
        .map_err(|e| TagAliasError::Config(format!("Failed to parse aliases.toml: {}", e)))?;

    file.into_store()
}

/// Save the alias store to .tagalias/aliases.toml in the given directory
pub fn save_to_dir(store: &AliasStore, path: &Path) -> Result<()> {
    let tagalias_dir = path.join(".tagalias");
    let store_path = tagalias_dir.join("aliases.toml");

    if !tagalias_dir.exists() {
        fs::create_dir(&tagalias_dir)?;
    }

    let contents = toml::to_string_pretty(&StoreFile::from_store(store))
        .map_err(|e| TagAliasError::Config(format!("Failed to serialize aliases: {}", e)))?;

    fs::write(&store_path, contents)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn round_trips_definitions_unexpanded() {
        let temp = TempDir::new().unwrap();

        let mut store = AliasStore::new();
        store.define("pets", tokens(&["cat", "dog"])).unwrap();
        // Inner alias reference must survive as a reference, not as its expansion
        store
            .define("archive", tokens(&["pets", "year=2014"]))
            .unwrap();

        save_to_dir(&store, temp.path()).unwrap();
        let loaded = load_from_dir(temp.path()).unwrap();

        assert_eq!(loaded, store);
        assert_eq!(
            loaded.lookup("archive").unwrap().expansion,
            tokens(&["pets", "year=2014"])
        );
    }

    #[test]
    fn empty_store_round_trips() {
        let temp = TempDir::new().unwrap();

        save_to_dir(&AliasStore::new(), temp.path()).unwrap();
        let loaded = load_from_dir(temp.path()).unwrap();

        assert!(loaded.is_empty());
    }

    #[test]
    fn missing_file_is_not_a_tagalias_directory() {
        let temp = TempDir::new().unwrap();

        let result = load_from_dir(temp.path());
        assert!(matches!(
            result.unwrap_err(),
            TagAliasError::NotTagaliasDirectory(_)
        ));
    }

    #[test]
    fn rejects_invalid_name_in_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".tagalias");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("aliases.toml"), "[aliases]\n\"a b\" = [\"x\"]\n").unwrap();

        let result = load_from_dir(temp.path());
        assert!(matches!(
            result.unwrap_err(),
            TagAliasError::InvalidName { .. }
        ));
    }
}
