//! Alias management use cases

use crate::application::resolve::uncomma;
use crate::domain::{Resolver, TagAssignment};
use crate::error::{Result, TagAliasError};
use crate::infrastructure::{AliasRepository, FileSystemRepository};
use regex::Regex;

/// One row of `list` output: an alias and its raw expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasListing {
    pub name: String,
    pub expansion: Vec<String>,
}

/// Match a shell-style glob (`*`, `?`) against a full string.
fn glob_match(pattern: &str, text: &str) -> bool {
    let mut source = String::with_capacity(pattern.len() + 2);
    source.push('^');
    for c in pattern.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(&c.to_string())),
        }
    }
    source.push('$');

    Regex::new(&source)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

/// Service for defining, removing, and inspecting aliases
pub struct AliasService {
    repository: FileSystemRepository,
}

impl AliasService {
    /// Create a new alias service
    pub fn new(repository: FileSystemRepository) -> Self {
        AliasService { repository }
    }

    /// Define an alias. Raw tokens may contain `foo,bar` groups. Tokens
    /// that do not name an existing alias must parse as literal
    /// assignments, so typos like `=2014` fail here rather than at
    /// resolution time.
    pub fn add(&self, name: &str, raw_tokens: &[String]) -> Result<()> {
        let mut store = self.repository.load_store()?;

        let expansion = uncomma(raw_tokens);
        if expansion.is_empty() {
            return Err(TagAliasError::Config(
                "An alias needs at least one expansion token".to_string(),
            ));
        }

        for token in &expansion {
            if !store.contains(token) {
                TagAssignment::parse(token)?;
            }
        }

        store.define(name, expansion)?;
        self.repository.save_store(&store)
    }

    /// Remove aliases by name; absent names are skipped. Returns how many
    /// definitions were actually removed.
    pub fn remove(&self, names: &[String]) -> Result<usize> {
        let mut store = self.repository.load_store()?;

        let mut removed = 0;
        for name in names {
            if store.remove(name) {
                removed += 1;
            }
        }

        if removed > 0 {
            self.repository.save_store(&store)?;
        }
        Ok(removed)
    }

    /// List aliases, optionally filtered by a glob on the name or on any
    /// expansion token.
    pub fn list(
        &self,
        name_filter: Option<&str>,
        token_filter: Option<&str>,
    ) -> Result<Vec<AliasListing>> {
        let store = self.repository.load_store()?;

        let listings = store
            .iter()
            .filter(|def| match name_filter {
                Some(pattern) => glob_match(pattern, &def.name),
                None => true,
            })
            .filter(|def| match token_filter {
                Some(pattern) => def.expansion.iter().any(|t| glob_match(pattern, t)),
                None => true,
            })
            .map(|def| AliasListing {
                name: def.name.clone(),
                expansion: def.expansion.clone(),
            })
            .collect();

        Ok(listings)
    }

    /// Rename an alias, keeping its expansion.
    pub fn rename(&self, old: &str, new: &str) -> Result<()> {
        let mut store = self.repository.load_store()?;
        store.rename(old, new)?;
        self.repository.save_store(&store)
    }

    /// Copy an alias to one or more new names. The copies snapshot the
    /// resolved expansion of the source, so they survive later edits to
    /// the source alias.
    pub fn copy(&self, source: &str, destinations: &[String]) -> Result<()> {
        let mut store = self.repository.load_store()?;
        let config = self.repository.load_config()?;

        if !store.contains(source) {
            return Err(TagAliasError::AliasNotFound(source.to_string()));
        }
        for dest in destinations {
            if store.contains(dest) {
                return Err(TagAliasError::AliasExists(dest.to_string()));
            }
        }

        let assignments =
            Resolver::with_limit(&store, config.limit).resolve(&[source.to_string()])?;
        let expansion: Vec<String> = assignments.iter().map(ToString::to_string).collect();

        for dest in destinations {
            store.define(dest, expansion.clone())?;
        }
        self.repository.save_store(&store)
    }

    /// Resolve every stored alias, reporting the ones that fail. Broken
    /// aliases do not stop the check; each failure is reported with its
    /// error.
    pub fn check(&self) -> Result<Vec<(String, TagAliasError)>> {
        let store = self.repository.load_store()?;
        let config = self.repository.load_config()?;

        let mut failures = Vec::new();
        for def in store.iter() {
            let resolver = Resolver::with_limit(&store, config.limit);
            if let Err(err) = resolver.resolve(&[def.name.clone()]) {
                failures.push((def.name.clone(), err));
            }
        }

        Ok(failures)
    }
}
