//! Alias resolution use case

use crate::domain::{Resolver, TagAssignment};
use crate::error::Result;
use crate::infrastructure::{AliasRepository, FileSystemRepository};
use regex::Regex;
use std::sync::OnceLock;

fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[\s,]+").unwrap())
}

/// Split raw arguments, which may mix single tokens and `foo,bar,baz`
/// groups, into uniform single tokens.
pub fn uncomma(raw: &[String]) -> Vec<String> {
    let joined = raw.join(" ");
    separator_regex()
        .split(&joined)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// The resolution frontend: turns raw user tokens into the final
/// assignment list for a downstream tagging operation.
pub struct ResolveService {
    repository: FileSystemRepository,
}

impl ResolveService {
    /// Create a new resolve service
    pub fn new(repository: FileSystemRepository) -> Self {
        ResolveService { repository }
    }

    /// Resolve raw tokens against the persisted store. `limit` overrides
    /// the configured expansion-step cap for this call only.
    pub fn execute(&self, raw: &[String], limit: Option<usize>) -> Result<Vec<TagAssignment>> {
        let store = self.repository.load_store()?;
        let config = self.repository.load_config()?;

        let tokens = uncomma(raw);
        let resolver = Resolver::with_limit(&store, limit.unwrap_or(config.limit));
        resolver.resolve(&tokens)
    }
}
