//! Alias resolution: depth-first expansion with cycle detection

use crate::domain::assignment::TagAssignment;
use crate::domain::store::AliasStore;
use crate::error::{Result, TagAliasError};

/// Default cap on expansion steps for one resolution.
pub const DEFAULT_EXPANSION_LIMIT: usize = 4096;

/// Expands a list of input tokens into a flat, deduplicated list of tag
/// assignments, borrowing the store read-only.
///
/// Each token is first checked against the store; a hit is expanded
/// recursively, a miss is parsed as a literal assignment. A name
/// re-entered while still on the active expansion path is a cycle and
/// aborts the whole resolution; the same name reached from sibling
/// expansions is fine. An expansion-step counter bounds the total work so
/// that wide acyclic graphs cannot blow up the cost.
pub struct Resolver<'a> {
    store: &'a AliasStore,
    limit: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a AliasStore) -> Self {
        Resolver::with_limit(store, DEFAULT_EXPANSION_LIMIT)
    }

    pub fn with_limit(store: &'a AliasStore, limit: usize) -> Self {
        Resolver { store, limit }
    }

    /// Resolve input tokens into the final assignment list.
    ///
    /// Order is first-occurrence order across the depth-first expansion;
    /// duplicates (by full equality) keep their first occurrence. Any
    /// failure aborts the entire resolution with no partial result.
    pub fn resolve(&self, tokens: &[String]) -> Result<Vec<TagAssignment>> {
        let mut flattened = Vec::new();
        let mut path: Vec<String> = Vec::new();
        let mut steps = 0usize;

        for token in tokens {
            self.expand(token, &mut path, &mut flattened, &mut steps)?;
        }
        debug_assert!(path.is_empty());

        // Deduplicate, keeping first occurrence
        let mut assignments: Vec<TagAssignment> = Vec::with_capacity(flattened.len());
        for assignment in flattened {
            if !assignments.contains(&assignment) {
                assignments.push(assignment);
            }
        }

        Ok(assignments)
    }

    fn expand(
        &self,
        token: &str,
        path: &mut Vec<String>,
        out: &mut Vec<TagAssignment>,
        steps: &mut usize,
    ) -> Result<()> {
        *steps += 1;
        if *steps > self.limit {
            return Err(TagAliasError::ExpansionLimitExceeded { limit: self.limit });
        }

        let Some(definition) = self.store.lookup(token) else {
            out.push(TagAssignment::parse(token)?);
            return Ok(());
        };

        if let Some(first) = path.iter().position(|name| name == token) {
            // Chain from the first occurrence down to the repeat
            let mut chain = path[first..].to_vec();
            chain.push(token.to_string());
            return Err(TagAliasError::Cycle { chain });
        }

        path.push(token.to_string());
        for inner in &definition.expansion {
            self.expand(inner, path, out, steps)?;
        }
        path.pop();

        Ok(())
    }
}
