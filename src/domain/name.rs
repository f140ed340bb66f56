//! Alias name validation

use crate::error::{Result, TagAliasError};
use regex::Regex;
use std::sync::OnceLock;

/// Names the downstream query language reserves; aliasing them would make
/// queries ambiguous. Mixed case (`aNd`, `Or`) stays allowed.
const RESERVED_NAMES: [&str; 20] = [
    ".", "..", "and", "or", "not", "eq", "ne", "lt", "gt", "le", "ge", "AND", "OR", "NOT", "EQ",
    "NE", "LT", "GT", "LE", "GE",
];

/// Regex for valid names: no whitespace, none of the ,/=()<> characters
fn name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^\s,/=()<>]+$").unwrap())
}

/// Validate an alias name, returning `InvalidName` on violation.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(name, "name is empty"));
    }

    if RESERVED_NAMES.contains(&name) {
        return Err(invalid(name, "conflicts with a reserved query keyword"));
    }

    if !name_regex().is_match(name) {
        return Err(invalid(
            name,
            "contains whitespace or one of the characters ,/=()<>",
        ));
    }

    Ok(())
}

fn invalid(name: &str, reason: &str) -> TagAliasError {
    TagAliasError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
