//! Error types for tagalias

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagalias application
#[derive(Debug, Error)]
pub enum TagAliasError {
    #[error("Not a tagalias directory: {0}")]
    NotTagaliasDirectory(PathBuf),

    #[error("Invalid alias name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid token '{token}': {reason}")]
    InvalidToken { token: String, reason: String },

    #[error("Alias cycle detected: {}", .chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    #[error("Expansion limit of {limit} steps exceeded")]
    ExpansionLimitExceeded { limit: usize },

    #[error("Alias not found: {0}")]
    AliasNotFound(String),

    #[error("An alias named '{0}' already exists")]
    AliasExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagAliasError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagAliasError::NotTagaliasDirectory(_) => 2,
            TagAliasError::InvalidName { .. } => 3,
            TagAliasError::InvalidToken { .. } => 4,
            TagAliasError::Cycle { .. } => 5,
            TagAliasError::ExpansionLimitExceeded { .. } => 6,
            TagAliasError::AliasNotFound(_) => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagAliasError::NotTagaliasDirectory(path) => {
                format!(
                    "Not a tagalias directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagalias init' in this directory to create an alias store\n\
                    • Navigate to a directory with an existing alias store\n\
                    • Set TAGALIAS_ROOT environment variable to your store path",
                    path.display()
                )
            }
            TagAliasError::Cycle { chain } => {
                format!(
                    "Alias cycle detected: {}\n\n\
                    No tags were applied. Break the cycle by redefining one of the\n\
                    aliases in the chain, e.g.:\n\
                    tagalias add {} <tags...>",
                    chain.join(" -> "),
                    chain.first().map(String::as_str).unwrap_or("<alias>")
                )
            }
            TagAliasError::ExpansionLimitExceeded { limit } => {
                format!(
                    "Expansion limit of {} steps exceeded\n\n\
                    No tags were applied. The alias graph is acyclic but expands\n\
                    too far. Raise the limit for one call with 'resolve --limit N'\n\
                    or persistently with 'tagalias config limit N'.",
                    limit
                )
            }
            TagAliasError::InvalidToken { token, reason } => {
                format!(
                    "Invalid token '{}': {}\n\n\
                    Tokens are plain tags (photo), key=value pairs (year=2014),\n\
                    or alias names. Escape a literal '=' with '\\='.",
                    token, reason
                )
            }
            TagAliasError::InvalidName { name, reason } => {
                format!(
                    "Invalid alias name '{}': {}\n\n\
                    Names must be non-empty, contain no whitespace or ,/=()<>\n\
                    characters, and must not shadow a query keyword.",
                    name, reason
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagAliasError
pub type Result<T> = std::result::Result<T, TagAliasError>;
