//! Tag assignments: plain tags and key=value pairs

use crate::error::{Result, TagAliasError};
use std::fmt;

/// A single tag assignment to hand to the downstream tagging tool.
///
/// Two assignments with the same key but different values are distinct;
/// nothing here collapses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagAssignment {
    /// A bare tag, e.g. `photo`
    Plain(String),
    /// A valued tag, e.g. `year=2014`
    KeyValue { key: String, value: String },
}

impl TagAssignment {
    /// Parse a literal token into an assignment.
    ///
    /// A token with exactly one unescaped `=` is a key=value pair; all
    /// other tokens are plain tags. `\` escapes the next character, so
    /// `a\=b` is the plain tag `a=b`.
    pub fn parse(token: &str) -> Result<TagAssignment> {
        if token.is_empty() {
            return Err(invalid(token, "empty token"));
        }

        let mut segments: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut chars = token.chars();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => return Err(invalid(token, "dangling escape at end of token")),
                },
                '=' => segments.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        segments.push(current);

        if segments.len() == 2 {
            let value = segments.pop().unwrap_or_default();
            let key = segments.pop().unwrap_or_default();
            if key.is_empty() {
                return Err(invalid(token, "empty key before '='"));
            }
            if value.is_empty() {
                return Err(invalid(token, "empty value after '='"));
            }
            Ok(TagAssignment::KeyValue { key, value })
        } else {
            Ok(TagAssignment::Plain(segments.join("=")))
        }
    }
}

fn invalid(token: &str, reason: &str) -> TagAliasError {
    TagAliasError::InvalidToken {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}

/// Escape `=` and `\` so the rendered token parses back to the same
/// assignment.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '=' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for TagAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagAssignment::Plain(tag) => write!(f, "{}", escape(tag)),
            TagAssignment::KeyValue { key, value } => {
                write!(f, "{}={}", escape(key), escape(value))
            }
        }
    }
}
