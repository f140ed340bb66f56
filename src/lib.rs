//! tagalias - Alias shorthand for file-tagging databases
//!
//! A command-line tool that manages named aliases which expand, at tagging
//! time, into one or more concrete tag assignments (plain tags or
//! `key=value` pairs), with recursive composition and cycle detection.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagAliasError;
