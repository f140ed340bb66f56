//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagalias")]
#[command(about = "Alias shorthand for file-tagging databases", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new alias store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Define an alias
    Add {
        /// Alias name
        name: String,

        /// Expansion tokens: tags, key=value pairs, or other alias names
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Remove one or more aliases
    #[command(alias = "rm")]
    Remove {
        /// Alias name(s) to remove
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List defined aliases
    #[command(alias = "ls")]
    List {
        /// Glob pattern to filter alias names by
        #[arg(short, long)]
        name: Option<String>,

        /// Glob pattern to filter by expansion token
        #[arg(short, long)]
        aliased_to: Option<String>,

        /// Print only alias names, one per line
        #[arg(short = '1', long)]
        oneline: bool,
    },

    /// Resolve aliases in a list of tokens
    #[command(alias = "res")]
    Resolve {
        /// Maximum expansion steps for this call
        #[arg(short, long)]
        limit: Option<usize>,

        /// Tags (with optional =value) and/or alias names
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Rename an alias
    Rename {
        /// Current alias name
        old: String,

        /// New alias name
        new: String,
    },

    /// Copy an alias to one or more new names
    Copy {
        /// Alias to copy from
        source: String,

        /// New alias name(s)
        #[arg(required = true)]
        destinations: Vec<String>,
    },

    /// Check that every stored alias resolves
    Check,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
