//! Infrastructure layer - Persistence and store discovery

pub mod config;
pub mod repository;
pub mod store_file;

pub use config::Config;
pub use repository::{AliasRepository, FileSystemRepository};
