pub mod config;
pub mod error;

// Recipe fetching
pub mod source;

// Memory ingestion
pub mod ingest;

// Query enrichment
pub mod enrich;

// Command-line interface
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
