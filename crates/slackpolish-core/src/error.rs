//! Error types for SlackPolish core
//!
//! The pipeline itself is fail-open: malformed messages, missing fields, and
//! unparsable timestamps degrade to empty results instead of errors. The only
//! fallible surface is parsing a host configuration snapshot.

use thiserror::Error;

/// Result type alias using the core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// SlackPolish core error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed configuration snapshot: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
