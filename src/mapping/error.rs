//! Error types for mapping generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating index mappings
#[derive(Error, Debug)]
pub enum MappingError {
    /// Failed to read the configuration file
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// A table filter pattern did not compile
    #[error("Invalid table pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A catalog query failed
    #[error("Catalog query failed: {0}")]
    Catalog(#[from] sqlx::Error),

    /// Failed to serialize a mapping document
    #[error("Failed to serialize mapping document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
