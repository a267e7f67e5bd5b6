//! Error types for the CLI layer

use thiserror::Error;

use crate::mapping::MappingError;

/// Errors surfaced by the command-line front end.
///
/// Every variant is terminal: the binary reports it on stderr and exits
/// nonzero.
#[derive(Error, Debug)]
pub enum CliError {
    /// A generation failure (configuration, catalog, or serialization)
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Writing to the output stream failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
