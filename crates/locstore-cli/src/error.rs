//! Application-wide error types using thiserror.

use locstore_common::LocStoreError;
use locstore_config::ConfigError;
use locstore_i18n::EditError;
use locstore_import::ImportError;
use std::path::PathBuf;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog edit error.
    #[error("Edit failed: {0}")]
    Edit(#[from] EditError),

    /// Sheet import error.
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    /// Storage error.
    #[error(transparent)]
    Storage(#[from] LocStoreError),

    /// Reading an input file failed.
    #[error("Failed to read {path}: {source}")]
    Input {
        /// File that was requested
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
