//! Error types and utilities for locstore

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for locstore operations
pub type Result<T> = std::result::Result<T, LocStoreError>;

/// Main error type for locstore operations
#[derive(Error, Debug)]
pub enum LocStoreError {
    /// The storage directory does not exist
    #[error("Storage directory not found: {}", path.display())]
    DirectoryNotFound {
        /// Directory that was expected
        path: PathBuf,
    },

    /// A catalog file does not exist
    #[error("Catalog not found: {}", path.display())]
    CatalogNotFound {
        /// Catalog file that was expected
        path: PathBuf,
    },

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// I/O error without a known path
    #[error("I/O error: {0}")]
    IoBare(#[from] std::io::Error),

    /// A catalog file is not valid JSON or has the wrong shape
    #[error("Malformed catalog {}: {source}", path.display())]
    MalformedCatalog {
        /// Catalog file that failed to parse
        path: PathBuf,
        /// Parse failure
        #[source]
        source: serde_json::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
        /// Underlying failure, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },
}

impl LocStoreError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap an error from reading a catalog file.
    ///
    /// A `NotFound` error is reported as [`Self::CatalogNotFound`].
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::CatalogNotFound {
                path: path.as_ref().to_path_buf(),
            }
        } else {
            Self::io(path, source)
        }
    }

    /// Create a new malformed catalog error
    pub fn malformed(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::MalformedCatalog {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error for a specific field
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error means the target file or directory is absent
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::CatalogNotFound { .. }
        )
    }
}
