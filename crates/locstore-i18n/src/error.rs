//! Error and outcome types for catalog loading and editing

use locstore_common::LocStoreError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a catalog load left the store empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The catalog file does not exist
    NotFound {
        /// Catalog file that was expected
        path: PathBuf,
    },
    /// The catalog file exists but could not be read
    Unreadable {
        /// Catalog file
        path: PathBuf,
        /// Rendered I/O error
        message: String,
    },
    /// The catalog file is not a valid catalog
    Malformed {
        /// Catalog file
        path: PathBuf,
        /// Rendered parse error
        message: String,
    },
}

impl LoadFailure {
    /// Classify an error raised while reading a catalog at `path`
    pub fn from_error(path: PathBuf, err: &LocStoreError) -> Self {
        match err {
            LocStoreError::CatalogNotFound { path } | LocStoreError::DirectoryNotFound { path } => {
                Self::NotFound { path: path.clone() }
            }
            LocStoreError::MalformedCatalog { path, source } => Self::Malformed {
                path: path.clone(),
                message: source.to_string(),
            },
            LocStoreError::Serialization(source) => Self::Malformed {
                path,
                message: source.to_string(),
            },
            other => Self::Unreadable {
                path,
                message: other.to_string(),
            },
        }
    }

    /// Path of the catalog that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path } | Self::Unreadable { path, .. } | Self::Malformed { path, .. } => {
                path
            }
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "catalog not found: {}", path.display()),
            Self::Unreadable { path, message } => {
                write!(f, "cannot read {}: {message}", path.display())
            }
            Self::Malformed { path, message } => {
                write!(f, "malformed catalog {}: {message}", path.display())
            }
        }
    }
}

/// Errors raised by catalog edits
#[derive(Error, Debug)]
pub enum EditError {
    /// Keys cannot be empty
    #[error("Key cannot be empty")]
    EmptyKey,

    /// The key is already in the catalog
    #[error("Key '{key}' already exists")]
    DuplicateKey {
        /// Rejected key
        key: String,
    },

    /// The key is not in the catalog
    #[error("Key '{key}' does not exist")]
    UnknownKey {
        /// Missing key
        key: String,
    },

    /// Reading or writing the catalog failed
    #[error(transparent)]
    Storage(#[from] LocStoreError),
}

/// Result type for catalog edits
pub type EditResult<T> = Result<T, EditError>;
