//! Error types for sheet import

use locstore_common::LocStoreError;
use locstore_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while importing a sheet
#[derive(Error, Debug)]
pub enum ImportError {
    /// The sheet has a header row but no data rows
    #[error("Sheet has no data rows")]
    NoDataRows,

    /// The header row names no language columns
    #[error("Sheet header has no language columns")]
    NoLanguageColumns,

    /// A header cell cannot be used as a catalog file name
    #[error("Invalid language column '{language}': {source}")]
    InvalidLanguage {
        /// Header cell as written in the sheet
        language: String,
        /// Why the name was rejected
        #[source]
        source: ConfigError,
    },

    /// The download returned an empty body
    #[error("Downloaded data is empty")]
    EmptyDownload,

    /// No sheet URL was given or configured
    #[error("No sheet URL configured")]
    MissingSheetUrl,

    /// The sheet URL cannot be parsed
    #[error("Invalid sheet URL '{url}': {source}")]
    InvalidUrl {
        /// URL as given
        url: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The HTTP request failed
    #[error("Failed downloading data from {url}: {source}")]
    Network {
        /// Requested URL
        url: String,
        /// Transport failure
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Failed downloading data from {url}: HTTP {status}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// Writing catalogs failed
    #[error(transparent)]
    Storage(#[from] LocStoreError),
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;
