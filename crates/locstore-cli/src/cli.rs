//! Command line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Manage localized string catalogs
#[derive(Debug, Parser)]
#[command(name = "locstore", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or TOML)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create the storage folder
    Init,

    /// List the available languages
    Languages,

    /// Look up a key
    Get {
        /// Key to look up
        key: String,
        /// Language to load instead of the detected one
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Add a new key to a catalog
    Add {
        /// Catalog language
        language: String,
        /// New key
        key: String,
        /// Translated text
        value: String,
    },

    /// Change the value of an existing key
    Set {
        /// Catalog language
        language: String,
        /// Existing key
        key: String,
        /// Translated text
        value: String,
    },

    /// Remove a key from a catalog
    Remove {
        /// Catalog language
        language: String,
        /// Key to remove
        key: String,
    },

    /// List entries whose key or value contains the query
    Search {
        /// Catalog language
        language: String,
        /// Case-insensitive filter; lists everything when omitted
        query: Option<String>,
    },

    /// Replace all catalogs with the contents of a sheet
    Import(ImportArgs),
}

/// Source of an import. Uses the configured sheet URL when neither is given.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
#[group(required = false, multiple = false)]
pub struct ImportArgs {
    /// Local CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Google Sheets edit URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}
