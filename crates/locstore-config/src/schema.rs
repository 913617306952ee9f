//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main configuration structure for locstore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where catalog files live.
    pub storage: StorageConfig,
    /// Language selection settings.
    pub languages: LanguagesConfig,
    /// Sheet importer settings.
    pub importer: ImporterConfig,
}

/// Catalog storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Project asset root the storage folder is resolved against.
    pub asset_root: PathBuf,
    /// Name of the folder holding `<language>.json` catalogs.
    pub folder: String,
}

/// Language selection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagesConfig {
    /// Language loaded when the requested one has no catalog.
    pub default_language: String,
    /// Two-letter locale code to language identifier.
    pub locale_map: BTreeMap<String, String>,
}

/// Google Sheets importer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Edit URL of the source spreadsheet.
    pub sheet_url: Option<String>,
    /// HTTP timeout for the CSV export download.
    pub timeout_seconds: u64,
}

impl StorageConfig {
    /// Full path of the storage directory.
    pub fn storage_dir(&self) -> PathBuf {
        self.asset_root.join(&self.folder)
    }
}

impl LanguagesConfig {
    /// Language mapped to a locale code, if any.
    pub fn language_for_code(&self, code: &str) -> Option<&str> {
        self.locale_map.get(code).map(String::as_str)
    }
}
