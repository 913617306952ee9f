//! Default values for every configuration section.

use crate::schema::*;
use locstore_common::{DEFAULT_ASSET_ROOT, DEFAULT_LANGUAGE, STORAGE_FOLDER};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default HTTP timeout for sheet downloads, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Built-in locale table: `en`, `ru`, `de`, `fr`, `es`.
pub const DEFAULT_LOCALE_MAP: [(&str, &str); 5] = [
    ("en", "English"),
    ("ru", "Russian"),
    ("de", "German"),
    ("fr", "French"),
    ("es", "Spanish"),
];

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            languages: LanguagesConfig::default(),
            importer: ImporterConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            folder: STORAGE_FOLDER.to_string(),
        }
    }
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            locale_map: default_locale_map(),
        }
    }
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            sheet_url: None,
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

/// The built-in locale table as an owned map.
pub fn default_locale_map() -> BTreeMap<String, String> {
    DEFAULT_LOCALE_MAP
        .iter()
        .map(|(code, language)| ((*code).to_string(), (*language).to_string()))
        .collect()
}
