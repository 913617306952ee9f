//! Locale detection: system locale code to catalog language

use crate::store::{CatalogStore, LoadReport};
use locstore_common::DEFAULT_LANGUAGE;
use locstore_config::{default_locale_map, LanguagesConfig};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use tracing::{debug, info};
use unic_langid::LanguageIdentifier;

/// Maps two-letter locale codes to language identifiers and picks the
/// startup language.
#[derive(Debug)]
pub struct LocaleDetector {
    locale_map: BTreeMap<String, String>,
    default_language: String,
    initialized: OnceCell<String>,
}

impl Default for LocaleDetector {
    fn default() -> Self {
        Self::new(default_locale_map(), DEFAULT_LANGUAGE)
    }
}

impl LocaleDetector {
    /// Create a detector with an explicit table
    pub fn new(locale_map: BTreeMap<String, String>, default_language: impl Into<String>) -> Self {
        Self {
            locale_map,
            default_language: default_language.into(),
            initialized: OnceCell::new(),
        }
    }

    /// Create a detector from the `languages` configuration section
    pub fn from_config(config: &LanguagesConfig) -> Self {
        Self::new(config.locale_map.clone(), config.default_language.clone())
    }

    /// Language mapped to `code`, with no fallback
    pub fn language_for(&self, code: &str) -> Option<&str> {
        self.locale_map.get(code).map(String::as_str)
    }

    /// Language mapped to `code`, or the default language
    pub fn resolve(&self, code: &str) -> &str {
        self.language_for(code).unwrap_or(&self.default_language)
    }

    /// Two-letter language code of the system locale, e.g. `en` for `en-US`
    pub fn system_language_code() -> Option<String> {
        let locale = sys_locale::get_locale()?;
        debug!("System locale: {}", locale);
        language_code_of(&locale)
    }

    /// Detect the system locale and load the mapped language.
    ///
    /// Runs once per detector; later calls return `None` without loading.
    pub fn initialize(&self, store: &CatalogStore) -> Option<LoadReport> {
        let code = Self::system_language_code();
        self.initialize_with_code(store, code.as_deref())
    }

    /// Load the language mapped to `code`, once. `None` as the code loads the
    /// default language.
    pub fn initialize_with_code(&self, store: &CatalogStore, code: Option<&str>) -> Option<LoadReport> {
        let language = code.map_or(self.default_language.as_str(), |code| self.resolve(code));

        if self.initialized.set(language.to_string()).is_err() {
            debug!("Locale already initialized, skipping");
            return None;
        }

        info!("Device language code: {}", code.unwrap_or("<unknown>"));
        Some(store.load(language))
    }

    /// Language chosen by the first `initialize` call, if it ran
    pub fn initialized_language(&self) -> Option<&str> {
        self.initialized.get().map(String::as_str)
    }

    /// Fallback language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

/// Extract the primary language subtag from a locale string.
///
/// Accepts BCP 47 tags (`en-US`) and POSIX names (`de_DE.UTF-8`). Returns
/// `None` for `C`/`POSIX` and for unparsable input.
pub fn language_code_of(locale: &str) -> Option<String> {
    let tag = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");
    if tag.is_empty() || tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
        return None;
    }

    let langid: LanguageIdentifier = tag.parse().ok()?;
    let language = langid.language.as_str();
    if language == "und" {
        return None;
    }
    Some(language.to_ascii_lowercase())
}
