//! Runtime catalog store: the active language and its lookup index

use crate::catalog::{CatalogIndex, TranslationCatalog};
use crate::error::LoadFailure;
use crate::scanner::LanguageScanner;
use crate::storage::StorageLayout;
use arc_swap::ArcSwap;
use locstore_common::missing_key_sentinel;
use locstore_config::Config;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info};

/// Outcome of a [`CatalogStore::load`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Language the caller asked for
    pub requested: String,
    /// Language actually read, after fallback
    pub resolved: String,
    /// Whether the requested language was replaced by the default
    pub fell_back: bool,
    /// What happened to the index
    pub status: LoadStatus,
}

/// Index state after a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The catalog was read
    Loaded {
        /// Distinct keys now active
        entries: usize,
    },
    /// The catalog could not be read; the index is empty
    Failed(LoadFailure),
}

impl LoadReport {
    /// Whether the catalog was read
    pub const fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded { .. })
    }

    /// The failure, if the load failed
    pub const fn failure(&self) -> Option<&LoadFailure> {
        match &self.status {
            LoadStatus::Failed(failure) => Some(failure),
            LoadStatus::Loaded { .. } => None,
        }
    }
}

/// A loaded language together with its lookup index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveCatalog {
    language: String,
    index: CatalogIndex,
}

impl ActiveCatalog {
    /// Language this index was loaded for
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Key to value lookups
    pub const fn index(&self) -> &CatalogIndex {
        &self.index
    }
}

/// Holds the active language and serves lookups.
///
/// `load` swaps the language and its index as one value, so `get` may run
/// on other threads while a load is in progress and sees either the old or
/// the new catalog, never one language paired with another's entries.
#[derive(Debug)]
pub struct CatalogStore {
    scanner: LanguageScanner,
    default_language: String,
    active: ArcSwap<ActiveCatalog>,
    languages: RwLock<Vec<String>>,
}

impl CatalogStore {
    /// Create an empty store over a storage directory
    pub fn new(layout: StorageLayout, default_language: impl Into<String>) -> Self {
        let default_language = default_language.into();
        Self {
            scanner: LanguageScanner::new(layout),
            active: ArcSwap::from_pointee(ActiveCatalog {
                language: default_language.clone(),
                index: CatalogIndex::default(),
            }),
            default_language,
            languages: RwLock::new(Vec::new()),
        }
    }

    /// Create an empty store from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            StorageLayout::from_config(&config.storage),
            config.languages.default_language.clone(),
        )
    }

    /// Load the catalog for `language`.
    ///
    /// Unknown languages fall back to the default language. Read and parse
    /// failures are logged and leave an empty index; the active language is
    /// still set to the language that was attempted. This never fails.
    pub fn load(&self, language: &str) -> LoadReport {
        let languages = self.refresh_languages();

        let fell_back = !languages.iter().any(|known| known == language);
        let resolved = if fell_back {
            info!(
                "Language '{}' not found. Using {} as default.",
                language, self.default_language
            );
            self.default_language.clone()
        } else {
            language.to_string()
        };

        let path = self.scanner.layout().catalog_path(&resolved);
        let (index, status) = match TranslationCatalog::read(resolved.as_str(), &path) {
            Ok(catalog) => {
                let index = catalog.to_index();
                let entries = index.len();
                info!("Loaded language '{}', keys: {}", resolved, entries);
                (index, LoadStatus::Loaded { entries })
            }
            Err(e) => {
                error!("Error reading catalog for '{}': {}", resolved, e);
                let failure = LoadFailure::from_error(path, &e);
                (CatalogIndex::default(), LoadStatus::Failed(failure))
            }
        };

        self.active.store(Arc::new(ActiveCatalog {
            language: resolved.clone(),
            index,
        }));

        LoadReport {
            requested: language.to_string(),
            resolved,
            fell_back,
            status,
        }
    }

    /// Translated string for `key`, or `#key` when the key is unknown
    pub fn get(&self, key: &str) -> String {
        self.active
            .load()
            .index
            .get(key)
            .map_or_else(|| missing_key_sentinel(key), str::to_string)
    }

    /// Translated string for `key`, if present
    pub fn try_get(&self, key: &str) -> Option<String> {
        self.active.load().index.get(key).map(str::to_string)
    }

    /// Whether the active catalog has `key`
    pub fn contains(&self, key: &str) -> bool {
        self.active.load().index.contains(key)
    }

    /// Number of keys in the active catalog
    pub fn len(&self) -> usize {
        self.active.load().index.len()
    }

    /// Whether the active catalog is empty
    pub fn is_empty(&self) -> bool {
        self.active.load().index.is_empty()
    }

    /// Snapshot of the active language and index
    pub fn snapshot(&self) -> Arc<ActiveCatalog> {
        self.active.load_full()
    }

    /// Language of the last load, or the default before any load
    pub fn current_language(&self) -> String {
        self.active.load().language.clone()
    }

    /// Result of the most recent directory scan
    pub fn available_languages(&self) -> Vec<String> {
        self.languages.read().clone()
    }

    /// Rescan the storage directory and count the languages
    pub fn languages_count(&self) -> usize {
        self.refresh_languages().len()
    }

    /// Rescan the storage directory and remember the result
    pub fn refresh_languages(&self) -> Vec<String> {
        let languages = self.scanner.scan();
        self.languages.write().clone_from(&languages);
        languages
    }

    /// Fallback language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Storage directory this store reads from
    pub fn storage(&self) -> &StorageLayout {
        self.scanner.layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locstore_common::test_utils::catalog_fixtures::{populate_sample_storage, write_raw};
    use locstore_common::test_utils::init_test_logging;

    fn sample_store() -> (tempfile::TempDir, CatalogStore) {
        init_test_logging();
        let root = tempfile::tempdir().unwrap();
        populate_sample_storage(root.path());
        let store = CatalogStore::new(StorageLayout::new(root.path()), "English");
        (root, store)
    }

    #[test]
    fn test_initial_state() {
        let (_root, store) = sample_store();
        assert_eq!(store.current_language(), "English");
        assert!(store.available_languages().is_empty());
        assert!(store.is_empty());
        assert_eq!(store.get("greeting"), "#greeting");
    }

    #[test]
    fn test_load_known_language() {
        let (_root, store) = sample_store();
        let report = store.load("Russian");

        assert!(report.is_loaded());
        assert!(!report.fell_back);
        assert_eq!(report.status, LoadStatus::Loaded { entries: 2 });
        assert_eq!(store.current_language(), "Russian");
        assert_eq!(store.get("greeting"), "Привет");
        assert_eq!(store.available_languages(), vec!["English", "German", "Russian"]);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let (_root, store) = sample_store();
        let report = store.load("Klingon");

        assert!(report.fell_back);
        assert_eq!(report.requested, "Klingon");
        assert_eq!(report.resolved, "English");
        assert_eq!(store.current_language(), "English");
        assert_eq!(store.get("farewell"), "Goodbye");
    }

    #[test]
    fn test_empty_value_is_not_a_miss() {
        let (_root, store) = sample_store();
        store.load("English");
        assert_eq!(store.get("empty"), "");
        assert_eq!(store.try_get("empty").as_deref(), Some(""));
        assert_eq!(store.try_get("nope"), None);
    }

    #[test]
    fn test_malformed_catalog_clears_index() {
        let (root, store) = sample_store();
        store.load("German");
        assert_eq!(store.get("greeting"), "Hallo");

        write_raw(root.path(), "French.json", "{ not json");
        let report = store.load("French");

        assert!(matches!(report.failure(), Some(LoadFailure::Malformed { .. })));
        assert_eq!(store.current_language(), "French");
        assert!(store.is_empty());
        assert_eq!(store.get("greeting"), "#greeting");
    }

    #[test]
    fn test_missing_default_catalog() {
        init_test_logging();
        let root = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(StorageLayout::new(root.path().join("absent")), "English");

        let report = store.load("Russian");
        assert!(report.fell_back);
        assert!(matches!(report.failure(), Some(LoadFailure::NotFound { .. })));
        assert_eq!(store.current_language(), "English");
        assert_eq!(store.languages_count(), 0);
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let (_root, store) = sample_store();
        store.load("English");
        let before = store.snapshot();

        store.load("German");
        assert_eq!(before.language(), "English");
        assert_eq!(before.index().get("farewell"), Some("Goodbye"));
        assert_eq!(store.get("farewell"), "#farewell");
    }

    #[test]
    fn test_language_and_index_swap_together() {
        let (_root, store) = sample_store();
        store.load("English");

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for language in ["Russian", "German", "English"].iter().cycle().take(60) {
                    store.load(language);
                }
            });

            for _ in 0..200 {
                let active = store.snapshot();
                let expected = match active.language() {
                    "English" => "Hello",
                    "Russian" => "Привет",
                    "German" => "Hallo",
                    other => panic!("unexpected language {other}"),
                };
                assert_eq!(active.index().get("greeting"), Some(expected));
            }
        });
    }
}
