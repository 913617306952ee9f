//! Translation catalogs and their on-disk `_items` format.
//!
//! A catalog file looks like:
//!
//! ```json
//! { "_items": [ { "_key": "greeting", "_value": "Hello" } ] }
//! ```

use locstore_common::{LocStoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One key/value pair of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Lookup key, unique within a catalog
    #[serde(rename = "_key")]
    pub key: String,
    /// Translated text, may be empty
    #[serde(rename = "_value")]
    pub value: String,
}

impl TranslationEntry {
    /// Create a new entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// All translated strings for one language, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationCatalog {
    language: String,
    entries: Vec<TranslationEntry>,
}

/// Item as it appears in a file. Both fields may be `null` or absent.
#[derive(Deserialize)]
struct RawItem {
    #[serde(rename = "_key", default)]
    key: Option<String>,
    #[serde(rename = "_value", default)]
    value: Option<String>,
}

#[derive(Deserialize)]
struct RawCatalogFile {
    #[serde(rename = "_items", default)]
    items: Option<Vec<RawItem>>,
}

#[derive(Serialize)]
struct CatalogFileRef<'a> {
    #[serde(rename = "_items")]
    items: &'a [TranslationEntry],
}

impl TranslationCatalog {
    /// Create an empty catalog for a language
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: Vec::new(),
        }
    }

    /// Create a catalog from entries, kept as given
    pub fn from_entries(language: impl Into<String>, entries: Vec<TranslationEntry>) -> Self {
        Self {
            language: language.into(),
            entries,
        }
    }

    /// Parse a catalog body.
    ///
    /// Items with a missing or empty key are dropped and a missing value reads
    /// as the empty string. A `null` document or missing `_items` gives an
    /// empty catalog. Duplicate keys are kept in order; see [`CatalogIndex`]
    /// for how lookups resolve them.
    pub fn parse(language: impl Into<String>, json: &str) -> serde_json::Result<Self> {
        let file: Option<RawCatalogFile> = serde_json::from_str(json)?;
        let entries = file
            .and_then(|file| file.items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                let key = item.key.filter(|key| !key.is_empty())?;
                Some(TranslationEntry {
                    key,
                    value: item.value.unwrap_or_default(),
                })
            })
            .collect();

        Ok(Self {
            language: language.into(),
            entries,
        })
    }

    /// Read a catalog file. The language is taken from the caller, not the file.
    pub fn read(language: impl Into<String>, path: &Path) -> Result<Self> {
        debug!("Reading catalog file: {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| LocStoreError::read(path, e))?;
        Self::parse(language, &content).map_err(|e| LocStoreError::malformed(path, e))
    }

    /// Render the catalog as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFileRef {
            items: &self.entries,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Write the catalog to `path`, replacing any existing file
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| LocStoreError::io(path, e))?;
        debug!(
            "Wrote {} entries for '{}' to {:?}",
            self.entries.len(),
            self.language,
            path
        );
        Ok(())
    }

    /// Language identifier of this catalog
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Entries in display order
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Mutable access for in-place value edits
    pub fn entries_mut(&mut self) -> &mut Vec<TranslationEntry> {
        &mut self.entries
    }

    /// Append an entry without checking for duplicates
    pub fn push(&mut self, entry: TranslationEntry) {
        self.entries.push(entry);
    }

    /// First entry with the given key
    pub fn entry(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Whether any entry carries the key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the lookup index for this catalog
    pub fn to_index(&self) -> CatalogIndex {
        CatalogIndex::from_entries(&self.entries)
    }
}

/// Key to value map used for lookups.
///
/// Later duplicates of a key overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogIndex {
    values: HashMap<String, String>,
}

impl CatalogIndex {
    /// Build an index from entries, last duplicate wins
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a TranslationEntry>,
    {
        let values = entries
            .into_iter()
            .filter(|entry| !entry.key.is_empty())
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect();
        Self { values }
    }

    /// Value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.values
    }
}
