//! Editing of a single language catalog on disk

use crate::catalog::{TranslationCatalog, TranslationEntry};
use crate::error::{EditError, EditResult};
use crate::storage::StorageLayout;
use locstore_common::LocStoreError;
use std::path::PathBuf;
use tracing::{info, warn};

/// Opens one language's catalog, applies edits and writes them back.
///
/// Every successful `add`, `set` or `remove` saves immediately.
#[derive(Debug)]
pub struct CatalogEditor {
    layout: StorageLayout,
    catalog: TranslationCatalog,
}

impl CatalogEditor {
    /// Open the catalog for `language`. A missing file opens an empty catalog.
    pub fn open(layout: StorageLayout, language: &str) -> EditResult<Self> {
        let path = layout.catalog_path(language);
        let catalog = match TranslationCatalog::read(language, &path) {
            Ok(catalog) => catalog,
            Err(LocStoreError::CatalogNotFound { path }) => {
                warn!("JSON not found: {:?}", path);
                TranslationCatalog::new(language)
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { layout, catalog })
    }

    /// Add a new key. Empty and existing keys are rejected.
    pub fn add(&mut self, key: &str, value: &str) -> EditResult<()> {
        if key.is_empty() {
            warn!("Key cannot be empty!");
            return Err(EditError::EmptyKey);
        }

        if self.catalog.contains_key(key) {
            warn!("Key '{}' already exists!", key);
            return Err(EditError::DuplicateKey {
                key: key.to_string(),
            });
        }

        self.catalog.push(TranslationEntry::new(key, value));
        self.save()
    }

    /// Replace the value of an existing key
    pub fn set(&mut self, key: &str, value: &str) -> EditResult<()> {
        let entry = self
            .catalog
            .entries_mut()
            .iter_mut()
            .find(|entry| entry.key == key)
            .ok_or_else(|| EditError::UnknownKey {
                key: key.to_string(),
            })?;
        value.clone_into(&mut entry.value);
        self.save()
    }

    /// Delete a key. Every entry carrying it is removed.
    pub fn remove(&mut self, key: &str) -> EditResult<TranslationEntry> {
        let entries = self.catalog.entries_mut();
        let position = entries
            .iter()
            .position(|entry| entry.key == key)
            .ok_or_else(|| EditError::UnknownKey {
                key: key.to_string(),
            })?;

        let removed = entries.remove(position);
        entries.retain(|entry| entry.key != key);
        self.save()?;
        Ok(removed)
    }

    /// Entries whose key or value contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&TranslationEntry> {
        if query.is_empty() {
            return self.catalog.entries().iter().collect();
        }

        let needle = query.to_lowercase();
        self.catalog
            .entries()
            .iter()
            .filter(|entry| {
                entry.key.to_lowercase().contains(&needle)
                    || entry.value.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Write the catalog to `<storage>/<language>.json`
    pub fn save(&self) -> EditResult<()> {
        self.layout.ensure_exists()?;
        let path = self.path();
        self.catalog.write(&path)?;
        info!(
            "Saved {} entries for '{}'",
            self.catalog.len(),
            self.catalog.language()
        );
        Ok(())
    }

    /// The catalog being edited
    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    /// Language being edited
    pub fn language(&self) -> &str {
        self.catalog.language()
    }

    /// File the catalog is saved to
    pub fn path(&self) -> PathBuf {
        self.layout.catalog_path(self.catalog.language())
    }
}
