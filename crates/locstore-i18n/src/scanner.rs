//! Discovery of the languages present in the storage directory

use crate::storage::StorageLayout;
use locstore_common::{language_from_path, LocStoreError, Result};
use tracing::{debug, warn};

/// Lists the language identifiers that have a catalog file
#[derive(Debug, Clone)]
pub struct LanguageScanner {
    layout: StorageLayout,
}

impl LanguageScanner {
    /// Create a scanner over a storage layout
    pub fn new(layout: StorageLayout) -> Self {
        Self { layout }
    }

    /// Scan the storage directory.
    ///
    /// A missing directory is logged as a warning and yields no languages.
    /// Identifiers come back sorted.
    pub fn scan(&self) -> Vec<String> {
        match self.try_scan() {
            Ok(languages) => languages,
            Err(LocStoreError::DirectoryNotFound { path }) => {
                warn!("Localization folder not found: {:?}", path);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to scan localization folder: {}", e);
                Vec::new()
            }
        }
    }

    /// Scan the storage directory, reporting a missing directory as an error
    pub fn try_scan(&self) -> Result<Vec<String>> {
        let mut languages: Vec<String> = self
            .layout
            .catalog_files()?
            .iter()
            .filter_map(|path| language_from_path(path))
            .collect();
        languages.sort();
        languages.dedup();

        debug!("Available languages: {}", languages.join(", "));
        Ok(languages)
    }

    /// The layout being scanned
    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }
}
