//! Writing imported catalogs into the storage folder

use crate::error::{ImportError, ImportResult};
use crate::fetch::SheetFetcher;
use crate::sheet::parse_sheet;
use locstore_common::LocStoreError;
use locstore_config::Config;
use locstore_i18n::{StorageLayout, TranslationCatalog};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What an import wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Languages written, in sheet column order
    pub languages: Vec<String>,
    /// Catalog files written
    pub files: Vec<PathBuf>,
    /// Entries per catalog
    pub entries: usize,
    /// Old catalog files removed before writing
    pub removed: usize,
}

/// Replaces the contents of the storage folder with an imported sheet
#[derive(Debug, Clone)]
pub struct CatalogImporter {
    layout: StorageLayout,
}

impl CatalogImporter {
    /// Create an importer writing into `layout`
    pub fn new(layout: StorageLayout) -> Self {
        Self { layout }
    }

    /// Create an importer from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(StorageLayout::from_config(&config.storage))
    }

    /// Parse `data` and write one catalog per language column.
    ///
    /// Existing catalogs are deleted, so languages dropped from the sheet
    /// disappear from storage. Every new catalog is written to a temporary
    /// file in the storage folder first; old catalogs are only removed once
    /// all of them are staged. A sheet that fails to parse, or a catalog that
    /// fails to stage, leaves storage untouched.
    pub fn import_csv(&self, data: &str) -> ImportResult<ImportSummary> {
        let catalogs = parse_sheet(data)?;

        self.layout.ensure_exists()?;
        let staged = catalogs
            .iter()
            .map(|catalog| self.stage(catalog))
            .collect::<ImportResult<Vec<_>>>()?;

        let removed = self.layout.clear_catalogs()?;
        debug!("Localization folder cleared, removed {} files", removed);

        let mut summary = ImportSummary {
            languages: Vec::with_capacity(catalogs.len()),
            files: Vec::with_capacity(catalogs.len()),
            entries: catalogs.first().map_or(0, TranslationCatalog::len),
            removed,
        };

        for (catalog, file) in catalogs.iter().zip(staged) {
            let path = self.layout.catalog_path(catalog.language());
            file.persist(&path)
                .map_err(|e| LocStoreError::io(&path, e.error))?;
            info!("Saved {}.json in {:?}", catalog.language(), path);

            summary.languages.push(catalog.language().to_string());
            summary.files.push(path);
        }

        info!(
            "Localization updated successfully: {} languages, {} keys",
            summary.languages.len(),
            summary.entries
        );
        Ok(summary)
    }

    /// Write `catalog` to a temporary file in the storage folder
    fn stage(&self, catalog: &TranslationCatalog) -> ImportResult<NamedTempFile> {
        let dir = self.layout.dir();
        let json = catalog.to_json()?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| LocStoreError::io(dir, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| LocStoreError::io(dir, e))?;
        debug!("Staged {} entries for '{}'", catalog.len(), catalog.language());
        Ok(file)
    }

    /// Download a Google Sheet by its edit URL and import it
    pub async fn import_from_sheet(
        &self,
        fetcher: &SheetFetcher,
        edit_url: &str,
    ) -> ImportResult<ImportSummary> {
        let data = fetcher.fetch_sheet(edit_url).await?;
        self.import_csv(&data)
    }

    /// Import the sheet named in configuration
    pub async fn import_configured(&self, config: &Config) -> ImportResult<ImportSummary> {
        let url = config
            .importer
            .sheet_url
            .as_deref()
            .ok_or(ImportError::MissingSheetUrl)?;
        let fetcher = SheetFetcher::from_config(&config.importer)?;
        self.import_from_sheet(&fetcher, url).await
    }

    /// The storage folder being written
    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }
}
