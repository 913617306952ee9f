//! Location of the catalog storage directory

use locstore_common::{catalog_file_name, language_from_path, LocStoreError, Result};
use locstore_config::StorageConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The directory holding one `<language>.json` file per language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    dir: PathBuf,
}

impl StorageLayout {
    /// Use `dir` as the storage directory
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Resolve `<asset_root>/<folder>` from configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.storage_dir())
    }

    /// The storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the catalog file for `language`
    pub fn catalog_path(&self, language: &str) -> PathBuf {
        self.dir.join(catalog_file_name(language))
    }

    /// Whether the directory exists
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Create the directory if missing. Returns `true` when it was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }

        fs::create_dir_all(&self.dir).map_err(|source| LocStoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        info!("Created localization storage folder: {:?}", self.dir);
        Ok(true)
    }

    /// Delete every catalog file in the directory. Other files are left alone.
    pub fn clear_catalogs(&self) -> Result<usize> {
        if !self.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for path in self.catalog_files()? {
            fs::remove_file(&path).map_err(|source| LocStoreError::Io {
                path: path.clone(),
                source,
            })?;
            removed += 1;
        }

        debug!("Removed {} catalog files from {:?}", removed, self.dir);
        Ok(removed)
    }

    /// Paths of catalog files currently in the directory
    pub fn catalog_files(&self) -> Result<Vec<PathBuf>> {
        let read_dir = fs::read_dir(&self.dir).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LocStoreError::DirectoryNotFound {
                    path: self.dir.clone(),
                }
            } else {
                LocStoreError::Io {
                    path: self.dir.clone(),
                    source,
                }
            }
        })?;

        let mut files = Vec::new();
        for entry in read_dir {
            let path = entry
                .map_err(|source| LocStoreError::Io {
                    path: self.dir.clone(),
                    source,
                })?
                .path();
            if path.is_file() && language_from_path(&path).is_some() {
                files.push(path);
            }
        }
        Ok(files)
    }
}
