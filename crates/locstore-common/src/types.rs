//! Storage layout constants shared by the store, the editor and the importer.

/// Language loaded when the requested one is not available.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Directory holding the catalog files, relative to the asset root.
pub const STORAGE_FOLDER: &str = "LocalizationStorage";

/// Asset root the storage folder lives under.
pub const DEFAULT_ASSET_ROOT: &str = "Assets";

/// File extension of a catalog, without the leading dot.
pub const CATALOG_EXTENSION: &str = "json";

/// Prefix of the value returned for a key that is not in the active catalog.
pub const MISSING_KEY_PREFIX: char = '#';
