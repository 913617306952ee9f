//! Shared helpers for naming and locating catalog files.

use crate::types::{CATALOG_EXTENSION, MISSING_KEY_PREFIX};
use std::ffi::OsStr;
use std::path::Path;

/// Builds the sentinel returned for an unknown key, e.g. `#greeting`.
pub fn missing_key_sentinel(key: &str) -> String {
    let mut sentinel = String::with_capacity(key.len() + 1);
    sentinel.push(MISSING_KEY_PREFIX);
    sentinel.push_str(key);
    sentinel
}

/// File name of the catalog for `language`.
pub fn catalog_file_name(language: &str) -> String {
    format!("{language}.{CATALOG_EXTENSION}")
}

/// Returns the language identifier of a catalog path, or `None` if the path
/// does not carry the catalog extension.
///
/// The extension must match exactly: `German.JSON` is not a catalog, since
/// catalogs are always opened as `<language>.json`.
pub fn language_from_path(path: &Path) -> Option<String> {
    let is_catalog = path
        .extension()
        .is_some_and(|ext| ext == OsStr::new(CATALOG_EXTENSION));
    if !is_catalog {
        return None;
    }

    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}
