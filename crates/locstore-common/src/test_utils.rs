//! Test utilities and shared test helpers for locstore.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Catalog file fixtures written in the on-disk `_items` format.
pub mod catalog_fixtures {
    use std::path::{Path, PathBuf};

    /// Render a catalog body for the given pairs, in order.
    pub fn catalog_json(entries: &[(&str, &str)]) -> String {
        let items: Vec<serde_json::Value> = entries
            .iter()
            .map(|(key, value)| serde_json::json!({ "_key": key, "_value": value }))
            .collect();
        serde_json::to_string_pretty(&serde_json::json!({ "_items": items }))
            .expect("Failed to render catalog fixture")
    }

    /// Write `<dir>/<language>.json` with the given pairs and return its path.
    pub fn write_catalog(dir: &Path, language: &str, entries: &[(&str, &str)]) -> PathBuf {
        std::fs::create_dir_all(dir).expect("Failed to create storage directory");
        let path = dir.join(format!("{language}.json"));
        std::fs::write(&path, catalog_json(entries)).expect("Failed to write catalog fixture");
        path
    }

    /// Write a raw file body, used for malformed catalog cases.
    pub fn write_raw(dir: &Path, file_name: &str, body: &str) -> PathBuf {
        std::fs::create_dir_all(dir).expect("Failed to create storage directory");
        let path = dir.join(file_name);
        std::fs::write(&path, body).expect("Failed to write fixture");
        path
    }

    /// Populate `dir` with English, Russian and German catalogs.
    pub fn populate_sample_storage(dir: &Path) {
        write_catalog(
            dir,
            "English",
            &[("greeting", "Hello"), ("farewell", "Goodbye"), ("empty", "")],
        );
        write_catalog(
            dir,
            "Russian",
            &[("greeting", "Привет"), ("farewell", "До свидания")],
        );
        write_catalog(dir, "German", &[("greeting", "Hallo")]);
    }

    /// Create a temporary storage directory populated with the sample catalogs.
    #[cfg(feature = "tempfile")]
    pub fn sample_storage() -> tempfile::TempDir {
        let dir = super::create_temp_dir();
        populate_sample_storage(dir.path());
        dir
    }
}

/// Sheet export fixtures for importer tests.
pub mod sheet_fixtures {
    /// Two languages, two keys.
    pub fn simple_sheet_csv() -> &'static str {
        "key,en,fr\nhello,Hello,Bonjour\n"
    }

    /// Sheet with CRLF endings, blank lines, padding, an empty key and a short row.
    pub fn messy_sheet_csv() -> &'static str {
        concat!(
            "Key , English , Russian , German\r\n",
            "greeting, Hello , Привет , Hallo\r\n",
            "\r\n",
            " , orphan , value , here\r\n",
            "farewell,Goodbye\r\n",
            "single\r\n",
            "title,Menu,Меню,Menü\r\n",
        )
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Create a minimal valid test configuration as YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
storage:
  asset_root: "Assets"
  folder: "LocalizationStorage"

languages:
  default_language: "English"
"#
    }

    /// Create a full test configuration as YAML string.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "storage:\n",
            "  asset_root: \"Game/Assets\"\n",
            "  folder: \"Strings\"\n",
            "\n",
            "languages:\n",
            "  default_language: \"German\"\n",
            "  locale_map:\n",
            "    de: \"German\"\n",
            "    en: \"English\"\n",
            "    pt: \"Portuguese\"\n",
            "\n",
            "importer:\n",
            "  sheet_url: \"https://docs.google.com/spreadsheets/d/abc123/edit#gid=0\"\n",
            "  timeout_seconds: 45\n",
        )
    }

    /// The full configuration as TOML.
    pub fn full_config_toml() -> &'static str {
        concat!(
            "[storage]\n",
            "asset_root = \"Game/Assets\"\n",
            "folder = \"Strings\"\n",
            "\n",
            "[languages]\n",
            "default_language = \"German\"\n",
            "\n",
            "[languages.locale_map]\n",
            "de = \"German\"\n",
            "en = \"English\"\n",
            "pt = \"Portuguese\"\n",
            "\n",
            "[importer]\n",
            "sheet_url = \"https://docs.google.com/spreadsheets/d/abc123/edit#gid=0\"\n",
            "timeout_seconds = 45\n",
        )
    }
}
