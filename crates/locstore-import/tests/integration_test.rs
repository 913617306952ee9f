//! Integration tests for locstore-import crate.
//!
//! These tests run the importer against a temporary storage folder and a
//! local HTTP responder, then read the result back through the store.

use locstore_common::test_utils::catalog_fixtures::write_catalog;
use locstore_common::test_utils::init_test_logging;
use locstore_common::test_utils::sheet_fixtures::{messy_sheet_csv, simple_sheet_csv};
use locstore_config::Config;
use locstore_i18n::{CatalogStore, StorageLayout, TranslationCatalog};
use locstore_import::{CatalogImporter, ImportError, SheetFetcher};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one HTTP response on a random local port and return its base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn test_importer_is_deterministic() {
    init_test_logging();
    let root = tempfile::tempdir().unwrap();
    let layout = StorageLayout::new(root.path().join("LocalizationStorage"));
    let importer = CatalogImporter::new(layout.clone());

    let summary = importer.import_csv(simple_sheet_csv()).unwrap();
    assert_eq!(summary.languages, vec!["en", "fr"]);
    assert_eq!(summary.entries, 1);
    assert_eq!(summary.removed, 0);

    let en = TranslationCatalog::read("en", &layout.catalog_path("en")).unwrap();
    let fr = TranslationCatalog::read("fr", &layout.catalog_path("fr")).unwrap();
    assert_eq!(en.to_index().get("hello"), Some("Hello"));
    assert_eq!(fr.to_index().get("hello"), Some("Bonjour"));
    assert_eq!(en.len(), 1);
    assert_eq!(fr.len(), 1);
}

#[test]
fn test_import_replaces_old_catalogs() {
    let root = tempfile::tempdir().unwrap();
    write_catalog(root.path(), "Spanish", &[("old", "viejo")]);
    write_catalog(root.path(), "English", &[("old", "old")]);

    let importer = CatalogImporter::new(StorageLayout::new(root.path()));
    let summary = importer.import_csv(messy_sheet_csv()).unwrap();

    assert_eq!(summary.removed, 2);
    assert!(!root.path().join("Spanish.json").exists());

    let store = CatalogStore::new(StorageLayout::new(root.path()), "English");
    assert_eq!(
        store.refresh_languages(),
        vec!["English", "German", "Russian"]
    );

    store.load("Russian");
    assert_eq!(store.get("title"), "Меню");
    assert_eq!(store.get("farewell"), "");
    assert_eq!(store.get("old"), "#old");
}

#[test]
fn test_bad_sheet_leaves_storage_untouched() {
    let root = tempfile::tempdir().unwrap();
    write_catalog(root.path(), "English", &[("greeting", "Hello")]);

    let importer = CatalogImporter::new(StorageLayout::new(root.path()));
    let result = importer.import_csv("key,en\n");

    assert!(matches!(result, Err(ImportError::NoDataRows)));
    assert!(root.path().join("English.json").exists());
}

#[test]
fn test_header_path_stays_inside_storage() {
    let root = tempfile::tempdir().unwrap();
    let storage = root.path().join("Assets").join("LocalizationStorage");
    write_catalog(&storage, "English", &[("greeting", "Hello")]);
    write_catalog(&storage, "German", &[("greeting", "Hallo")]);

    let importer = CatalogImporter::new(StorageLayout::new(&storage));
    let escaped = importer.import_csv("key,../../escaped\nhello,Hi\n");
    assert!(matches!(escaped, Err(ImportError::InvalidLanguage { .. })));
    assert!(!root.path().join("escaped.json").exists());

    let nested = importer.import_csv("key,French,no/such/dir\nhello,Salut,x\n");
    assert!(matches!(nested, Err(ImportError::InvalidLanguage { .. })));

    let store = CatalogStore::new(StorageLayout::new(&storage), "English");
    assert_eq!(store.refresh_languages(), vec!["English", "German"]);
}

#[test]
fn test_empty_headers_leave_storage_untouched() {
    let root = tempfile::tempdir().unwrap();
    write_catalog(root.path(), "English", &[("greeting", "Hello")]);

    let importer = CatalogImporter::new(StorageLayout::new(root.path()));
    let result = importer.import_csv("key,,\nhello,a,b\n");

    assert!(matches!(result, Err(ImportError::NoLanguageColumns)));
    assert!(root.path().join("English.json").exists());
}

#[test]
fn test_import_leaves_no_staging_files() {
    let root = tempfile::tempdir().unwrap();
    let importer = CatalogImporter::new(StorageLayout::new(root.path()));
    importer.import_csv(messy_sheet_csv()).unwrap();

    let mut names: Vec<String> = std::fs::read_dir(root.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["English.json", "German.json", "Russian.json"]);
}

#[tokio::test]
async fn test_fetch_and_import_over_http() {
    init_test_logging();
    let base = serve_once("200 OK", "key,English,German\ngreeting,Hello,Hallo\n").await;

    let root = tempfile::tempdir().unwrap();
    let importer = CatalogImporter::new(StorageLayout::new(root.path()));
    let fetcher = SheetFetcher::new(Duration::from_secs(5)).unwrap();

    let data = fetcher.fetch(&format!("{base}/export?format=csv")).await.unwrap();
    let summary = importer.import_csv(&data).unwrap();
    assert_eq!(summary.languages, vec!["English", "German"]);

    let store = CatalogStore::new(StorageLayout::new(root.path()), "English");
    store.load("German");
    assert_eq!(store.get("greeting"), "Hallo");
}

#[tokio::test]
async fn test_fetch_empty_body() {
    let base = serve_once("200 OK", "").await;
    let fetcher = SheetFetcher::new(Duration::from_secs(5)).unwrap();

    let result = fetcher.fetch(&base).await;
    assert!(matches!(result, Err(ImportError::EmptyDownload)));
}

#[tokio::test]
async fn test_fetch_http_error_status() {
    let base = serve_once("404 Not Found", "missing").await;
    let fetcher = SheetFetcher::new(Duration::from_secs(5)).unwrap();

    let result = fetcher.fetch(&base).await;
    assert!(matches!(result, Err(ImportError::HttpStatus { status: 404, .. })));
}

#[tokio::test]
async fn test_import_configured_requires_url() {
    let root = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.storage.asset_root = root.path().to_path_buf();

    let importer = CatalogImporter::from_config(&config);
    let result = importer.import_configured(&config).await;
    assert!(matches!(result, Err(ImportError::MissingSheetUrl)));
}
