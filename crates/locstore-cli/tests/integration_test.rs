//! Integration tests for locstore-cli crate.
//!
//! These tests drive the application through parsed command lines against a
//! temporary asset root.

use clap::Parser;
use locstore_cli::{App, Cli, CliError, Command};
use locstore_common::test_utils::catalog_fixtures::populate_sample_storage;
use locstore_common::test_utils::init_test_logging;
use locstore_common::test_utils::sheet_fixtures::messy_sheet_csv;
use locstore_config::{Config, ConfigLoader};
use locstore_i18n::EditError;
use std::path::Path;
use tempfile::TempDir;

fn app_in(root: &Path) -> App {
    let mut config = Config::default();
    config.storage.asset_root = root.to_path_buf();
    App::new(config)
}

fn sample_app() -> (TempDir, App) {
    init_test_logging();
    let root = tempfile::tempdir().unwrap();
    populate_sample_storage(&root.path().join("LocalizationStorage"));
    let app = app_in(root.path());
    (root, app)
}

async fn run(app: &App, args: &[&str]) -> Result<Vec<String>, CliError> {
    let mut argv = vec!["locstore"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    app.execute(cli.command).await
}

#[tokio::test]
async fn test_init_creates_storage() {
    let root = tempfile::tempdir().unwrap();
    let app = app_in(root.path());

    let first = run(&app, &["init"]).await.unwrap();
    assert!(first[0].starts_with("Created"));
    assert!(root.path().join("LocalizationStorage").is_dir());

    let second = run(&app, &["init"]).await.unwrap();
    assert!(second[0].ends_with("already exists"));
}

#[tokio::test]
async fn test_languages_lists_sorted() {
    let (_root, app) = sample_app();
    let lines = run(&app, &["languages"]).await.unwrap();
    assert_eq!(lines, vec!["3 languages", "English", "German", "Russian"]);
}

#[tokio::test]
async fn test_get_with_language() {
    let (_root, app) = sample_app();

    assert_eq!(run(&app, &["get", "greeting", "--lang", "Russian"]).await.unwrap(), vec!["Привет"]);
    assert_eq!(run(&app, &["get", "greeting", "--lang", "Klingon"]).await.unwrap(), vec!["Hello"]);
    assert_eq!(run(&app, &["get", "nope", "--lang", "German"]).await.unwrap(), vec!["#nope"]);
    assert_eq!(app.store().current_language(), "German");
}

#[tokio::test]
async fn test_get_detects_locale_once() {
    let (_root, app) = sample_app();

    let lines = run(&app, &["get", "greeting"]).await.unwrap();
    assert_eq!(lines.len(), 1);
    let detected = app.detector().initialized_language().unwrap().to_string();

    // An explicit load is not undone by a later detected lookup.
    run(&app, &["get", "greeting", "--lang", "German"]).await.unwrap();
    assert_eq!(run(&app, &["get", "greeting"]).await.unwrap(), vec!["Hallo"]);
    assert_eq!(app.detector().initialized_language(), Some(detected.as_str()));
}

#[tokio::test]
async fn test_edit_commands() {
    let (_root, app) = sample_app();

    run(&app, &["add", "English", "title", "Main Menu"]).await.unwrap();
    run(&app, &["set", "English", "greeting", "Hi"]).await.unwrap();
    let removed = run(&app, &["remove", "English", "farewell"]).await.unwrap();
    assert_eq!(removed, vec!["Removed 'farewell' from English (was \"Goodbye\")"]);

    let found = run(&app, &["search", "English", "MENU"]).await.unwrap();
    assert_eq!(found, vec!["title = Main Menu"]);

    let all = run(&app, &["search", "English"]).await.unwrap();
    assert_eq!(all, vec!["greeting = Hi", "empty = ", "title = Main Menu"]);

    assert_eq!(run(&app, &["get", "greeting", "--lang", "English"]).await.unwrap(), vec!["Hi"]);
}

#[tokio::test]
async fn test_edit_errors() {
    let (_root, app) = sample_app();

    let duplicate = run(&app, &["add", "English", "greeting", "x"]).await;
    assert!(matches!(
        duplicate,
        Err(CliError::Edit(EditError::DuplicateKey { .. }))
    ));

    let unknown = run(&app, &["set", "German", "farewell", "x"]).await;
    assert!(matches!(
        unknown,
        Err(CliError::Edit(EditError::UnknownKey { .. }))
    ));
}

#[tokio::test]
async fn test_import_csv_file() {
    let (root, app) = sample_app();
    let csv = root.path().join("sheet.csv");
    std::fs::write(&csv, messy_sheet_csv()).unwrap();

    let lines = run(&app, &["import", "--csv", csv.to_str().unwrap()]).await.unwrap();
    assert_eq!(lines[0], "Imported 3 keys into 3 languages");
    assert_eq!(app.store().available_languages(), vec!["English", "German", "Russian"]);

    assert_eq!(run(&app, &["get", "title", "--lang", "German"]).await.unwrap(), vec!["Menü"]);
}

#[tokio::test]
async fn test_import_missing_csv_file() {
    let (root, app) = sample_app();
    let missing = root.path().join("missing.csv");

    let result = run(&app, &["import", "--csv", missing.to_str().unwrap()]).await;
    assert!(matches!(result, Err(CliError::Input { .. })));
}

#[tokio::test]
async fn test_import_without_configured_url() {
    let (_root, app) = sample_app();
    let result = app
        .execute(Command::Import(locstore_cli::ImportArgs { csv: None, url: None }))
        .await;
    assert!(matches!(result, Err(CliError::Import(_))));
}

#[test]
fn test_config_file_feeds_app() {
    let root = tempfile::tempdir().unwrap();
    let config_path = root.path().join("locstore.toml");
    std::fs::write(
        &config_path,
        format!(
            "[storage]\nasset_root = {:?}\nfolder = \"Strings\"\n\n[languages]\ndefault_language = \"German\"\n",
            root.path().display().to_string()
        ),
    )
    .unwrap();

    let config = ConfigLoader::load_from(Some(&config_path)).unwrap();
    let app = App::new(config);

    assert_eq!(app.store().storage().dir(), root.path().join("Strings"));
    assert_eq!(app.store().default_language(), "German");
    assert_eq!(app.config().languages.default_language, "German");
}
