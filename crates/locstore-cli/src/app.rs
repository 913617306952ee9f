//! Composition root: configuration, store, detector and importer

use crate::cli::{Command, ImportArgs};
use crate::error::{CliError, CliResult};
use locstore_config::Config;
use locstore_i18n::{CatalogEditor, CatalogStore, LoadReport, LocaleDetector, StorageLayout};
use locstore_import::{CatalogImporter, ImportSummary, SheetFetcher};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// The running application.
///
/// Commands return the lines to print instead of writing to stdout.
#[derive(Debug)]
pub struct App {
    config: Arc<Config>,
    store: CatalogStore,
    detector: LocaleDetector,
}

impl App {
    /// Build the application from a validated configuration
    pub fn new(config: Config) -> Self {
        let store = CatalogStore::from_config(&config);
        let detector = LocaleDetector::from_config(&config.languages);
        Self {
            config: Arc::new(config),
            store,
            detector,
        }
    }

    /// Current configuration
    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    /// The catalog store
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// The locale detector
    pub const fn detector(&self) -> &LocaleDetector {
        &self.detector
    }

    fn layout(&self) -> &StorageLayout {
        self.store.storage()
    }

    /// Run a subcommand
    pub async fn execute(&self, command: Command) -> CliResult<Vec<String>> {
        match command {
            Command::Init => self.init(),
            Command::Languages => Ok(self.languages()),
            Command::Get { key, lang } => Ok(vec![self.get(&key, lang.as_deref())]),
            Command::Add {
                language,
                key,
                value,
            } => {
                let mut editor = self.editor(&language)?;
                editor.add(&key, &value)?;
                Ok(vec![format!("Added '{key}' to {language}")])
            }
            Command::Set {
                language,
                key,
                value,
            } => {
                let mut editor = self.editor(&language)?;
                editor.set(&key, &value)?;
                Ok(vec![format!("Updated '{key}' in {language}")])
            }
            Command::Remove { language, key } => {
                let mut editor = self.editor(&language)?;
                let removed = editor.remove(&key)?;
                Ok(vec![format!(
                    "Removed '{}' from {language} (was \"{}\")",
                    removed.key, removed.value
                )])
            }
            Command::Search { language, query } => {
                let editor = self.editor(&language)?;
                Ok(editor
                    .search(query.as_deref().unwrap_or_default())
                    .into_iter()
                    .map(|entry| format!("{} = {}", entry.key, entry.value))
                    .collect())
            }
            Command::Import(args) => {
                let summary = self.import(args).await?;
                Ok(summary_lines(&summary))
            }
        }
    }

    fn init(&self) -> CliResult<Vec<String>> {
        let dir = self.layout().dir().display().to_string();
        if self.layout().ensure_exists()? {
            Ok(vec![format!("Created {dir}")])
        } else {
            Ok(vec![format!("{dir} already exists")])
        }
    }

    fn languages(&self) -> Vec<String> {
        let count = self.store.languages_count();
        let mut lines = vec![format!("{count} languages")];
        lines.extend(self.store.available_languages());
        lines
    }

    /// Look `key` up in `language`, or in the detected language when none is
    /// given. Detection runs at most once per application.
    fn get(&self, key: &str, language: Option<&str>) -> String {
        let report = match language {
            Some(language) => Some(self.store.load(language)),
            None => self.detector.initialize(&self.store),
        };

        if let Some(failure) = report.as_ref().and_then(LoadReport::failure) {
            warn!("Looking up '{}' in an empty catalog: {}", key, failure);
        }

        self.store.get(key)
    }

    fn editor(&self, language: &str) -> CliResult<CatalogEditor> {
        Ok(CatalogEditor::open(self.layout().clone(), language)?)
    }

    async fn import(&self, args: ImportArgs) -> CliResult<ImportSummary> {
        let config = self.config();
        let importer = CatalogImporter::from_config(&config);

        let summary = match (args.csv, args.url) {
            (Some(path), _) => {
                let data = read_input(&path).await?;
                importer.import_csv(&data)?
            }
            (None, Some(url)) => {
                let fetcher = SheetFetcher::from_config(&config.importer)?;
                importer.import_from_sheet(&fetcher, &url).await?
            }
            (None, None) => importer.import_configured(&config).await?,
        };

        let languages = self.store.refresh_languages();
        info!("Storage now holds {} languages", languages.len());
        Ok(summary)
    }
}

async fn read_input(path: &Path) -> CliResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Input {
            path: path.to_path_buf(),
            source,
        })
}

fn summary_lines(summary: &ImportSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Imported {} keys into {} languages",
        summary.entries,
        summary.languages.len()
    )];
    lines.extend(
        summary
            .files
            .iter()
            .map(|path| format!("  {}", path.display())),
    );
    lines
}
