//! Downloading a Google Sheet as CSV

use crate::error::{ImportError, ImportResult};
use locstore_config::ImporterConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Turn a Google Sheets edit URL into its CSV export URL.
///
/// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0` becomes
/// `https://docs.google.com/spreadsheets/d/<id>/export?format=csv`.
/// Input without a `/d/<id>` segment is logged and returned unchanged.
pub fn sheet_export_url(edit_url: &str) -> String {
    let Some(start) = edit_url.find("/d/").map(|index| index + 3) else {
        error!("Failed to convert URL: no document id in '{}'", edit_url);
        return edit_url.to_string();
    };

    let rest = &edit_url[start..];
    let document_id = rest
        .find(['/', '?', '#'])
        .map_or(rest, |end| &rest[..end]);

    if document_id.is_empty() {
        error!("Failed to convert URL: empty document id in '{}'", edit_url);
        return edit_url.to_string();
    }

    format!("https://docs.google.com/spreadsheets/d/{document_id}/export?format=csv")
}

/// HTTP client for sheet downloads
#[derive(Debug, Clone)]
pub struct SheetFetcher {
    client: Client,
}

impl SheetFetcher {
    /// Create a fetcher with a request timeout
    pub fn new(timeout: Duration) -> ImportResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ImportError::Client)?;
        Ok(Self { client })
    }

    /// Create a fetcher from the `importer` configuration section
    pub fn from_config(config: &ImporterConfig) -> ImportResult<Self> {
        Self::new(Duration::from_secs(config.timeout_seconds))
    }

    /// Download `url` as text. Empty bodies are an error.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> ImportResult<String> {
        let parsed = Url::parse(url).map_err(|source| ImportError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        debug!("Downloading sheet from {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| ImportError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Sheet download failed with status {}", status);
            return Err(ImportError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| ImportError::Network {
            url: url.to_string(),
            source,
        })?;

        if body.trim().is_empty() {
            error!("Downloaded data is empty.");
            return Err(ImportError::EmptyDownload);
        }

        info!("Downloaded {} bytes of sheet data", body.len());
        Ok(body)
    }

    /// Download the CSV export of a Google Sheets edit URL
    pub async fn fetch_sheet(&self, edit_url: &str) -> ImportResult<String> {
        self.fetch(&sheet_export_url(edit_url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url_from_edit_url() {
        assert_eq!(
            sheet_export_url("https://docs.google.com/spreadsheets/d/1AbC-xyz_9/edit#gid=0"),
            "https://docs.google.com/spreadsheets/d/1AbC-xyz_9/export?format=csv"
        );
    }

    #[test]
    fn test_export_url_without_trailing_segment() {
        assert_eq!(
            sheet_export_url("https://docs.google.com/spreadsheets/d/abc123"),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv"
        );
        assert_eq!(
            sheet_export_url("https://docs.google.com/spreadsheets/d/abc123?usp=sharing"),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv"
        );
    }

    #[test]
    fn test_export_url_passthrough() {
        let url = "https://example.com/sheet.csv";
        assert_eq!(sheet_export_url(url), url);
        assert_eq!(sheet_export_url("https://x/d/"), "https://x/d/");
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url() {
        let fetcher = SheetFetcher::new(Duration::from_secs(1)).unwrap();
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(ImportError::InvalidUrl { .. })));
    }
}
