//! Runtime validation of loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        config.validate()
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.folder.trim().is_empty() {
            return Err(invalid("storage.folder cannot be empty"));
        }

        check_language_name("languages.default_language", &self.languages.default_language)?;

        for (code, language) in &self.languages.locale_map {
            if code.trim().is_empty() {
                return Err(invalid("languages.locale_map contains an empty locale code"));
            }
            check_language_name(&format!("languages.locale_map.{code}"), language)?;
        }

        if self.importer.timeout_seconds == 0 {
            return Err(invalid("importer.timeout_seconds must be greater than zero"));
        }

        if let Some(sheet_url) = &self.importer.sheet_url {
            let url = Url::parse(sheet_url)
                .map_err(|e| invalid(format!("importer.sheet_url is not a valid URL: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(invalid(format!(
                    "importer.sheet_url must use http or https, got '{}'",
                    url.scheme()
                )));
            }
        }

        Ok(())
    }
}

/// Check that a language identifier is usable as a catalog file stem.
///
/// Rejects empty names, path separators, and the `.`/`..` directory names.
pub fn check_language_name(field: &str, language: &str) -> Result<(), ConfigError> {
    if language.trim().is_empty() {
        return Err(invalid(format!("{field} cannot be empty")));
    }
    if language.contains(['/', '\\']) {
        return Err(invalid(format!(
            "{field} '{language}' cannot contain path separators"
        )));
    }
    if matches!(language, "." | "..") {
        return Err(invalid(format!("{field} '{language}' is not a valid name")));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError(message.into())
}
