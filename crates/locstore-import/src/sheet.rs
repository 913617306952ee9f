//! Parsing of the exported sheet into catalogs.
//!
//! The format is plain comma-separated text with no quoting support: a
//! cell containing a comma splits into two cells.

use crate::error::{ImportError, ImportResult};
use locstore_config::check_language_name;
use locstore_i18n::{TranslationCatalog, TranslationEntry};
use tracing::{debug, warn};

/// Split a sheet into one catalog per language column.
///
/// Row 0 is the header: `key-label, lang1, lang2, ...`. In every data row
/// the first cell is the key and the following cells are the values, in
/// header order. Cells are trimmed. Blank lines, rows with fewer than two
/// cells and rows with an empty key are skipped. Missing trailing cells
/// become empty values. Languages come back in header order.
///
/// Header names become catalog file names, so a header that is `.`, `..`
/// or contains a path separator fails the whole sheet.
pub fn parse_sheet(data: &str) -> ImportResult<Vec<TranslationCatalog>> {
    let lines: Vec<&str> = data
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(ImportError::NoDataRows);
    }

    let columns = language_columns(lines[0])?;
    let mut catalogs: Vec<TranslationCatalog> = columns
        .iter()
        .map(|(_, language)| TranslationCatalog::new(*language))
        .collect();

    for (row_number, line) in lines.iter().enumerate().skip(1) {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() < 2 {
            debug!("Skipping row {}: fewer than two cells", row_number);
            continue;
        }

        let key = cells[0].trim();
        if key.is_empty() {
            debug!("Skipping row {}: empty key", row_number);
            continue;
        }

        for ((cell, _), catalog) in columns.iter().zip(catalogs.iter_mut()) {
            let value = cells.get(*cell).map_or("", |value| value.trim());
            catalog.push(TranslationEntry::new(key, value));
        }
    }

    Ok(catalogs)
}

/// Cell index and language name of every usable header column.
///
/// Empty headers are skipped. Names that cannot be file stems are an error,
/// as is a header with no language left.
fn language_columns(header: &str) -> ImportResult<Vec<(usize, &str)>> {
    let mut columns = Vec::new();
    for (cell, language) in header.split(',').map(str::trim).enumerate().skip(1) {
        if language.is_empty() {
            warn!("Skipping language column {} with an empty header", cell);
            continue;
        }
        check_language_name("sheet header", language).map_err(|source| {
            ImportError::InvalidLanguage {
                language: language.to_string(),
                source,
            }
        })?;
        columns.push((cell, language));
    }

    if columns.is_empty() {
        return Err(ImportError::NoLanguageColumns);
    }
    Ok(columns)
}
