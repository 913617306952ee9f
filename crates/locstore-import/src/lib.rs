//! # locstore Import
//!
//! Converts a spreadsheet into per-language catalog files.
//!
//! The first column of the sheet holds the keys and every further column
//! holds one language, named by its header cell. The sheet can be read
//! from a local CSV file or downloaded from a Google Sheets edit URL.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fetch;
pub mod importer;
pub mod sheet;

pub use error::{ImportError, ImportResult};
pub use fetch::{sheet_export_url, SheetFetcher};
pub use importer::{CatalogImporter, ImportSummary};
pub use sheet::parse_sheet;
