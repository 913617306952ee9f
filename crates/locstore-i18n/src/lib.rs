//! # locstore I18n
//!
//! Runtime translation catalogs for locstore.
//!
//! This crate provides:
//!
//! - the catalog file model (`_items` of `_key`/`_value` pairs)
//! - discovery of available languages in the storage folder
//! - [`CatalogStore`], which loads one language and serves lookups with
//!   fallback to the default language and a `#key` sentinel for misses
//! - [`LocaleDetector`], which maps the system locale to a language once
//!   at startup
//! - [`CatalogEditor`] for adding, updating, removing and searching keys
//!
//! # Example
//!
//! ```no_run
//! use locstore_i18n::{CatalogStore, LocaleDetector, StorageLayout};
//!
//! let store = CatalogStore::new(StorageLayout::new("Assets/LocalizationStorage"), "English");
//! LocaleDetector::default().initialize(&store);
//!
//! println!("{}", store.get("greeting"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod editor;
pub mod error;
pub mod locale;
pub mod scanner;
pub mod storage;
pub mod store;

pub use catalog::{CatalogIndex, TranslationCatalog, TranslationEntry};
pub use editor::CatalogEditor;
pub use error::{EditError, EditResult, LoadFailure};
pub use locale::{language_code_of, LocaleDetector};
pub use scanner::LanguageScanner;
pub use storage::StorageLayout;
pub use store::{ActiveCatalog, CatalogStore, LoadReport, LoadStatus};
