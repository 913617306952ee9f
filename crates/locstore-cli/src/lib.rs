//! # locstore
//!
//! Command line front end for the localization catalog store.
//!
//! This crate wires configuration, logging, the catalog store, locale
//! detection and the sheet importer together behind the `locstore` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;

pub use app::App;
pub use cli::{Cli, Command, ImportArgs, LogFormat};
pub use error::*;
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
