//! potscan - translation key extractor
//!
//! potscan scans source files for `tr('key')` / `tr("key")` calls, collects the
//! unique keys and writes them as a gettext template (`.pot`) with empty
//! translations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, argument parsing, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (resolve, extract, render)

pub mod cli;
pub mod config;
pub mod core;
