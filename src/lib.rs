//! i18n-sync - translation key extraction for HTML and script sources
//!
//! i18n-sync scans HTML files for `data-i18n="KEY"` attributes and JavaScript or
//! TypeScript files for `.translate('KEY')` calls, then merges the keys it finds
//! into nested JSON translation catalogs. Existing translations are kept, new
//! keys get an empty placeholder, and catalog entries that no longer appear in
//! any source are reported as errors so they can be removed by hand.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run loop, report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, key trees, catalog I/O and merging
//! - `logging`: Diagnostic logging setup

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
