//! Key extraction and catalog reconciliation.
//!
//! ## Pipeline
//!
//! 1. `extract`: scan source files with the `scan` patterns and record every
//!    key into a `tree::KeyTree` nested under the namespace key.
//! 2. `sync`: for each catalog, load it (`catalog`), reconcile it with the
//!    extraction (`merge`) and write it back.

pub mod catalog;
pub mod extract;
pub mod merge;
pub mod scan;
pub mod sync;
pub mod tree;

pub use catalog::Catalog;
pub use extract::{Extraction, Extractor};
pub use merge::{MergeError, MergeReport, merge};
pub use scan::{KeyScanner, SourceKind};
pub use sync::{SyncOptions, SyncOutcome, sync_catalog};
pub use tree::{KeyPath, KeyTree, Node, RecordError};
