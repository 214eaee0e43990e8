//! Runs the key scanners over a set of source files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    scan::{KeyScanner, SourceKind},
    tree::KeyTree,
};
use crate::config::Config;

/// Keys found in one extraction run.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Every recorded key, nested under the namespace key.
    pub keys: KeyTree,
    /// Files that were read and scanned.
    pub scanned_files: Vec<PathBuf>,
    /// Files skipped because no scanner handles their extension.
    pub skipped_files: Vec<PathBuf>,
}

impl Extraction {
    /// Number of distinct keys found.
    pub fn key_count(&self) -> usize {
        self.keys.leaf_count()
    }
}

pub struct Extractor {
    config: Config,
    scanner: KeyScanner,
}

impl Extractor {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            scanner: KeyScanner::from_config(config)?,
        })
    }

    /// Scan `files` in order and build the namespaced extraction tree.
    ///
    /// Unsupported files are collected in [`Extraction::skipped_files`]. An
    /// unreadable file or a conflicting key aborts the run.
    pub fn extract(&self, files: &[PathBuf]) -> Result<Extraction> {
        let mut keys = KeyTree::new();
        let mut scanned_files = Vec::new();
        let mut skipped_files = Vec::new();

        for path in files {
            let Some(kind) = SourceKind::detect(path, &self.config) else {
                tracing::debug!("{}: no scanner for this extension", path.display());
                skipped_files.push(path.clone());
                continue;
            };

            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read source file: {}", path.display()))?;
            let found = self.record_keys(kind, &content, &mut keys, path)?;
            tracing::debug!("{}: found {} key reference(s)", path.display(), found);
            scanned_files.push(path.clone());
        }

        Ok(Extraction {
            keys: keys.nest_under(&self.config.namespace),
            scanned_files,
            skipped_files,
        })
    }

    /// Record every key in `content` into `keys`, returning how many key
    /// references were seen (duplicates included).
    pub fn record_keys(
        &self,
        kind: SourceKind,
        content: &str,
        keys: &mut KeyTree,
        path: &Path,
    ) -> Result<usize> {
        let found = self.scanner.scan(kind, content);
        for key in &found {
            keys.record(key)
                .with_context(|| format!("Conflicting key in {}", path.display()))?;
        }
        Ok(found.len())
    }
}
