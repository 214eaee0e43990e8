//! Brings one catalog file in line with an extraction.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{
    catalog::Catalog,
    merge::merge,
    tree::{KeyPath, KeyTree},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Spaces per indentation level in the written file.
    pub indent: usize,
    /// Merge in memory only, never write.
    pub dry_run: bool,
}

/// Result of syncing a single catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub path: PathBuf,
    /// The file did not exist before this run.
    pub created: bool,
    /// Leaf keys added to the catalog.
    pub added: Vec<KeyPath>,
    /// The file was written.
    pub written: bool,
}

/// Load the catalog at `path`, merge `keys` into it and write it back.
///
/// Nothing is written unless the merge succeeds, so a structural error
/// leaves the file as it was.
pub fn sync_catalog(path: &Path, keys: &KeyTree, options: SyncOptions) -> Result<SyncOutcome> {
    let mut catalog = Catalog::open_or_create(path)?;
    if !catalog.existed() {
        tracing::debug!("{}: catalog does not exist, starting empty", path.display());
    }

    let report = merge(catalog.tree_mut(), keys)
        .with_context(|| format!("Failed to update catalog: {}", path.display()))?;
    tracing::debug!(
        "{}: merge added {} key(s)",
        path.display(),
        report.added.len()
    );

    let written = !options.dry_run;
    if written {
        catalog.save(options.indent)?;
        tracing::info!("{}: written", path.display());
    }

    Ok(SyncOutcome {
        path: path.to_path_buf(),
        created: !catalog.existed(),
        added: report.added,
        written,
    })
}
