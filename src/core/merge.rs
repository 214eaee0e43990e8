//! Reconciles a translation catalog with a fresh extraction.
//!
//! New keys are inserted with their empty placeholder, existing leaf values
//! are never touched, and any structural disagreement between the two trees
//! aborts the merge with the full path of the offending key.

use thiserror::Error;

use super::tree::{KeyPath, KeyTree, Node};

/// Structural inconsistency between a catalog and an extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("key `{path}` has sub-keys in target, but is leaf in source extraction")]
    SubtreeInTarget { path: KeyPath },
    #[error("key `{path}` is leaf in target, but has sub-keys in source extraction")]
    LeafInTarget { path: KeyPath },
    #[error("key `{path}` is in target, but not in source extraction")]
    NotInSource { path: KeyPath },
}

impl MergeError {
    pub fn path(&self) -> &KeyPath {
        match self {
            MergeError::SubtreeInTarget { path }
            | MergeError::LeafInTarget { path }
            | MergeError::NotInSource { path } => path,
        }
    }
}

/// What a successful merge changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Leaf keys inserted into the target, in sorted order.
    pub added: Vec<KeyPath>,
    /// Whether any key, leaf or subtree, was inserted.
    pub changed: bool,
}

/// Merges `keys` into `into` in place.
///
/// On error `into` may already hold some inserted keys; callers that persist
/// the target must discard it.
pub fn merge(into: &mut KeyTree, keys: &KeyTree) -> Result<MergeReport, MergeError> {
    let mut report = MergeReport::default();
    merge_level(into, keys, &KeyPath::root(), &mut report)?;
    Ok(report)
}

fn merge_level(
    into: &mut KeyTree,
    keys: &KeyTree,
    path: &KeyPath,
    report: &mut MergeReport,
) -> Result<(), MergeError> {
    for (key, source) in keys.iter() {
        let key_path = path.child(key);

        let Some(target) = into.get_mut(key) else {
            match source {
                Node::Leaf(_) => report.added.push(key_path),
                Node::Tree(subtree) => report.added.extend(subtree.leaf_paths(&key_path)),
            }
            report.changed = true;
            into.insert(key.clone(), source.clone());
            continue;
        };

        match (target, source) {
            (Node::Tree(target), Node::Tree(source)) => {
                merge_level(target, source, &key_path, report)?;
            }
            (Node::Tree(_), Node::Leaf(_)) => {
                return Err(MergeError::SubtreeInTarget { path: key_path });
            }
            (Node::Leaf(_), Node::Tree(_)) => {
                return Err(MergeError::LeafInTarget { path: key_path });
            }
            (Node::Leaf(_), Node::Leaf(_)) => {}
        }
    }

    if let Some(orphan) = into.keys().find(|key| !keys.contains_key(key)) {
        return Err(MergeError::NotInSource {
            path: path.child(orphan),
        });
    }

    Ok(())
}
