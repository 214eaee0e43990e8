//! Nested key trees.
//!
//! Both the fresh extraction result and a loaded translation catalog are
//! represented as a [`KeyTree`]: a sorted mapping from key segment to either a
//! leaf string or another tree. Extraction leaves are always empty
//! placeholders; catalog leaves hold translated values.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;
use thiserror::Error;

/// Dotted location of a key inside a [`KeyTree`], e.g. `main.nav.title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// The empty path, addressing the root of a tree.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for KeyPath {
    fn from(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self(dotted.split('.').map(String::from).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Error raised when recording a key would turn a leaf into a subtree or the
/// other way round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error(
        "key `{key}` conflicts at `{path}`: a key cannot be both a translation and a parent of other keys"
    )]
    KeyConflict { key: String, path: KeyPath },
}

/// A single value in a [`KeyTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(String),
    Tree(KeyTree),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&KeyTree> {
        match self {
            Node::Leaf(_) => None,
            Node::Tree(tree) => Some(tree),
        }
    }

    /// Number of leaves at or below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Tree(tree) => tree.leaf_count(),
        }
    }
}

/// Sorted nested mapping of key segments to [`Node`]s.
///
/// Serializes as a plain JSON object whose keys come out in lexicographic
/// order, which is what catalogs on disk use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyTree {
    entries: BTreeMap<String, Node>,
}

impl KeyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps this tree as the only child of `namespace`.
    pub fn nest_under(self, namespace: &str) -> Self {
        let mut root = Self::new();
        root.insert(namespace.to_string(), Node::Tree(self));
        root
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    pub fn insert(&mut self, key: String, node: Node) -> Option<Node> {
        self.entries.insert(key, node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Looks up a dotted key path, e.g. `"main.nav.title"`.
    pub fn lookup(&self, dotted: &str) -> Option<&Node> {
        let (first, rest) = match dotted.split_once('.') {
            Some((first, rest)) => (first, Some(rest)),
            None => (dotted, None),
        };
        let node = self.entries.get(first)?;
        match rest {
            None => Some(node),
            Some(rest) => node.as_tree()?.lookup(rest),
        }
    }

    /// Total number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        self.entries.values().map(Node::leaf_count).sum()
    }

    /// Paths of every leaf, in sorted order, prefixed by `prefix`.
    pub fn leaf_paths(&self, prefix: &KeyPath) -> Vec<KeyPath> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, prefix, &mut paths);
        paths
    }

    /// Records a dotted key with an empty placeholder value.
    ///
    /// Intermediate segments are created as subtrees when absent. Recording
    /// the same key again is a no-op. Fails when the key would have to pass
    /// through an existing leaf, or would replace an existing subtree.
    pub fn record(&mut self, key: &str) -> Result<(), RecordError> {
        let segments: Vec<&str> = key.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return Ok(());
        };

        let mut level = self;
        let mut path = KeyPath::root();
        for segment in parents {
            path = path.child(segment);
            let node = level
                .entries
                .entry(segment.to_string())
                .or_insert_with(|| Node::Tree(KeyTree::new()));
            level = match node {
                Node::Tree(tree) => tree,
                Node::Leaf(_) => {
                    return Err(RecordError::KeyConflict {
                        key: key.to_string(),
                        path,
                    });
                }
            };
        }

        if let Some(Node::Tree(_)) = level.entries.get(*last) {
            return Err(RecordError::KeyConflict {
                key: key.to_string(),
                path: path.child(last),
            });
        }
        level
            .entries
            .insert(last.to_string(), Node::Leaf(String::new()));
        Ok(())
    }
}

fn collect_leaf_paths(tree: &KeyTree, prefix: &KeyPath, paths: &mut Vec<KeyPath>) {
    for (key, node) in tree.iter() {
        let path = prefix.child(key);
        match node {
            Node::Leaf(_) => paths.push(path),
            Node::Tree(subtree) => collect_leaf_paths(subtree, &path, paths),
        }
    }
}
