use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use super::tree::{KeyPath, KeyTree, Node};

/// A JSON translation catalog backed by a file on disk.
///
/// The file is only touched by [`Catalog::save`]; a catalog whose file does
/// not exist yet starts out empty.
#[derive(Debug)]
pub struct Catalog {
    file_path: PathBuf,
    tree: KeyTree,
    existed: bool,
}

impl Catalog {
    /// Open an existing catalog file or start an empty one.
    pub fn open_or_create(path: &Path) -> Result<Self> {
        let existed = path.exists();
        let tree = if existed {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
            tree_from_json(value)
                .with_context(|| format!("Invalid catalog: {}", path.display()))?
        } else {
            KeyTree::new()
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            tree,
            existed,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn tree(&self) -> &KeyTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut KeyTree {
        &mut self.tree
    }

    /// Whether the file existed when the catalog was opened.
    pub fn existed(&self) -> bool {
        self.existed
    }

    /// Render the catalog with sorted keys and `indent` spaces per level.
    pub fn render(&self, indent: usize) -> Result<String> {
        render_tree(&self.tree, indent)
    }

    /// Save the catalog, creating parent directories as needed.
    ///
    /// Adds a trailing newline after the JSON document.
    pub fn save(&self, indent: usize) -> Result<()> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let content = self.render(indent)?;
        fs::write(&self.file_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}

/// Serialize a tree as pretty JSON with `indent` spaces per level.
pub fn render_tree(tree: &KeyTree, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut serializer).context("Failed to serialize JSON")?;
    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}

/// Convert parsed JSON into a [`KeyTree`].
///
/// The root must be an object and every value must be either a string or
/// another object.
pub fn tree_from_json(value: Value) -> Result<KeyTree> {
    match value {
        Value::Object(map) => object_to_tree(map, &KeyPath::root()),
        other => bail!(
            "Root of catalog must be an object, found {}",
            json_type_name(&other)
        ),
    }
}

fn object_to_tree(map: serde_json::Map<String, Value>, path: &KeyPath) -> Result<KeyTree> {
    let mut tree = KeyTree::new();
    for (key, value) in map {
        let key_path = path.child(&key);
        let node = match value {
            Value::String(text) => Node::Leaf(text),
            Value::Object(child) => Node::Tree(object_to_tree(child, &key_path)?),
            other => bail!(
                "Value at `{}` must be a string or an object, found {}",
                key_path,
                json_type_name(&other)
            ),
        };
        tree.insert(key, node);
    }
    Ok(tree)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
