//! Key scanners for markup and script sources.
//!
//! Both scanners are plain pattern searches over raw text. Markup is never
//! parsed, so malformed documents are scanned just like well-formed ones.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::Config;

/// Which scanner applies to a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Structured documents scanned for `attribute="KEY"`.
    Markup,
    /// Scripts scanned for `.method('KEY')` and `.method("KEY")`.
    Script,
}

impl SourceKind {
    /// Picks the scanner for `path` by its extension, or `None` when the
    /// extension is not configured for either scanner.
    pub fn detect(path: &Path, config: &Config) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if config.is_markup_extension(extension) {
            Some(SourceKind::Markup)
        } else if config.is_script_extension(extension) {
            Some(SourceKind::Script)
        } else {
            None
        }
    }
}

/// Compiled key patterns for one attribute name and one method name.
#[derive(Debug, Clone)]
pub struct KeyScanner {
    attribute: Regex,
    single_quoted_call: Regex,
    double_quoted_call: Regex,
}

impl KeyScanner {
    pub fn new(attribute: &str, method: &str) -> Result<Self> {
        let attribute_pattern = format!(r#"{}="([^"]+)""#, regex::escape(attribute));
        let method = regex::escape(method);
        let single_quoted_pattern = format!(r#"\.{method}\(\s*'([^']+)'"#);
        let double_quoted_pattern = format!(r#"\.{method}\(\s*"([^"]+)""#);

        Ok(Self {
            attribute: Regex::new(&attribute_pattern)
                .with_context(|| format!("Invalid attribute pattern: {}", attribute_pattern))?,
            single_quoted_call: Regex::new(&single_quoted_pattern)
                .with_context(|| format!("Invalid call pattern: {}", single_quoted_pattern))?,
            double_quoted_call: Regex::new(&double_quoted_pattern)
                .with_context(|| format!("Invalid call pattern: {}", double_quoted_pattern))?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.attribute, &config.translate_method)
    }

    pub fn scan<'a>(&self, kind: SourceKind, content: &'a str) -> Vec<&'a str> {
        match kind {
            SourceKind::Markup => self.scan_markup(content),
            SourceKind::Script => self.scan_script(content),
        }
    }

    /// Keys used as the attribute value, in order of appearance.
    pub fn scan_markup<'a>(&self, content: &'a str) -> Vec<&'a str> {
        captures(&self.attribute, content).collect()
    }

    /// Keys passed as a string literal to the translate method.
    ///
    /// Single-quoted calls come first, then double-quoted ones. An escaped
    /// quote of the same kind ends the literal early.
    pub fn scan_script<'a>(&self, content: &'a str) -> Vec<&'a str> {
        captures(&self.single_quoted_call, content)
            .chain(captures(&self.double_quoted_call, content))
            .collect()
    }
}

fn captures<'r, 'a>(regex: &'r Regex, content: &'a str) -> impl Iterator<Item = &'a str> + 'r
where
    'a: 'r,
{
    regex
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
