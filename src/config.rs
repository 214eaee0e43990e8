use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nsyncrc.json";

/// Largest indentation accepted for written catalogs.
pub const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_attribute")]
    pub attribute: String,
    #[serde(default = "default_translate_method")]
    pub translate_method: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default = "default_markup_extensions")]
    pub markup_extensions: Vec<String>,
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,
}

fn default_attribute() -> String {
    "data-i18n".to_string()
}

fn default_translate_method() -> String {
    "translate".to_string()
}

fn default_namespace() -> String {
    "main".to_string()
}

fn default_indent() -> usize {
    4
}

fn default_markup_extensions() -> Vec<String> {
    vec!["html".to_string()]
}

fn default_script_extensions() -> Vec<String> {
    ["js", "ts"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attribute: default_attribute(),
            translate_method: default_translate_method(),
            namespace: default_namespace(),
            indent: default_indent(),
            markup_extensions: default_markup_extensions(),
            script_extensions: default_script_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.attribute.trim().is_empty() {
            bail!("'attribute' must not be empty");
        }
        if self.translate_method.trim().is_empty() {
            bail!("'translateMethod' must not be empty");
        }
        if self.namespace.is_empty() {
            bail!("'namespace' must not be empty");
        }
        if self.namespace.contains('.') {
            bail!("'namespace' must not contain '.': \"{}\"", self.namespace);
        }
        if self.indent > MAX_INDENT {
            bail!("'indent' must be at most {}, got {}", MAX_INDENT, self.indent);
        }

        for extension in self.markup_extensions.iter().chain(&self.script_extensions) {
            if extension.is_empty() {
                bail!("File extensions must not be empty");
            }
        }
        if let Some(shared) = self
            .markup_extensions
            .iter()
            .find(|ext| self.script_extensions.contains(*ext))
        {
            bail!(
                "Extension \"{}\" is listed in both 'markupExtensions' and 'scriptExtensions'",
                shared
            );
        }

        Ok(())
    }

    /// Strip leading dots so `".html"` and `"html"` are equivalent.
    fn normalize(mut self) -> Self {
        for extension in self
            .markup_extensions
            .iter_mut()
            .chain(self.script_extensions.iter_mut())
        {
            *extension = extension.trim_start_matches('.').to_string();
        }
        self
    }

    pub fn is_markup_extension(&self, extension: &str) -> bool {
        self.markup_extensions.iter().any(|ext| ext == extension)
    }

    pub fn is_script_extension(&self, extension: &str) -> bool {
        self.script_extensions.iter().any(|ext| ext == extension)
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub source: Option<PathBuf>,
}

/// Parse and validate a config file at a known location.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    let config = config.normalize();
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Load the config from `explicit` if given, otherwise search upward from
/// `start_dir`, falling back to defaults.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    match path {
        Some(path) => Ok(ConfigLoadResult {
            config: read_config_file(&path)?,
            source: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
