//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root.
//! Configuration is sparse: stock defaults are overridden by whichever keys
//! the user's file sets, and unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_dir = "docs"      # Content directory (root-level only)
//! index_filename = "index"  # Basename of the site-wide index document
//! base_url = "docs"         # URL prefix every output path lives under
//! default_landings = ""     # Comma-separated landing candidates, tried in
//!                           # order ("readme,index"). Empty = the basename
//!                           # of the first scanned document.
//! redirect = true           # Emit redirect stubs at directory roots; when
//!                           # false, landing documents are emitted a second
//!                           # time at the directory root instead.
//!
//! [template]
//! extends = "page"          # Built-in shell template wrapped around each
//!                           # document (omit for the plain shell)
//! yields = "content"        # Data key the document body is exposed under
//! ```
//!
//! The configuration value is immutable for the duration of one build and is
//! passed explicitly to every component — nothing reads it ambiently.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Docs site configuration loaded from `config.toml`.
///
/// All fields have defaults; user files need only override what they want.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Content directory, relative to the invocation directory.
    pub content_dir: String,
    /// Basename of the document supplying the site-wide index. Matched by
    /// prefix, so `index` also claims `index.md` and `index.generated.md`.
    pub index_filename: String,
    /// URL prefix joined ahead of every output path. May be empty.
    pub base_url: String,
    /// Comma-separated basenames tried, in order, when resolving a
    /// directory's landing page. Empty means "basename of the first
    /// scanned document".
    pub default_landings: String,
    /// Emit redirect stubs at directory roots. When false, the landing
    /// document is emitted a second time at the directory root instead.
    pub redirect: bool,
    /// Template shell settings.
    pub template: TemplateConfig,
}

/// Which built-in shell wraps rendered documents, and under what data key
/// the document body is exposed to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Name of a built-in shell template. `None` selects the plain shell.
    pub extends: Option<String>,
    /// Data key the compiled document body is bound to inside the shell.
    pub yields: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            content_dir: "docs".to_string(),
            index_filename: "index".to_string(),
            base_url: "docs".to_string(),
            default_landings: String::new(),
            redirect: true,
            template: TemplateConfig::default(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            extends: None,
            yields: "content".to_string(),
        }
    }
}

impl DocsConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_filename.trim().is_empty() {
            return Err(ConfigError::Validation(
                "index_filename must not be empty".into(),
            ));
        }
        if self.template.yields.trim().is_empty() {
            return Err(ConfigError::Validation(
                "template.yields must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The configured landing candidates: comma-split, trimmed, empties
    /// dropped. An unset value yields an empty list, which callers fill with
    /// the first scanned document's basename.
    pub fn landing_candidates(&self) -> Vec<String> {
        self.default_landings
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Base URL with surrounding separators trimmed, for injection into
    /// render data as `docs_url`.
    pub fn docs_url(&self) -> String {
        crate::sitepath::SitePath::new(&self.base_url).as_string()
    }
}

/// Load config from `config.toml` in the content root. Falls back to stock
/// defaults when the file does not exist.
pub fn load_config(root: &Path) -> Result<DocsConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        DocsConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A stock `config.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# simple-docs configuration. All options are optional - the values
# below are the stock defaults.

# Content directory, relative to where simple-docs runs.
content_dir = "docs"

# Basename of the document supplying the site-wide index. Matched by prefix.
index_filename = "index"

# URL prefix every output path lives under. May be "" for the site root.
base_url = "docs"

# Comma-separated basenames tried, in order, when resolving a directory's
# landing page. Leave empty to use the first scanned document's basename.
default_landings = ""

# Emit redirect stubs at directory roots. Set to false to emit the landing
# document itself a second time at the directory root instead.
redirect = true

[template]
# Name of a built-in shell template to wrap documents in ("page").
# Omit to use the plain shell.
# extends = "page"

# Data key the compiled document body is bound to inside the shell.
yields = "content"
"#
    .to_string()
}
