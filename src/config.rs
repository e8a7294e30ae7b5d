//! User configuration
//!
//! Handles `~/.pybootstrap/config.toml`. Every section is optional; a missing
//! file means "all defaults".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::paths;

// =============================================================================
// Config Types
// =============================================================================

/// Configuration stored in `~/.pybootstrap/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub templates: TemplatesSection,
    /// Extra template id → destination entries, merged over the built-in table
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, PathBuf>,
}

/// Defaults offered by the interactive prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default = "default_console_script")]
    pub console_script: bool,
}

fn default_console_script() -> bool {
    true
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            author_name: None,
            author_email: None,
            repository: None,
            console_script: default_console_script(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplatesSection {
    /// Scan this directory instead of using the built-in templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

// =============================================================================
// Load
// =============================================================================

/// Load config from `~/.pybootstrap/config.toml`
pub fn load_default() -> Result<Config> {
    load(&paths::config_path())
}

/// Load config from an explicit path; a missing file yields the defaults
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;

    toml::from_str(&contents).map_err(|e| ScaffoldError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
