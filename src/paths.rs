//! Filesystem layout for pybootstrap.
//!
//! Defines WHERE things live. No I/O, no validation.
//!
//! ```text
//! ~/.pybootstrap/
//! └── config.toml              # Prompt defaults, template dir, extra mappings
//!
//! {output root}/
//! ├── setup.py                 # Rendered templates land here by default
//! └── src/__main__.py          # ...unless the mapping table says otherwise
//! ```

use std::path::{Path, PathBuf};

/// Suffix marking a file as a template rather than literal output
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Destination used for template ids with no mapping entry
pub const DEFAULT_DESTINATION: &str = ".";

// =============================================================================
// User Level (~/.pybootstrap/)
// =============================================================================

/// User's pybootstrap home directory: `~/.pybootstrap/`
pub fn pybootstrap_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pybootstrap")
}

/// Global config file: `~/.pybootstrap/config.toml`
pub fn config_path() -> PathBuf {
    pybootstrap_home().join("config.toml")
}

// =============================================================================
// Output Level
// =============================================================================

/// Directory a template is written into: `{root}/{destination}`
pub fn destination_dir(root: &Path, destination: &Path) -> PathBuf {
    if destination == Path::new(DEFAULT_DESTINATION) {
        root.to_path_buf()
    } else {
        root.join(destination)
    }
}

/// Full path of a generated file: `{root}/{destination}/{filename}`
pub fn output_path(root: &Path, destination: &Path, filename: &str) -> PathBuf {
    destination_dir(root, destination).join(filename)
}
