//! Template set and mapping table
//!
//! The built-in set is a static list of `(template file, body, destination)`
//! compiled into the binary. A directory can be scanned at run time instead;
//! in that case destinations come from the [`MappingTable`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};
use crate::paths::{DEFAULT_DESTINATION, TEMPLATE_SUFFIX};

// =============================================================================
// Built-in Templates
// =============================================================================

/// A template shipped inside the binary
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplate {
    /// File name including the `.j2` suffix
    pub file_name: &'static str,
    pub body: &'static str,
    pub destination: &'static str,
}

pub const BUILTIN: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        file_name: "README.md.j2",
        body: include_str!("../templates/README.md.j2"),
        destination: DEFAULT_DESTINATION,
    },
    BuiltinTemplate {
        file_name: "__main__.py.j2",
        body: include_str!("../templates/__main__.py.j2"),
        destination: "src",
    },
    BuiltinTemplate {
        file_name: "setup.py.j2",
        body: include_str!("../templates/setup.py.j2"),
        destination: DEFAULT_DESTINATION,
    },
];

/// Output filename for a template file name, `None` if it lacks the suffix
pub fn output_filename(template_name: &str) -> Option<&str> {
    template_name
        .strip_suffix(TEMPLATE_SUFFIX)
        .filter(|stem| !stem.is_empty())
}

// =============================================================================
// Template Set
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    Directory(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Output filename (template file name minus the suffix)
    pub id: String,
    pub body: String,
}

/// Every template one invocation renders or cleans up
#[derive(Debug, Clone)]
pub struct TemplateSet {
    source: TemplateSource,
    templates: Vec<Template>,
}

impl TemplateSet {
    pub fn builtin() -> Self {
        let templates = BUILTIN
            .iter()
            .filter_map(|t| {
                output_filename(t.file_name).map(|id| Template {
                    id: id.to_string(),
                    body: t.body.to_string(),
                })
            })
            .collect();

        Self {
            source: TemplateSource::Builtin,
            templates,
        }
    }

    /// Read every `*.j2` regular file directly inside `dir`, sorted by name
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut templates = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ScaffoldError::TemplateDir {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let Some(id) = output_filename(&file_name) else {
                tracing::warn!(file = %entry.path().display(), "skipping non-template file");
                continue;
            };

            let body =
                fs::read_to_string(entry.path()).map_err(|e| ScaffoldError::io(entry.path(), e))?;
            templates.push(Template {
                id: id.to_string(),
                body,
            });
        }

        tracing::debug!(dir = %dir.display(), count = templates.len(), "scanned templates");
        Ok(Self {
            source: TemplateSource::Directory(dir.to_path_buf()),
            templates,
        })
    }

    pub fn load(source: &TemplateSource) -> Result<Self> {
        match source {
            TemplateSource::Builtin => Ok(Self::builtin()),
            TemplateSource::Directory(dir) => Self::scan(dir),
        }
    }

    /// Build an in-memory set, mainly for tests and embedding callers
    pub fn from_templates(templates: Vec<Template>) -> Self {
        Self {
            source: TemplateSource::Builtin,
            templates,
        }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// =============================================================================
// Mapping Table
// =============================================================================

/// Template id → destination directory, relative to the output root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: BTreeMap<String, PathBuf>,
}

impl MappingTable {
    /// Destinations declared by the built-in templates
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .filter(|t| t.destination != DEFAULT_DESTINATION)
            .filter_map(|t| {
                output_filename(t.file_name)
                    .map(|id| (id.to_string(), PathBuf::from(t.destination)))
            })
            .collect();
        Self { entries }
    }

    /// Merge `overrides` over the current entries
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, PathBuf>) -> Self {
        for (id, dest) in overrides {
            self.entries.insert(id.clone(), dest.clone());
        }
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, destination: impl Into<PathBuf>) {
        self.entries.insert(id.into(), destination.into());
    }

    /// Destination for `id`, `.` when unmapped
    pub fn destination_for(&self, id: &str) -> &Path {
        self.entries
            .get(id)
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(DEFAULT_DESTINATION))
    }
}
