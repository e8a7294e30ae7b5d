//! Generation and cleanup drivers
//!
//! A [`Scaffold`] owns everything both drivers need: the output root, the
//! template set and the mapping table. Cleanup recomputes the exact paths
//! generation would write, so the two stay symmetric without any record of
//! what was generated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, ScaffoldError};
use crate::paths;
use crate::render::Renderer;
use crate::templates::{MappingTable, TemplateSet, TemplateSource};
use crate::values::ScaffoldValues;

#[derive(Debug, Clone)]
pub struct Scaffold {
    root: PathBuf,
    templates: TemplateSet,
    mappings: MappingTable,
}

impl Scaffold {
    pub fn new(root: impl AsRef<Path>, templates: TemplateSet, mappings: MappingTable) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            templates,
            mappings,
        }
    }

    /// Built-in templates and mapping table, rooted at `root`
    pub fn builtin(root: impl AsRef<Path>) -> Self {
        Self::new(root, TemplateSet::builtin(), MappingTable::builtin())
    }

    /// Resolve the template source and mapping table from config.
    /// `templates_dir` (from the command line) wins over `[templates] dir`.
    pub fn from_config(
        root: impl AsRef<Path>,
        config: &Config,
        templates_dir: Option<&Path>,
    ) -> Result<Self> {
        let source = match templates_dir.or(config.templates.dir.as_deref()) {
            Some(dir) => TemplateSource::Directory(dir.to_path_buf()),
            None => TemplateSource::Builtin,
        };
        let templates = TemplateSet::load(&source)?;
        let mappings = MappingTable::builtin().with_overrides(&config.mappings);
        Ok(Self::new(root, templates, mappings))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Path every template renders to, in template order
    pub fn planned_paths(&self) -> Vec<PathBuf> {
        self.templates
            .iter()
            .map(|t| paths::output_path(&self.root, self.mappings.destination_for(&t.id), &t.id))
            .collect()
    }

    /// Render every template with `values`, returning the written paths.
    ///
    /// Files already written stay in place if a later template fails.
    pub fn generate(&self, values: &ScaffoldValues) -> Result<Vec<PathBuf>> {
        let renderer = Renderer::new(&self.templates)?;

        let mut written = Vec::with_capacity(self.templates.len());
        for template in self.templates.iter() {
            written.push(renderer.write(&template.id, values, &self.root, &self.mappings)?);
        }
        Ok(written)
    }

    /// Delete every planned path that currently is a regular file.
    /// Returns the removed paths; absent files are skipped silently.
    pub fn cleanup(&self) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for path in self.planned_paths() {
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "nothing to remove");
                continue;
            }
            fs::remove_file(&path).map_err(|e| ScaffoldError::io(&path, e))?;
            tracing::debug!(path = %path.display(), "removed");
            removed.push(path);
        }
        Ok(removed)
    }
}
