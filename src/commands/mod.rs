pub mod interactive;
pub mod manual;
pub mod undo;

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};

use pybootstrap::{config, Config, Scaffold, ScaffoldValues};

use crate::GlobalArgs;

/// Load the config named on the command line, or the user default
fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config = match &global.config {
        Some(path) => config::load(path)?,
        None => config::load_default()?,
    };
    Ok(config)
}

fn output_root(global: &GlobalArgs) -> Result<PathBuf> {
    match &global.output_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn open_scaffold(global: &GlobalArgs, config: &Config) -> Result<Scaffold> {
    let root = output_root(global)?;
    let scaffold = Scaffold::from_config(&root, config, global.templates.as_deref())
        .context("Failed to load templates")?;
    tracing::debug!(
        root = %root.display(),
        source = ?scaffold.templates().source(),
        templates = scaffold.templates().len(),
        "scaffold ready"
    );
    Ok(scaffold)
}

/// Shared tail of `interactive` and `manual`
fn generate(scaffold: &Scaffold, values: &ScaffoldValues) -> Result<()> {
    let written = scaffold
        .generate(values)
        .with_context(|| format!("Failed to generate package '{}'", values.name))?;

    for path in &written {
        println!("  {} Created {}", "✓".green(), display_path(scaffold.root(), path));
    }
    println!(
        "\n{}",
        format!("✅ Generated {} file(s) for {}", written.len(), values.name).bold()
    );
    Ok(())
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
