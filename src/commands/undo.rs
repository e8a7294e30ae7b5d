use anyhow::{Context, Result};
use colored::*;

use crate::GlobalArgs;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    tracing::info!("undo mode");
    let config = super::load_config(global)?;
    let scaffold = super::open_scaffold(global, &config)?;

    let removed = scaffold
        .cleanup()
        .context("Failed to remove generated files")?;

    if removed.is_empty() {
        println!("{}", "Nothing to remove.".dimmed());
        return Ok(());
    }

    for path in &removed {
        println!(
            "  {} Removed {}",
            "✓".green(),
            super::display_path(scaffold.root(), path)
        );
    }
    Ok(())
}
