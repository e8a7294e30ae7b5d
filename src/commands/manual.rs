//! Manual mode - values come from command-line arguments

use anyhow::{Context, Result};

use pybootstrap::{ManualInput, ScaffoldValues};

use crate::GlobalArgs;

pub fn execute(global: &GlobalArgs, input: ManualInput) -> Result<()> {
    tracing::info!(name = %input.name, "manual mode");
    let config = super::load_config(global)?;
    let scaffold = super::open_scaffold(global, &config)?;

    let values = ScaffoldValues::from_manual(input).context("Failed to collect values")?;
    super::generate(&scaffold, &values)
}
