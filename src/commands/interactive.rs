//! Interactive mode - prompt for every value, then generate

use anyhow::{Context, Result};

use pybootstrap::prompt;

use crate::GlobalArgs;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    tracing::info!("interactive mode");
    let config = super::load_config(global)?;
    // Load templates before prompting so a bad template dir fails fast
    let scaffold = super::open_scaffold(global, &config)?;

    let values =
        prompt::collect_from_terminal(&config.defaults).context("Failed to read answers")?;
    println!();

    super::generate(&scaffold, &values)
}
