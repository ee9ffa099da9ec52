//! In-place updates to e-concerns.

use anyhow::{Context, Result};
use ppdo_core::models::{Concern, ConcernStatus};
use tracing::info;

use crate::config::Config;
use crate::dataset;

pub fn run_set_status(config: &Config, id: &str, status: &str) -> Result<()> {
    let status: ConcernStatus = status.parse()?;
    let mut store = dataset::load::<Concern>(config)?;
    store
        .update_status(id, status)
        .with_context(|| format!("Cannot update concern {id}"))?;
    dataset::save(config, &store)?;
    info!(id, %status, "concern status updated");
    println!("Concern {id} is now {status}.");
    Ok(())
}

pub fn run_set_notes(config: &Config, id: &str, notes: &str) -> Result<()> {
    let mut store = dataset::load::<Concern>(config)?;
    store
        .update_notes(id, notes)
        .with_context(|| format!("Cannot update concern {id}"))?;
    dataset::save(config, &store)?;
    info!(id, chars = notes.chars().count(), "concern notes updated");
    println!("Notes saved for concern {id}.");
    Ok(())
}
