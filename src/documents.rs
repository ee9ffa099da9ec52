//! Mutations on the document collections.

use anyhow::{Context, Result};
use ppdo_core::Record;
use tracing::info;

use crate::config::Config;
use crate::dataset::{self, Dataset};

/// Remove the record with `id` and write the collection back.
pub fn run_delete<R: Dataset>(config: &Config, id: &str) -> Result<()> {
    let mut store = dataset::load::<R>(config)?;
    let removed = store
        .remove(id)
        .with_context(|| format!("Cannot delete from {}", R::LABEL))?;
    dataset::save(config, &store)?;
    info!(collection = R::LABEL, id = removed.id(), "record deleted");
    println!("Deleted {} record {}.", R::LABEL, removed.id());
    Ok(())
}
