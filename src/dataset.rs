//! JSON record files in the configured data directory.
//!
//! Each collection lives in its own file as a JSON array. Files are read
//! into a [`RecordStore`] (which enforces id uniqueness) and written back
//! whole after a mutation.

use anyhow::{Context, Result};
use ppdo_core::models::{Concern, IncomingDocument, Office, OutgoingDocument};
use ppdo_core::store::RecordStore;
use ppdo_core::Record;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;

/// A record type persisted as one file in the data directory.
pub trait Dataset: Record + Serialize + DeserializeOwned {
    const FILE: &'static str;
    /// Name used in CLI output.
    const LABEL: &'static str;
}

impl Dataset for IncomingDocument {
    const FILE: &'static str = "incoming.json";
    const LABEL: &'static str = "incoming";
}

impl Dataset for OutgoingDocument {
    const FILE: &'static str = "outgoing.json";
    const LABEL: &'static str = "outgoing";
}

impl Dataset for Concern {
    const FILE: &'static str = "concerns.json";
    const LABEL: &'static str = "concerns";
}

impl Dataset for Office {
    const FILE: &'static str = "offices.json";
    const LABEL: &'static str = "offices";
}

pub fn path_for<R: Dataset>(config: &Config) -> PathBuf {
    config.data.dir.join(R::FILE)
}

pub fn load<R: Dataset>(config: &Config) -> Result<RecordStore<R>> {
    let path = path_for::<R>(config);
    if !path.exists() {
        anyhow::bail!(
            "{} not found. Run `ppdo init` to seed the data directory.",
            path.display()
        );
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records: Vec<R> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(file = R::FILE, count = records.len(), "loaded records");
    RecordStore::new(records).with_context(|| format!("Invalid records in {}", path.display()))
}

pub fn save<R: Dataset>(config: &Config, store: &RecordStore<R>) -> Result<()> {
    write_records(config, store.records())
}

pub fn write_records<R: Dataset>(config: &Config, records: &[R]) -> Result<()> {
    std::fs::create_dir_all(&config.data.dir).with_context(|| {
        format!(
            "Failed to create data directory: {}",
            config.data.dir.display()
        )
    })?;
    let path = path_for::<R>(config);
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(file = R::FILE, count = records.len(), "saved records");
    Ok(())
}
