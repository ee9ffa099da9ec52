//! Per-user session state persisted between invocations.
//!
//! Holds the pinned office codes. Commands open the session explicitly,
//! mutate it, and save it before returning; nothing reads it implicitly.

use anyhow::{Context, Result};
use ppdo_core::pins::PinSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub pinned_offices: PinSet,
}

#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    state: SessionState,
}

impl Session {
    /// Load the session at `path`, starting empty if the file does not exist.
    pub fn open(path: &Path) -> Result<Self> {
        let state = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read session file: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse session file: {}", path.display()))?
        } else {
            debug!(path = %path.display(), "no session file, starting empty");
            SessionState::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            state,
        })
    }

    pub fn pins(&self) -> &PinSet {
        &self.state.pinned_offices
    }

    pub fn pins_mut(&mut self) -> &mut PinSet {
        &mut self.state.pinned_offices
    }

    /// Drop pins whose office no longer exists.
    pub fn prune_pins<'a>(&mut self, known: impl IntoIterator<Item = &'a str>) {
        let known: Vec<&str> = known.into_iter().collect();
        let stale: Vec<String> = self
            .pins()
            .iter()
            .filter(|code| !known.contains(code))
            .map(str::to_string)
            .collect();
        for code in stale {
            warn!(code = %code, "dropping pin for unknown office");
            self.pins_mut().toggle(&code);
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_session() {
        let tmp = TempDir::new().unwrap();
        let session = Session::open(&tmp.path().join("session.json")).unwrap();
        assert!(session.pins().is_empty());
    }

    #[test]
    fn test_pins_survive_save_and_open() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("session.json");
        let mut session = Session::open(&path).unwrap();
        session.pins_mut().toggle("PHO");
        session.pins_mut().toggle("PEO");
        session.save().unwrap();

        let reopened = Session::open(&path).unwrap();
        let pins: Vec<&str> = reopened.pins().iter().collect();
        assert_eq!(pins, vec!["PEO", "PHO"]);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("pinned_offices"));
    }

    #[test]
    fn test_prune_drops_unknown_codes() {
        let tmp = TempDir::new().unwrap();
        let mut session = Session::open(&tmp.path().join("s.json")).unwrap();
        session.pins_mut().toggle("PHO");
        session.pins_mut().toggle("GONE");
        session.prune_pins(["PHO", "PGO"]);
        let pins: Vec<&str> = session.pins().iter().collect();
        assert_eq!(pins, vec!["PHO"]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Session::open(&path).is_err());
    }
}
