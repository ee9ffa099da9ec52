use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding `incoming.json`, `outgoing.json`, `concerns.json`
    /// and `offices.json`.
    pub dir: PathBuf,
    /// Session file (pinned offices). Defaults to `<dir>/session.json`.
    #[serde(default)]
    pub session: Option<PathBuf>,
}

impl DataConfig {
    pub fn session_path(&self) -> PathBuf {
        self.session
            .clone()
            .unwrap_or_else(|| self.dir.join("session.json"))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

fn default_page_size() -> usize {
    10
}
fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_incoming")]
    pub incoming: usize,
    #[serde(default = "default_outgoing")]
    pub outgoing: usize,
    #[serde(default = "default_concerns")]
    pub concerns: usize,
    #[serde(default = "default_year")]
    pub year: i32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            incoming: default_incoming(),
            outgoing: default_outgoing(),
            concerns: default_concerns(),
            year: default_year(),
        }
    }
}

fn default_seed() -> u64 {
    2024
}
fn default_incoming() -> usize {
    50
}
fn default_outgoing() -> usize {
    40
}
fn default_concerns() -> usize {
    30
}
fn default_year() -> i32 {
    2024
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

impl PaginationConfig {
    pub fn allows(&self, page_size: usize) -> bool {
        self.page_size_options.contains(&page_size)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    // Validate pagination
    if config.pagination.page_size == 0 {
        anyhow::bail!("pagination.page_size must be >= 1");
    }
    if config.pagination.page_size_options.is_empty() {
        anyhow::bail!("pagination.page_size_options must not be empty");
    }
    if config.pagination.page_size_options.contains(&0) {
        anyhow::bail!("pagination.page_size_options entries must be >= 1");
    }
    if !config.pagination.allows(config.pagination.page_size) {
        anyhow::bail!(
            "pagination.page_size ({}) must be one of page_size_options {:?}",
            config.pagination.page_size,
            config.pagination.page_size_options
        );
    }

    // Validate seed
    if !(1900..=2100).contains(&config.seed.year) {
        anyhow::bail!("seed.year must be in [1900, 2100]");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cfg = parse_config("[data]\ndir = \"./data\"\n").unwrap();
        assert_eq!(cfg.pagination.page_size, 10);
        assert_eq!(cfg.pagination.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(cfg.seed.incoming, 50);
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.data.session_path(), PathBuf::from("./data/session.json"));
    }

    #[test]
    fn test_missing_data_section_fails() {
        assert!(parse_config("[pagination]\npage_size = 10\n").is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = parse_config("[data]\ndir = \"d\"\n[pagination]\npage_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_page_size_must_be_an_option() {
        let cfg = "[data]\ndir = \"d\"\n[pagination]\npage_size = 20\npage_size_options = [10, 50]\n";
        assert!(parse_config(cfg).is_err());

        let cfg = "[data]\ndir = \"d\"\n[pagination]\npage_size = 50\npage_size_options = [10, 50]\n";
        assert_eq!(parse_config(cfg).unwrap().pagination.page_size, 50);
    }

    #[test]
    fn test_explicit_session_path() {
        let cfg = parse_config("[data]\ndir = \"d\"\nsession = \"/tmp/s.json\"\n").unwrap();
        assert_eq!(cfg.data.session_path(), PathBuf::from("/tmp/s.json"));
    }
}
