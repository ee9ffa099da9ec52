//! Tracing subscriber setup.
//!
//! Logs go to stderr so `--json` output on stdout stays parseable.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Pick the filter directive: `-v` wins, then `RUST_LOG`, then the config.
fn directive(config: &LoggingConfig, verbose: bool, env: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| config.level.clone())
}

pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let directive = directive(
        config,
        verbose,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter: {directive}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
