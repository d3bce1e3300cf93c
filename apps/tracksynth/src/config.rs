//! Fleet configuration: TOML file plus command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use ts_fleet::FleetConfig;

use crate::cli::Cli;

/// Parse a TOML document into a [`FleetConfig`].  Absent keys keep their
/// defaults; unknown keys are ignored.
pub fn parse_config(text: &str) -> Result<FleetConfig> {
    toml::from_str(text).context("invalid fleet config")
}

/// Read and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<FleetConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// The effective configuration: file (or defaults), then CLI flags.
pub fn resolve(cli: &Cli) -> Result<FleetConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FleetConfig::default(),
    };
    if let Some(count) = cli.count {
        config.object_count = count;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(threads) = cli.threads {
        config.num_threads = Some(threads);
    }
    config.validate()?;
    Ok(config)
}
