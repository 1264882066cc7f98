//! Clean target list loading from targets.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Structure to deserialize the target list from TOML
#[derive(Debug, Deserialize)]
struct TargetConfig {
    directories: Vec<String>,
}

// Embed the TOML file directly in the binary at compile time
const TARGETS_TOML: &str = include_str!("../targets.toml");

/// The built-in clean target list.
pub fn default_targets() -> Result<Vec<String>> {
    parse_targets(TARGETS_TOML).context("Failed to parse embedded targets TOML")
}

/// Load a clean target list from a user-supplied TOML file.
pub fn load_targets(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read target list from {}", path.display()))?;
    parse_targets(&content)
        .with_context(|| format!("Failed to parse target list from {}", path.display()))
}

/// Parse a target list, dropping blank entries but preserving order.
fn parse_targets(content: &str) -> Result<Vec<String>> {
    let config: TargetConfig = toml::from_str(content)?;

    Ok(config
        .directories
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}
