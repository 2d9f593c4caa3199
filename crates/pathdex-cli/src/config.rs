//! `pathdex.toml` configuration.
//!
//! ```toml
//! [tree]
//! separator = "/"
//! collapse_drive_letters = false
//! ```
//!
//! Every key is optional; a missing file section means defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use pathdex_tree::TreeOptions;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Options the namespace is built and queried with.
    pub tree: TreeOptions,
}

impl CliConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid pathdex configuration")
    }

    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Failed to load config {}", path.display()))?;

        tracing::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
