use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level configuration, read from an optional TOML file.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JalaliConfig {
    /// Reject Gregorian dates that do not exist.
    #[serde(default = "default_true")]
    pub strict: bool,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for JalaliConfig {
    fn default() -> Self {
        Self {
            strict: true,
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub time: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            time: false,
        }
    }
}

impl OutputConfig {
    /// Returns the CLI override if given, else the configured separator.
    pub fn separator<'a>(&'a self, cli_override: Option<&'a str>) -> &'a str {
        cli_override.unwrap_or(&self.separator)
    }
}

fn default_true() -> bool {
    true
}
fn default_separator() -> String {
    "-".to_string()
}

/// Loads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<JalaliConfig> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(JalaliConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: JalaliConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}
