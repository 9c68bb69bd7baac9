use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level ethcal configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EthcalConfig {
    /// Grid rendering settings.
    #[serde(default)]
    pub render: RenderToml,

    /// Interactive prompt settings.
    #[serde(default)]
    pub interactive: InteractiveToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default = "default_true")]
    pub ethiopian_row: bool,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            ethiopian_row: true,
        }
    }
}

fn default_cell_width() -> usize {
    7
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractiveToml {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for InteractiveToml {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    "Enter a year (Julian or Gregorian / 0 to exit): ".to_string()
}

/// Loads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<EthcalConfig> {
    let Some(path) = path else {
        return Ok(EthcalConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
