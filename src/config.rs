use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use epiweek_core::WeekSystem;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "epiweek.toml";

/// Top-level epiweek configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpiweekConfig {
    /// Default week numbering system (`mmwr`, `cdc` or `iso`).
    #[serde(default)]
    pub system: WeekSystem,

    /// Reference table settings.
    #[serde(default)]
    pub table: TableToml,
}

impl Default for EpiweekConfig {
    fn default() -> Self {
        Self {
            system: WeekSystem::default(),
            table: TableToml::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableToml {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

impl Default for TableToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
        }
    }
}

fn default_start_year() -> i32 {
    2015
}
fn default_end_year() -> i32 {
    2030
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, `epiweek.toml` in the working
/// directory is used if present, otherwise built-in defaults.
pub fn load(path: Option<&Path>) -> Result<EpiweekConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                debug!("no config file, using defaults");
                return Ok(EpiweekConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: EpiweekConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}
