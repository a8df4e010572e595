use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level astrocalc configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AstrocalcConfig {
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Era settings.
    #[serde(default)]
    pub eras: ErasToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// First day of the Gregorian calendar, `YYYY-MM-DD`.
    #[serde(default = "default_start_gregorian")]
    pub start_gregorian: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            start_gregorian: default_start_gregorian(),
        }
    }
}

fn default_start_gregorian() -> String {
    "1582-10-15".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErasToml {
    /// Built-in era table to start from: `japanese` or `none`.
    #[serde(default = "default_builtin")]
    pub builtin: String,

    /// Extra eras added to the table.
    #[serde(default)]
    pub custom: Vec<EraToml>,
}

impl Default for ErasToml {
    fn default() -> Self {
        Self {
            builtin: default_builtin(),
            custom: Vec::new(),
        }
    }
}

fn default_builtin() -> String {
    "japanese".to_string()
}

/// A user-defined era.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EraToml {
    pub name: String,
    #[serde(default)]
    pub alias: String,
    /// First day of the era, `YYYY-MM-DD`.
    pub start: String,
    #[serde(default)]
    pub check_bounds: bool,
}

/// Loads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<AstrocalcConfig> {
    let Some(path) = path else {
        return Ok(AstrocalcConfig::default());
    };
    info!(path = %path.display(), "reading configuration");
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
