//! Configuration loading.
//!
//! Settings live in `<config dir>/tscrub/config.toml` and provide the
//! defaults for the CLI flags; a flag given on the command line always
//! wins. A missing file means defaults, a malformed file is an error.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::files::DEFAULT_SUFFIX;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scrubbing defaults.
    pub clean: CleanSection,
    /// Output file naming.
    pub output: OutputSection,
}

/// Scrubbing defaults section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanSection {
    /// Keep BACKSPACE characters by default.
    pub keep_backspace: bool,
    /// Keep BELL characters by default.
    pub keep_bell: bool,
}

/// Output naming section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Suffix appended to the file stem of cleaned files. Also marks files
    /// that must not be cleaned again. An empty value falls back to the
    /// default suffix.
    pub suffix: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(dir.join("tscrub").join("config.toml"))
    }

    /// Loads the configuration file, falling back to defaults when it does
    /// not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses a configuration document.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid TOML")?;
        Ok(config)
    }
}
