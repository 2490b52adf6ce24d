//! Configuration file handling
//!
//! The config lives at `~/.config/speedctl/config.toml` unless
//! `SPEEDCTL_CONFIG` points elsewhere. Every section has defaults, so a
//! missing file or a partial one both load cleanly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::speed::DEFAULT_RATE;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SPEEDCTL_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub video: VideoConfig,
}

/// The `[display]` section: which speed elements the panel has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the `2.00x` label
    pub show_label: bool,
    /// Speed buttons, each declared by its speed value
    pub buttons: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_label: true,
            buttons: ["0.5", "1", "1.5", "2", "4"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// The `[video]` section: the element the session starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Rate the element starts at
    pub initial_rate: f64,
    /// Whether the element exposes a playback rate
    pub rate_supported: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            initial_rate: DEFAULT_RATE,
            rate_supported: true,
        }
    }
}

impl Config {
    /// Resolve the config file path.
    ///
    /// `SPEEDCTL_CONFIG` wins, then the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("speedctl").join("config.toml"))
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
