//! Rendering preferences for the command-line shell.
//!
//! Stored as TOML at:
//!   %APPDATA%/WineColours/config.toml on Windows
//!   $XDG_CONFIG_HOME/wine_colours/config.toml on Linux
//!   ~/Library/Application Support/WineColours/config.toml on macOS
//!
//! The library itself never reads configuration; callers turn the settings
//! into [`RenderOptions`] and pass those explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::render::{default_gauge_width, GaugeOptions, GaugeScale, RenderOptions};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Diagram size, seed and gauge layout.
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Edge length of the square diagram in pixels.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Seed for scattered bubble and mineral placement.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Whether to append the gauge strip to the diagram.
    #[serde(default = "default_include_gauge")]
    pub include_gauge: bool,
    /// Gauge strip width; derived from `size` when absent.
    #[serde(default)]
    pub gauge_width: Option<u32>,
    #[serde(default)]
    pub gauge_scale: GaugeScale,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: default_seed(),
            include_gauge: default_include_gauge(),
            gauge_width: None,
            gauge_scale: GaugeScale::default(),
        }
    }
}

const fn default_size() -> u32 {
    512
}

const fn default_seed() -> u64 {
    42
}

const fn default_include_gauge() -> bool {
    true
}

impl RenderSettings {
    pub fn to_options(&self) -> RenderOptions {
        let gauge = self.include_gauge.then(|| GaugeOptions {
            width: self.gauge_width.unwrap_or_else(|| default_gauge_width(self.size)),
            scale: self.gauge_scale,
        });
        RenderOptions {
            size: self.size,
            seed: self.seed,
            gauge,
        }
    }
}

/// Path to the per-user config file, resolved via `directories::BaseDirs`.
pub fn default_config_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().context("Unable to determine OS config directory")?;
    Ok(base_dirs.config_dir().join("wine_colours").join(CONFIG_FILE_NAME))
}

/// Loads the configuration at `path`.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&data)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Loads the configuration from `path` (or the default location) if it
/// exists, otherwise returns defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    if path.exists() {
        load_from(&path)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration, creating parent directories as needed.
pub fn save(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    }
    let data = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, data).with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}
