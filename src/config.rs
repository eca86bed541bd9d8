//! Configuration loader plus strongly typed settings structures.
//!
//! Settings live in a single `config.toml` under the data directory
//! (`~/.dumile` unless overridden). The embedded default file is extracted on
//! first run so users have something to edit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "DUMILE_DIR";

/// Top-level configuration object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wordnet: WordNetConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub buttons: ButtonColorsConfig,
}

/// Where to find the WordNet dictionary files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordNetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Frame geometry and event loop pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_width")]
    pub width: u16,
    #[serde(default = "default_height")]
    pub height: u16,
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

/// Button colors as hex strings ("#RRGGBB")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonColorsConfig {
    #[serde(default = "default_button_color")]
    pub default_color: String,
    #[serde(default = "default_hover_color")]
    pub hover_color: String,
    #[serde(default = "default_button_text_color")]
    pub text_color: String,
}

impl Default for ButtonColorsConfig {
    fn default() -> Self {
        Self {
            default_color: default_button_color(),
            hover_color: default_hover_color(),
            text_color: default_button_text_color(),
        }
    }
}

fn default_width() -> u16 {
    120
}

fn default_height() -> u16 {
    20
}

fn default_poll_timeout_ms() -> u64 {
    50
}

fn default_button_color() -> String {
    "#1F6AA5".to_string()
}

fn default_hover_color() -> String {
    "#FF5733".to_string()
}

fn default_button_text_color() -> String {
    "#FFFFFF".to_string()
}

impl Config {
    /// Load config from the data directory, extracting the default file on first run
    pub fn load() -> Result<Self> {
        Self::extract_defaults()?;
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load config from an explicit file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parse TOML config contents
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// The configuration shipped with the binary
    #[cfg(test)]
    pub fn embedded_default() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG).context("Embedded default config is invalid")
    }

    /// Write the embedded config.toml if none exists yet (idempotent)
    pub fn extract_defaults() -> Result<()> {
        let base = Self::base_dir()?;
        fs::create_dir_all(&base)
            .with_context(|| format!("Failed to create data directory {:?}", base))?;

        let config_path = Self::config_path()?;
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write default config to {:?}", config_path))?;
            tracing::info!("Extracted default config to {:?}", config_path);
        }
        Ok(())
    }

    /// Get the base data directory (~/.dumile/)
    /// Can be overridden with the DUMILE_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".dumile"))
    }

    /// Returns: ~/.dumile/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Returns: ~/.dumile/dumile.log
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("dumile.log"))
    }

    /// Returns: ~/.dumile/wordnet (a place to drop a WordNet dict directory)
    pub fn bundled_wordnet_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("wordnet"))
    }
}
