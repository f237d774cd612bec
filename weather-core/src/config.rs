use anyhow::{Context, Result, anyhow};
use chrono::FixedOffset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::{share::SharePlatform, time::parse_utc_offset};

/// Link appended to shared messages when none is configured.
pub const DEFAULT_APP_URL: &str = "https://openweathermap.org/";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// utc_offset = "+02:00"
/// app_url = "https://weather.example/"
/// default_platform = "telegram"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Viewer offset override; the machine's local offset is used when unset.
    pub utc_offset: Option<String>,

    pub app_url: Option<String>,

    /// Share platform used when none is given on the command line.
    pub default_platform: Option<String>,
}

impl Config {
    /// The configured viewer offset, if any.
    pub fn utc_offset(&self) -> Result<Option<FixedOffset>> {
        self.utc_offset
            .as_deref()
            .map(|raw| {
                parse_utc_offset(raw).map_err(|e| {
                    anyhow!("{e}\nHint: run `weather configure` and enter an offset like +02:00.")
                })
            })
            .transpose()
    }

    pub fn app_url(&self) -> &str {
        self.app_url.as_deref().unwrap_or(DEFAULT_APP_URL)
    }

    pub fn default_platform(&self) -> Result<Option<SharePlatform>> {
        self.default_platform
            .as_deref()
            .map(|raw| SharePlatform::try_from(raw).map_err(anyhow::Error::from))
            .transpose()
    }

    pub fn set_default_platform(&mut self, platform: SharePlatform) {
        self.default_platform = Some(platform.as_str().to_string());
    }

    /// Store the offset after checking it parses.
    pub fn set_utc_offset(&mut self, raw: &str) -> Result<()> {
        parse_utc_offset(raw)?;
        self.utc_offset = Some(raw.trim().to_string());
        Ok(())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
