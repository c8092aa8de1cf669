use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const OFFLINE_ENV: &str = "FOGFIT_OFFLINE";
pub const USER_AGENT_ENV: &str = "FOGFIT_UA";

/// Process-wide settings, read once at startup and passed into the pipeline.
///
/// Example TOML:
/// offline = false
/// user_agent = "FogFit/1.0 (+https://example.com; contact: you@example.com)"
/// timeout_secs = 12
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Skip the network providers and use synthetic data.
    pub offline: bool,

    /// Sent as `User-Agent`; NOAA rejects anonymous clients.
    pub user_agent: String,

    /// Per-request timeout for provider calls.
    pub timeout_secs: u64,

    /// IANA zone used to display the reading's timestamp.
    pub timezone: String,

    pub noaa_base_url: String,
    pub open_meteo_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offline: false,
            user_agent: "FogFit/1.0 (+https://example.com; contact: you@yourdomain.com)".to_string(),
            timeout_secs: 12,
            timezone: "America/Los_Angeles".to_string(),
            noaa_base_url: "https://api.weather.gov".to_string(),
            open_meteo_base_url: "https://api.open-meteo.com/v1".to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "fogfit", "fogfit")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay `FOGFIT_OFFLINE` and `FOGFIT_UA` using `var` as the lookup.
    pub fn with_env_overrides<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(flag) = var(OFFLINE_ENV) {
            self.offline = flag.trim() == "1";
        }

        if let Some(ua) = var(USER_AGENT_ENV).filter(|ua| !ua.trim().is_empty()) {
            self.user_agent = ua;
        }

        self
    }

    /// `load()` followed by the overlay from the process environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::load()?.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("Invalid timezone '{}' in config: {e}", self.timezone))
    }
}
