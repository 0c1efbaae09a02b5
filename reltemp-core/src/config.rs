use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    model::Location,
    provider::{ProviderId, open_meteo::DEFAULT_TIMEZONE},
};

/// Seconds to wait for a location before falling back to the default.
pub const DEFAULT_LOCATION_TIMEOUT_SECS: u64 = 10;

/// A saved home location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

impl From<&LocationConfig> for Location {
    fn from(cfg: &LocationConfig) -> Self {
        Location {
            latitude: cfg.latitude,
            longitude: cfg.longitude,
            name: cfg.name.clone(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// timezone = "Europe/Amsterdam"
///
/// [home]
/// latitude = 52.37
/// longitude = 4.89
/// name = "Amsterdam"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Weather provider id; only "open-meteo" exists today.
    pub provider: Option<String>,

    /// IANA timezone used to bucket daily highs/lows.
    pub timezone: Option<String>,

    pub location_timeout_secs: Option<u64>,

    /// Location used when none is given and detection fails.
    pub home: Option<LocationConfig>,
}

impl Config {
    /// Configured provider, defaulting to Open-Meteo.
    pub fn provider_id(&self) -> Result<ProviderId> {
        match &self.provider {
            Some(s) => ProviderId::try_from(s.as_str()),
            None => Ok(ProviderId::OpenMeteo),
        }
    }

    pub fn timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    /// Home location if configured, otherwise Tokyo.
    pub fn default_location(&self) -> Location {
        self.home.as_ref().map(Location::from).unwrap_or_else(Location::tokyo)
    }

    pub fn location_timeout(&self) -> Duration {
        Duration::from_secs(self.location_timeout_secs.unwrap_or(DEFAULT_LOCATION_TIMEOUT_SECS))
    }

    pub fn set_home(&mut self, latitude: f64, longitude: f64, name: Option<String>) {
        self.home = Some(LocationConfig {
            latitude,
            longitude,
            name,
        });
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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

        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "reltemp", "reltemp")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
