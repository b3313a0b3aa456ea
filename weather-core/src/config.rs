use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::model::{DummyRecord, TemperatureUnit};

pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Upstream provider endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

fn default_base_url() -> String {
    DEFAULT_PROVIDER_BASE_URL.to_string()
}

/// Where the relay listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5001
}

/// Process-wide relay settings, loaded once at startup and read-only after.
///
/// Example TOML:
/// apiKey = "..."
/// fahrenheit = false
/// showHumidity = true
/// defaultLocation = "London"
///
/// [[dummyData]]
/// city = "London"
/// ...
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub api_key: String,

    #[serde(default)]
    pub fahrenheit: bool,

    #[serde(default)]
    pub show_humidity: bool,

    pub default_location: String,

    #[serde(default)]
    pub dummy_data: Vec<DummyRecord>,

    #[serde(default)]
    pub provider: ProviderSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

impl RuntimeConfig {
    pub fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::from_fahrenheit_flag(self.fahrenheit)
    }

    /// The fallback record for `default_location`, matched on exact city name.
    pub fn default_dummy_record(&self) -> Option<&DummyRecord> {
        self.dummy_data.iter().find(|d| d.city == self.default_location)
    }

    /// Load config from `path`, or from the platform config file when `None`.
    ///
    /// Unlike the CLI config, a missing file is an error: the relay cannot
    /// serve anything without a credential and fallback data.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file_path()?,
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid relay configuration")
    }

    /// Path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-relay")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("relay.toml"))
    }

    /// Non-fatal problems worth reporting at startup.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.api_key.trim().is_empty() {
            warnings.push("apiKey is empty; every provider call will be rejected".to_string());
        }

        if self.default_dummy_record().is_none() {
            warnings.push(format!(
                "No dummyData entry for defaultLocation '{}'; provider failures will return 500",
                self.default_location
            ));
        }

        warnings
    }
}
