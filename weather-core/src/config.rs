use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::provider::EndpointId;

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "WEATHERWISE_BASE_URL";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// endpoint = "production"
/// breakpoint = 100
/// timeout_secs = 15
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Optional endpoint id, e.g. "production" or "development".
    pub endpoint: Option<String>,

    /// Full base URL; wins over `endpoint` when set.
    pub base_url: Option<String>,

    /// Width at or below which the compact layout is used.
    pub breakpoint: Option<u32>,

    /// Request timeout. Absent means requests never time out.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Return the selected endpoint, falling back to production.
    pub fn endpoint_id(&self) -> Result<EndpointId> {
        match self.endpoint.as_deref() {
            Some(s) => EndpointId::try_from(s),
            None => Ok(EndpointId::default()),
        }
    }

    pub fn set_endpoint(&mut self, id: EndpointId) {
        self.endpoint = Some(id.as_str().to_string());
    }

    /// Base URL for lookups: explicit override, then endpoint, then production.
    pub fn resolved_base_url(&self) -> Result<Url> {
        let raw = match self.base_url.as_deref() {
            Some(url) => url,
            None => self.endpoint_id()?.base_url(),
        };

        let url = Url::parse(raw).with_context(|| format!("Invalid base URL '{raw}'"))?;
        if url.cannot_be_a_base() {
            return Err(anyhow!("Invalid base URL '{raw}': expected an http(s) URL"));
        }

        Ok(url)
    }

    pub fn breakpoint_or(&self, default: u32) -> u32 {
        self.breakpoint.unwrap_or(default)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Apply `WEATHERWISE_BASE_URL` if it is set and non-empty.
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!(%url, "base URL overridden from environment");
            self.base_url = Some(url.trim().to_string());
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
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
        let dirs = ProjectDirs::from("dev", "weatherwise", "weatherwise")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
