/*
[INPUT]:  YAML configuration file and BFX_* environment variables
[OUTPUT]: Parsed CLI configuration (client settings + optional credentials)
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;

use anyhow::Context;
use bitfinex_adapter::{ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "BFX_API_KEY";
pub const API_SECRET_ENV: &str = "BFX_API_SECRET";

/// Top-level configuration for the command line client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// HTTP client settings
    #[serde(default)]
    pub client: ClientConfig,
    /// API key, overridden by BFX_API_KEY
    #[serde(default)]
    pub api_key: Option<String>,
    /// API secret, overridden by BFX_API_SECRET
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        // an empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).context("parse yaml config")?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(secret) = lookup(API_SECRET_ENV) {
            self.api_secret = Some(secret);
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_env_with(|name| std::env::var(name).ok());
    }

    /// Credentials when both key and secret are present; blank values count as absent
    pub fn credentials(&self) -> anyhow::Result<Option<Credentials>> {
        let key = self.api_key.as_deref().filter(|v| !v.trim().is_empty());
        let secret = self.api_secret.as_deref().filter(|v| !v.trim().is_empty());
        match (key, secret) {
            (Some(key), Some(secret)) => Ok(Some(
                Credentials::try_new(key, secret).context("invalid credentials")?,
            )),
            (None, None) => Ok(None),
            _ => anyhow::bail!("both {API_KEY_ENV} and {API_SECRET_ENV} must be set"),
        }
    }
}
