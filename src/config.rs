use std::{path::Path, time::Duration};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::vendor::aws::{imds::EC2_METADATA_BASE_URL_DEFAULT, uuid::UUID_FILES};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where to look for the hypervisor / DMI product UUID.
    #[serde(default)]
    pub uuid: UuidConfig,

    /// How to reach the instance metadata service.
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Retry policy of the instance metadata query.
    #[serde(default)]
    pub retry: RetryConfig,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct UuidConfig {
    /// Candidate files, in the order they are probed. The first readable one wins.
    #[serde(default = "default_uuid_files")]
    pub files: Vec<String>,
}

impl Default for UuidConfig {
    fn default() -> Self {
        Self {
            files: default_uuid_files(),
        }
    }
}

fn default_uuid_files() -> Vec<String> {
    UUID_FILES.iter().map(|file| file.to_string()).collect()
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct MetadataConfig {
    /// Base URL of the instance metadata service. `/ami-id` is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout of a single request, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl MetadataConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    EC2_METADATA_BASE_URL_DEFAULT.to_owned()
}

fn default_timeout_ms() -> u64 {
    3000
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Total number of attempts, the first one included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Fixed delay between two attempts, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl RetryConfig {
    /// Number of attempts actually made. At least one request is always sent.
    pub fn attempts(&self) -> usize {
        self.max_attempts.max(1)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_max_attempts() -> usize {
    3
}

fn default_delay_ms() -> u64 {
    2000
}

impl Config {
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config as TOML")
    }
}

/// Load the config from `config_path`, or use the default one if no path is given.
pub async fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let Some(config_path) = config_path else {
        tracing::debug!("No config file specified, use default config");
        return Ok(Config::default());
    };

    tracing::debug!("Loading config from: {config_path:?}");
    let config = tokio::fs::read_to_string(config_path)
        .await
        .map_err(anyhow::Error::from)
        .and_then(|content| {
            toml::from_str::<Config>(&content).context("Failed to parse content as TOML")
        })
        .with_context(|| format!("Failed to load config from: {config_path:?}"))?;

    Ok(config)
}
