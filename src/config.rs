use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::memory::ShortTermMemory;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pipeline: PipelineRuntimeConfig,
    #[serde(default)]
    pub witness: WitnessConfig,
}

impl Config {
    /// Loads a json5 config file. A missing file yields the full default
    /// configuration; a malformed file is an error.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", config_path.display()));
            }
        };

        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        serde_json::from_value(config_value).context("failed to deserialize limbic config")
    }
}

fn default_logging_dir() -> String {
    "./logs/limbic".to_string()
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: String,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

fn default_short_term_capacity() -> usize {
    ShortTermMemory::DEFAULT_CAPACITY
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRuntimeConfig {
    #[serde(default = "default_short_term_capacity")]
    pub short_term_capacity: usize,
}

impl Default for PipelineRuntimeConfig {
    fn default() -> Self {
        Self {
            short_term_capacity: default_short_term_capacity(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpWitnessConfig {
    pub base_url: String,
    pub model: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WitnessConfig {
    #[default]
    Noop,
    Http {
        config: HttpWitnessConfig,
    },
}
