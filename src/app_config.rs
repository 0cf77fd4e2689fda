use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::backends::nllb;
use crate::language_catalog;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language display name
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language display name
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Backend config
    #[serde(default)]
    pub backend: BackendConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    /// Model identifier (configuration constant, not user text)
    #[serde(default = "default_model")]
    pub model: String,

    /// Inference server endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds; model inference is slow, be generous
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "English".to_string()
}

fn default_target_language() -> String {
    "Spanish".to_string()
}

fn default_model() -> String {
    nllb::DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    nllb::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// If the file does not exist, a default configuration is written to
    /// that path and returned.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            let config = Config::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        std::fs::write(path, content)
            .context(format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    ///
    /// Unlike the chat loop, validation is strict about language names:
    /// a typo in the config file is reported instead of silently becoming
    /// the default language.
    pub fn validate(&self) -> Result<()> {
        language_catalog::try_resolve(&self.source_language)
            .map_err(|e| anyhow!("Invalid source_language: {}", e))?;
        language_catalog::try_resolve(&self.target_language)
            .map_err(|e| anyhow!("Invalid target_language: {}", e))?;

        if self.backend.model.is_empty() {
            return Err(anyhow!("Backend model must not be empty"));
        }
        if self.backend.endpoint.is_empty() {
            return Err(anyhow!("Backend endpoint must not be empty"));
        }
        if self.backend.timeout_secs == 0 {
            return Err(anyhow!("Backend timeout must be at least 1 second"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            backend: BackendConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
