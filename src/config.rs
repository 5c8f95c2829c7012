//! Configuration management for CaseCoach
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{CaseCoachError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for CaseCoach
///
/// This structure holds all configuration needed for the application,
/// currently the completion-service provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Completion service provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Completion service provider configuration
///
/// The model identifier and sampling temperature are policy values: the
/// orchestrator never varies them per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model to request completions from
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the completion API (useful for tests and local mocks)
    ///
    /// When set, this base is used to build the `/chat/completions`
    /// endpoint, which allows tests to point the provider at a mock server.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// API key for the completion service
    ///
    /// Never read from the config file in normal operation; supplied by the
    /// hosting environment via `OPENAI_API_KEY` or `CASECOACH_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Sampling temperature for completions
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key: None,
            temperature: default_temperature(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default_config()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn default_config() -> Self {
        Self {
            provider: ProviderConfig::default(),
        }
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CaseCoachError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| CaseCoachError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(model) = std::env::var("CASECOACH_MODEL") {
            self.provider.model = model;
        }

        if let Ok(api_base) = std::env::var("CASECOACH_API_BASE") {
            self.provider.api_base = api_base;
        }

        // The secret credential is supplied by the hosting environment only.
        // CASECOACH_API_KEY takes precedence over the conventional name.
        if let Ok(api_key) = std::env::var("CASECOACH_API_KEY") {
            self.provider.api_key = Some(api_key);
        } else if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            self.provider.api_key = Some(api_key);
        }

        if let Ok(temperature) = std::env::var("CASECOACH_TEMPERATURE") {
            if let Ok(value) = temperature.parse() {
                self.provider.temperature = value;
            } else {
                tracing::warn!("Invalid CASECOACH_TEMPERATURE: {}", temperature);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(model) = &cli.model {
            self.provider.model = model.clone();
        }
    }

    /// Validate the configuration
    ///
    /// Ensures all configuration values are within acceptable ranges
    /// and that required fields are properly set.
    ///
    /// # Returns
    ///
    /// Returns Ok if configuration is valid
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.provider.model.is_empty() {
            return Err(CaseCoachError::Config("provider.model cannot be empty".to_string()).into());
        }

        if self.provider.api_base.is_empty() {
            return Err(
                CaseCoachError::Config("provider.api_base cannot be empty".to_string()).into(),
            );
        }

        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(CaseCoachError::Config(
                "provider.temperature must be between 0.0 and 2.0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
