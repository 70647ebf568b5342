//! Settings loader
//!
//! Handles loading settings from default values, an optional TOML file and
//! prefixed environment variables, merged through Figment.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tms_domain::error::{Error, Result};

use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME, ENV_NESTED_SEPARATOR};
use crate::schema;
use crate::settings::{AppSettings, SdkSettings};

/// Settings loader service
#[derive(Clone)]
pub struct SettingsLoader {
    /// Settings file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl SettingsLoader {
    /// Create a new settings loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the settings file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load the SDK settings tree from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `SdkSettings::default()`
    /// 2. TOML settings file (if it exists)
    /// 3. Environment variables with prefix and nested separator
    ///    (e.g., `TMS__AI__OPENAI__API_KEY` → `ai.openai.api_key`)
    pub fn load(&self) -> Result<SdkSettings> {
        let figment = self
            .base_figment(Figment::new().merge(Serialized::defaults(SdkSettings::default())));

        figment
            .extract()
            .map_err(|e| Error::configuration_with_source("Failed to extract SDK settings", e))
    }

    /// Load and validate the application settings
    ///
    /// The raw tree (TOML file plus environment overrides, no defaults) is
    /// handed to the schema validator, which applies defaults, coercions and
    /// the aggregate-all-errors policy.
    pub fn load_app(&self) -> Result<AppSettings> {
        let raw: serde_json::Value = self
            .base_figment(Figment::new())
            .extract()
            .map_err(|e| Error::configuration_with_source("Failed to read settings sources", e))?;

        schema::validate(&raw)
    }

    /// Reload settings (re-reads every source)
    pub fn reload(&self) -> Result<SdkSettings> {
        self.load()
    }

    /// Get the current settings file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn base_figment(&self, mut figment: Figment) -> Figment {
        match &self.config_path {
            Some(config_path) => {
                if config_path.exists() {
                    figment = figment.merge(Toml::file(config_path));
                    tracing::debug!(path = %config_path.display(), "settings file loaded");
                } else {
                    tracing::warn!(path = %config_path.display(), "settings file not found");
                }
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    figment = figment.merge(Toml::file(&default_path));
                    tracing::debug!(path = %default_path.display(), "settings file loaded");
                }
            }
        }

        let prefix = format!("{}{}", self.env_prefix, ENV_NESTED_SEPARATOR);
        figment.merge(Env::prefixed(&prefix).split(ENV_NESTED_SEPARATOR))
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
