//! Configuration loading utilities

use crate::Config;
use ashbal_common::{AshbalError, Result as AshbalResult};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "ASHBAL_CONFIG_PATH";

/// Files looked for in the working directory, in order
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["config.yaml", "config.yml", "config.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// File extension other than yaml, yml or toml
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

impl From<ConfigError> for AshbalError {
    fn from(err: ConfigError) -> Self {
        AshbalError::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |name| env::var(name).ok())
    }

    /// Like [`ConfigLoader::load_config`], reading overrides through `lookup`
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut config = Self::parse_file(path)?;
        Self::apply_env_overrides(&mut config, lookup)?;
        config.validate()?;

        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from environment variables and files
    pub fn load() -> AshbalResult<Config> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::load_config(&config_path)?
        } else if let Some(path) = DEFAULT_CONFIG_FILES.iter().find(|name| Path::new(name).exists()) {
            Self::load_config(path)?
        } else {
            debug!("No configuration file found, using defaults");
            Self::load_defaults_with(|name| env::var(name).ok())?
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AshbalResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Defaults with overrides read through `lookup`
    pub fn load_defaults_with<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config, lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") | None => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
        F: Fn(&str) -> Option<String>,
    {
        lookup(var)
            .map(|value| {
                value.trim().parse().map_err(|e| ConfigError::EnvParseError {
                    var: var.to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Site configuration overrides
        if let Some(language) = lookup("ASHBAL_DEFAULT_LANGUAGE") {
            config.site.default_language = Some(language.trim().to_ascii_lowercase());
        }

        // Locale configuration overrides
        if let Some(policy) = Self::parse_var(&lookup, "ASHBAL_MISSING_KEY_POLICY")? {
            config.i18n.missing_key_policy = policy;
        }

        // Contact form overrides
        if let Some(delay) = Self::parse_var(&lookup, "ASHBAL_SUBMIT_DELAY_MS")? {
            config.contact.submit_delay_ms = delay;
        }

        if let Some(display) = Self::parse_var(&lookup, "ASHBAL_SUCCESS_DISPLAY_MS")? {
            config.contact.success_display_ms = display;
        }

        // Logging configuration overrides
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level.trim().to_ascii_lowercase();
        }

        if let Some(format) = Self::parse_var(&lookup, "LOG_FORMAT")? {
            config.logging.format = format;
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}
