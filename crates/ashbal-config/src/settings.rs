//! Application configuration structures

use ashbal_common::{Language, LogFormat};
use ashbal_i18n::{MissingKeyPolicy, ResourceManager};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// The club's public social profile
pub const DEFAULT_SOCIAL_URL: &str = "https://web.facebook.com/profile.php?id=100081279337283&sk=about";

/// Delay before a simulated contact submission succeeds
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// How long the success message stays visible
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 3000;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings
    #[validate]
    pub site: SiteConfig,

    /// Locale loading settings
    #[validate]
    pub i18n: I18nConfig,

    /// Contact form timings
    #[validate]
    pub contact: ContactConfig,

    /// Logging configuration
    #[validate]
    pub logging: LoggingConfig,
}

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SiteConfig {
    /// Language to start in; detected from the environment when unset
    #[validate(custom(
        function = "crate::validation::validate_language_code",
        message = "Default language must be one of: en, fr, ar"
    ))]
    pub default_language: Option<String>,

    /// Link shown in the contact section
    #[validate(regex(path = "crate::validation::HTTP_URL_REGEX", message = "Social URL must be an http(s) URL"))]
    pub social_url: String,
}

/// Locale loading settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct I18nConfig {
    /// Behavior when a language lacks a required key
    pub missing_key_policy: MissingKeyPolicy,

    /// Directory of `<code>/main.ftl` files; the embedded ones are used when unset
    #[validate(custom(function = "crate::validation::validate_file_path", message = "Invalid locales directory"))]
    pub locales_dir: Option<String>,
}

/// Contact form timings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactConfig {
    /// Milliseconds between submit and the success state
    #[validate(range(min = 1, max = 60000, message = "Submit delay must be between 1 and 60000 ms"))]
    pub submit_delay_ms: u64,

    /// Milliseconds the success state lasts before returning to idle
    #[validate(range(min = 1, max = 60000, message = "Success display must be between 1 and 60000 ms"))]
    pub success_display_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Output format
    pub format: LogFormat,

    /// Optional log file path
    #[validate(custom(function = "crate::validation::validate_file_path", message = "Invalid log file path"))]
    pub file: Option<String>,

    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: None,
            social_url: DEFAULT_SOCIAL_URL.to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
            include_targets: true,
        }
    }
}

impl SiteConfig {
    /// The configured start language, if any
    pub fn default_language(&self) -> Option<Language> {
        self.default_language.as_deref().and_then(Language::from_code)
    }
}

impl I18nConfig {
    /// Resource source for the locale catalog
    pub fn resource_manager(&self) -> ResourceManager {
        match &self.locales_dir {
            Some(dir) => ResourceManager::from_dir(dir),
            None => ResourceManager::embedded(),
        }
    }
}

impl ContactConfig {
    /// Delay before a submission succeeds
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Time the success state is shown
    pub const fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

impl From<&LoggingConfig> for ashbal_common::LoggingConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            level: config.level.clone(),
            format: config.format,
            file_path: config.file.clone(),
            include_spans: false,
            include_targets: config.include_targets,
        }
    }
}
