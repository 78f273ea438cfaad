//! Error types for internationalization operations

use ashbal_common::Language;
use thiserror::Error;

/// Errors that can occur while loading or reading locale bundles
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to load a resource file
    #[error("Failed to load resource file: {path}")]
    ResourceLoad { path: String },

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource for {language}: {errors:?}")]
    FluentParse {
        language: Language,
        errors: Vec<String>,
    },

    /// Message not found in any bundle
    #[error("Message not found: {key}")]
    MessageNotFound { key: String },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormat { key: String, errors: Vec<String> },

    /// Bundle creation failed
    #[error("Failed to create bundle for {language}: {errors:?}")]
    BundleCreation {
        language: Language,
        errors: Vec<String>,
    },

    /// A bundle lacks keys the site requires
    #[error("Locale bundle for {language} is missing {} key(s): {}", .keys.len(), .keys.join(", "))]
    MissingKeys {
        language: Language,
        keys: Vec<String>,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for ashbal_common::AshbalError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::FluentParse { language, .. }
            | I18nError::BundleCreation { language, .. }
            | I18nError::MissingKeys { language, .. } => Some(language.code().to_string()),
            _ => None,
        };
        match locale {
            Some(locale) => Self::localization_with_locale(err.to_string(), locale),
            None => Self::localization(err.to_string()),
        }
    }
}
