//! Error types shared by the Ashbal crates

use thiserror::Error;

/// Result type alias for Ashbal operations
pub type Result<T> = std::result::Result<T, AshbalError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors that cross crate boundaries.
///
/// Crate-specific failures live in their own enums (`I18nError`,
/// `ConfigError`, `SiteError`) and convert into this one where a caller
/// only needs a single type.
#[derive(Error, Debug)]
pub enum AshbalError {
    /// A language code outside en, fr and ar
    #[error("Unsupported language: {code}")]
    UnsupportedLanguage {
        /// The rejected code.
        code: String,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Locale bundles could not be loaded or read
    #[error("Localization error: {message}")]
    Localization {
        /// Description of the problem.
        message: String,
        /// Language code the problem occurred in.
        locale: Option<String>,
    },

    /// A value failed validation
    #[error("Invalid {}: {message}", field.as_deref().unwrap_or("value"))]
    Validation {
        /// Description of the problem.
        message: String,
        /// Offending field.
        field: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AshbalError {
    pub fn unsupported_language(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { code: code.into() }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Configuration error wrapping the error that caused it
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: None,
        }
    }

    /// Localization error tied to one language
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Validation error naming the offending field
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_messages() {
        assert_eq!(AshbalError::unsupported_language("de").to_string(), "Unsupported language: de");
        assert_eq!(AshbalError::config("missing section").to_string(), "Configuration error: missing section");
        assert_eq!(
            AshbalError::validation_field("unknown format 'xml'", "format").to_string(),
            "Invalid format: unknown format 'xml'"
        );
        assert_eq!(AshbalError::validation("empty").to_string(), "Invalid value: empty");
    }

    #[test]
    fn test_config_source_is_kept() {
        let wrapped = AshbalError::config_with_source(
            "Failed to read config.yaml",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(wrapped.source().is_some());
        assert!(AshbalError::config("plain").source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let error: AshbalError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(error, AshbalError::Io(_)));
        assert!(error.to_string().starts_with("I/O error"));
    }
}
