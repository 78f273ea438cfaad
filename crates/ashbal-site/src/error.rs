//! Site-level error types using thiserror.

use ashbal_common::AshbalError;
use ashbal_config::ConfigError;
use ashbal_i18n::I18nError;

/// Main site error type.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// A language code outside en, fr and ar.
    #[error("Unknown language code '{code}'")]
    UnknownLanguage {
        /// The rejected code.
        code: String,
    },

    /// Contact form input rejected before submission.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Offending form field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// Locale loading error.
    #[error("Localization error: {0}")]
    I18n(#[from] I18nError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Shared error from a lower layer.
    #[error(transparent)]
    Common(#[from] AshbalError),
}

impl SiteError {
    /// Create a contact form validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;
