//! Internationalization manager

use crate::bundle::BundleManager;
use crate::error::{I18nError, I18nResult};
use crate::resource::ResourceManager;
use ashbal_common::Language;
use fluent::FluentArgs;
use tracing::{debug, info, warn};

/// Loads every language's bundle and resolves messages with fallback
#[derive(Debug)]
pub struct I18nManager {
    /// Language to fall back to; also the reference key set
    default_language: Language,
    resource_manager: ResourceManager,
    bundle_manager: BundleManager,
}

impl I18nManager {
    /// Create a manager over `resources` and load every supported language
    pub fn new(resources: ResourceManager) -> I18nResult<Self> {
        let mut manager = Self {
            default_language: Language::En,
            resource_manager: resources,
            bundle_manager: BundleManager::new(),
        };

        for language in Language::ALL {
            manager.load_language(language)?;
        }
        info!(
            "I18nManager initialized with {} languages, default {}",
            manager.bundle_manager.available_languages().len(),
            manager.default_language
        );

        Ok(manager)
    }

    /// Create a manager over the embedded locale files
    pub fn embedded() -> I18nResult<Self> {
        Self::new(ResourceManager::embedded())
    }

    /// (Re)load a language's resources
    pub fn load_language(&mut self, language: Language) -> I18nResult<()> {
        debug!("Loading language: {}", language);
        let resource = self.resource_manager.load_resource(language)?;
        self.bundle_manager.add_resource(language, resource)
    }

    /// Get a message in `language` only
    pub fn get_exact(&self, key: &str, language: Language, args: Option<&FluentArgs>) -> I18nResult<String> {
        self.bundle_manager.format_message(language, key, args)
    }

    /// Get a message, falling back to the default language
    pub fn get_message(&self, key: &str, language: Language, args: Option<&FluentArgs>) -> I18nResult<String> {
        if self.bundle_manager.has_message(language, key) {
            return self.bundle_manager.format_message(language, key, args);
        }

        if language != self.default_language && self.bundle_manager.has_message(self.default_language, key) {
            warn!(
                "Message '{}' not found in {}, falling back to {}",
                key, language, self.default_language
            );
            return self.bundle_manager.format_message(self.default_language, key, args);
        }

        Err(I18nError::MessageNotFound { key: key.to_string() })
    }

    /// Whether `language` defines `key` itself
    pub fn has_message(&self, key: &str, language: Language) -> bool {
        self.bundle_manager.has_message(language, key)
    }

    /// Keys of the default language that `language` does not define
    pub fn missing_keys(&self, language: Language) -> Vec<String> {
        let Some(reference) = self.bundle_manager.message_ids(self.default_language) else {
            return Vec::new();
        };
        let own = self.bundle_manager.message_ids(language);
        reference
            .iter()
            .filter(|key| !own.is_some_and(|ids| ids.contains(*key)))
            .cloned()
            .collect()
    }

    /// The fallback language
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Languages with a loaded bundle
    pub fn loaded_languages(&self) -> Vec<Language> {
        self.bundle_manager.available_languages()
    }
}
