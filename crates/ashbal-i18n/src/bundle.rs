//! FluentBundle management and message formatting

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleExt;
use ashbal_common::Language;
use fluent::{FluentArgs, FluentResource};
use fluent_bundle::concurrent::FluentBundle;
use fluent_syntax::ast::Entry;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

type Bundle = FluentBundle<FluentResource>;

/// Manages one FluentBundle per language
#[derive(Default)]
pub struct BundleManager {
    bundles: HashMap<Language, Arc<Bundle>>,
    message_ids: HashMap<Language, BTreeSet<String>>,
}

impl fmt::Debug for BundleManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BundleManager")
            .field("languages", &self.available_languages())
            .finish_non_exhaustive()
    }
}

impl BundleManager {
    /// Create an empty BundleManager
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the bundle for `language` from a parsed resource.
    ///
    /// Replaces any bundle previously built for that language.
    pub fn add_resource(&mut self, language: Language, resource: FluentResource) -> I18nResult<()> {
        let lang_id = language.to_language_identifier()?;

        let ids: BTreeSet<String> = resource
            .entries()
            .filter_map(|entry| match entry {
                Entry::Message(message) => Some(message.id.name.to_string()),
                _ => None,
            })
            .collect();

        let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
        // Isolation marks would leak into class names and attributes
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            let errors: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();
            error!("Failed to add resource to bundle for {}: {:?}", language, errors);
            I18nError::BundleCreation { language, errors }
        })?;

        debug!(language = %language, messages = ids.len(), "Built Fluent bundle");
        self.bundles.insert(language, Arc::new(bundle));
        self.message_ids.insert(language, ids);
        Ok(())
    }

    /// Format a message with the given arguments
    pub fn format_message(
        &self,
        language: Language,
        message_id: &str,
        args: Option<&FluentArgs>,
    ) -> I18nResult<String> {
        let not_found = || I18nError::MessageNotFound {
            key: message_id.to_string(),
        };

        let bundle = self.bundles.get(&language).ok_or_else(not_found)?;
        let pattern = bundle
            .get_message(message_id)
            .and_then(|message| message.value())
            .ok_or_else(not_found)?;

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            let errors: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();
            warn!("Formatting errors for message '{}': {:?}", message_id, errors);
            return Err(I18nError::MessageFormat {
                key: message_id.to_string(),
                errors,
            });
        }

        Ok(formatted.into_owned())
    }

    /// Check if a message exists in the bundle
    pub fn has_message(&self, language: Language, message_id: &str) -> bool {
        self.bundles
            .get(&language)
            .is_some_and(|bundle| bundle.has_message(message_id))
    }

    /// Message ids defined for a language, sorted
    pub fn message_ids(&self, language: Language) -> Option<&BTreeSet<String>> {
        self.message_ids.get(&language)
    }

    /// Languages with a bundle, in selector order
    pub fn available_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.bundles.contains_key(language))
            .collect()
    }
}
