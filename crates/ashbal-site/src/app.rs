//! Site assembly
//!
//! [`Site`] wires the configuration, locale catalog, language provider,
//! selector and contact form together. The configuration sits in a
//! [`ConfigCache`] so it can be replaced while the site is running.

use crate::contact::{ContactForm, ContactTimings};
use crate::error::SiteResult;
use crate::page::{Page, PageOptions};
use crate::selector::LanguageSelector;
use ashbal_common::Language;
use ashbal_config::{Config, ConfigCache};
use ashbal_i18n::{Catalog, DocumentAttributes, LanguageProvider};
use std::sync::Arc;
use tracing::info;

/// A running instance of the site
#[derive(Debug)]
pub struct Site {
    config: ConfigCache,
    provider: Arc<LanguageProvider>,
    selector: LanguageSelector,
    contact: ContactForm,
}

impl Site {
    /// Build the site from `config`.
    ///
    /// The initial language is `language` when given, then the configured
    /// default, then whatever the environment prefers.
    ///
    /// # Errors
    ///
    /// Fails when the locale catalog cannot be loaded.
    pub fn new<D>(config: Config, language: Option<Language>, document: D) -> SiteResult<Self>
    where
        D: DocumentAttributes + 'static,
    {
        let catalog = Arc::new(Catalog::load(
            config.i18n.resource_manager(),
            config.i18n.missing_key_policy,
        )?);

        let provider = match language.or_else(|| config.site.default_language()) {
            Some(language) => LanguageProvider::new(catalog, language, document),
            None => LanguageProvider::from_environment(catalog, document),
        };
        let provider = Arc::new(provider);
        info!(language = %provider.language(), "Site initialized");

        Ok(Self {
            selector: LanguageSelector::new(Arc::clone(&provider)),
            contact: ContactForm::new(ContactTimings::from(&config.contact)),
            config: ConfigCache::new(config),
            provider,
        })
    }

    /// The active configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.get()
    }

    /// Replace the active configuration.
    ///
    /// The social link and contact timings are read from the new value by
    /// the next page build and the next submission. The locale catalog and
    /// current language are kept.
    pub fn update_config(&mut self, config: Config) {
        self.contact.set_timings(ContactTimings::from(&config.contact));
        let previous = self.config.update(config);
        info!(
            social_url = %self.config.get().site.social_url,
            previous_social_url = %previous.site.social_url,
            "Site configuration replaced"
        );
    }

    /// Shared language state behind the selector and page
    pub fn provider(&self) -> &Arc<LanguageProvider> {
        &self.provider
    }

    /// The language drop-down
    pub fn selector(&self) -> &LanguageSelector {
        &self.selector
    }

    /// The contact form
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// The contact form, for submitting or resetting
    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Page model for the current language
    pub fn page(&self) -> Page {
        let options = PageOptions::current(self.config.get().site.social_url.clone());
        Page::build(&self.provider.snapshot(), &options)
    }

    /// Page model for the current language with fixed options
    pub fn page_with(&self, options: &PageOptions) -> Page {
        Page::build(&self.provider.snapshot(), options)
    }
}
