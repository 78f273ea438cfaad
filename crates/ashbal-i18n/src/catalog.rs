//! Validated bundles for every supported language

use crate::error::I18nResult;
use crate::manager::I18nManager;
use crate::resource::ResourceManager;
use crate::schema::{LocaleBundle, MissingKeyPolicy};
use ashbal_common::Language;
use std::sync::Arc;
use tracing::info;

/// One [`LocaleBundle`] per language, checked against the schema at load
#[derive(Debug, Clone)]
pub struct Catalog {
    bundles: [Arc<LocaleBundle>; 3],
    policy: MissingKeyPolicy,
}

const fn slot(language: Language) -> usize {
    match language {
        Language::En => 0,
        Language::Fr => 1,
        Language::Ar => 2,
    }
}

impl Catalog {
    /// Load and validate every language from `resources`
    pub fn load(resources: ResourceManager, policy: MissingKeyPolicy) -> I18nResult<Self> {
        let manager = I18nManager::new(resources)?;
        let load = |language| LocaleBundle::load(&manager, language, policy).map(Arc::new);

        let bundles = [load(Language::En)?, load(Language::Fr)?, load(Language::Ar)?];
        info!(policy = %policy, "Locale catalog loaded for {} languages", bundles.len());
        Ok(Self { bundles, policy })
    }

    /// Load the locale files compiled into the binary
    pub fn embedded(policy: MissingKeyPolicy) -> I18nResult<Self> {
        Self::load(ResourceManager::embedded(), policy)
    }

    /// The bundle for `language`
    pub fn bundle(&self, language: Language) -> Arc<LocaleBundle> {
        Arc::clone(&self.bundles[slot(language)])
    }

    /// Policy the catalog was validated with
    pub fn policy(&self) -> MissingKeyPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog() {
        let catalog = Catalog::embedded(MissingKeyPolicy::Fail).unwrap();
        assert_eq!(catalog.bundle(Language::En).language, "Language");
        assert_eq!(catalog.bundle(Language::Fr).language, "Langue");
        assert_eq!(catalog.bundle(Language::Ar).language, "اللغة");
        assert_eq!(catalog.policy(), MissingKeyPolicy::Fail);
    }

    #[test]
    fn test_bundles_are_shared() {
        let catalog = Catalog::embedded(MissingKeyPolicy::Fallback).unwrap();
        assert!(Arc::ptr_eq(&catalog.bundle(Language::Ar), &catalog.bundle(Language::Ar)));
    }
}
