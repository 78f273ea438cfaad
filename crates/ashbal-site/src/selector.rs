//! Language selector

use crate::error::{SiteError, SiteResult};
use ashbal_common::Language;
use ashbal_i18n::{LanguageProvider, LanguageSnapshot};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Element id the selector's label points at
pub const SELECTOR_ID: &str = "language-select";

/// One `<option>` of the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// `value` of the option
    pub code: &'static str,
    /// Language name in its own script
    pub name: &'static str,
}

/// Options in display order: English, French, Arabic
pub fn language_options() -> Vec<LanguageOption> {
    Language::ALL
        .into_iter()
        .map(|language| LanguageOption {
            code: language.code(),
            name: language.native_name(),
        })
        .collect()
}

/// Render model of the selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorView {
    /// Element id
    pub id: &'static str,
    /// Screen-reader label
    pub label: String,
    /// Code of the current language
    pub selected: &'static str,
    /// Every supported language
    pub options: Vec<LanguageOption>,
}

impl SelectorView {
    /// Selector state for `snapshot`
    pub fn build(snapshot: &LanguageSnapshot) -> Self {
        Self {
            id: SELECTOR_ID,
            label: snapshot.bundle.language.clone(),
            selected: snapshot.language.code(),
            options: language_options(),
        }
    }
}

/// Drop-down that switches the provider's language
#[derive(Debug, Clone)]
pub struct LanguageSelector {
    provider: Arc<LanguageProvider>,
}

impl LanguageSelector {
    /// Selector driving `provider`
    pub fn new(provider: Arc<LanguageProvider>) -> Self {
        Self { provider }
    }

    /// Currently selected language
    pub fn selected(&self) -> Language {
        self.provider.language()
    }

    /// Current render model
    pub fn view(&self) -> SelectorView {
        SelectorView::build(&self.provider.snapshot())
    }

    /// Handle a change event carrying an option value.
    ///
    /// Codes other than `en`, `fr` and `ar` are rejected and leave the
    /// current language in place.
    pub fn select(&self, code: &str) -> SiteResult<Language> {
        let Some(language) = Language::from_code(code) else {
            warn!(code, "Rejected unknown language selection");
            return Err(SiteError::UnknownLanguage { code: code.to_string() });
        };
        self.provider.set_language(language);
        Ok(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashbal_common::Direction;
    use ashbal_i18n::{Catalog, DocumentRoot, MissingKeyPolicy};

    fn selector(root: &DocumentRoot) -> LanguageSelector {
        let catalog = Arc::new(Catalog::embedded(MissingKeyPolicy::Fail).unwrap());
        LanguageSelector::new(Arc::new(LanguageProvider::new(catalog, Language::En, root.clone())))
    }

    #[test]
    fn test_options_order() {
        let options = language_options();
        let codes: Vec<_> = options.iter().map(|o| o.code).collect();
        assert_eq!(codes, ["en", "fr", "ar"]);
        assert_eq!(options[1].name, "Français");
        assert_eq!(options[2].name, "العربية");
    }

    #[test]
    fn test_select_switches_language() {
        let root = DocumentRoot::new();
        let selector = selector(&root);

        assert_eq!(selector.select("ar").unwrap(), Language::Ar);
        assert_eq!(selector.selected(), Language::Ar);
        assert_eq!(root.dir(), Direction::Rtl);

        let view = selector.view();
        assert_eq!(view.selected, "ar");
        assert_eq!(view.label, "اللغة");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let root = DocumentRoot::new();
        let selector = selector(&root);
        selector.select("fr").unwrap();

        let err = selector.select("de").unwrap_err();
        assert!(matches!(err, SiteError::UnknownLanguage { ref code } if code == "de"));
        assert_eq!(selector.selected(), Language::Fr);
        assert_eq!(root.lang(), Language::Fr);
    }
}
