//! Locale identifiers and language detection

use crate::error::{I18nError, I18nResult};
use ashbal_common::Language;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Environment variables consulted for the preferred language, in order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Fluent-facing helpers on [`Language`]
pub trait LocaleExt {
    /// Regional identifier used for the Fluent bundle
    fn to_language_identifier(self) -> I18nResult<LanguageIdentifier>;

    /// Resource file path relative to the locales directory
    fn resource_file(self) -> String;
}

impl LocaleExt for Language {
    fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.region_tag()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.region_tag().to_string()))
    }

    fn resource_file(self) -> String {
        format!("{}/main.ftl", self.code())
    }
}

/// Turn a POSIX locale such as `fr_FR.UTF-8@euro` into a BCP-47 tag.
///
/// Returns `None` for empty values and for the `C`/`POSIX` locales.
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    match tag.as_str() {
        "" | "C" | "POSIX" => None,
        _ => Some(tag),
    }
}

/// Map a reported language preference to a supported [`Language`].
///
/// Only the primary subtag is consulted. Unsupported or unparsable tags
/// fall back to English.
#[must_use]
pub fn detect_language(tag: Option<&str>) -> Language {
    let Some(tag) = tag.and_then(normalize_tag) else {
        debug!("No language preference reported, using English");
        return Language::En;
    };

    let primary = match tag.parse::<LanguageIdentifier>() {
        Ok(id) => id.language.as_str().to_string(),
        Err(_) => {
            debug!(tag = %tag, "Unparsable language tag, using English");
            return Language::En;
        }
    };

    Language::from_code(&primary).unwrap_or_else(|| {
        debug!(tag = %tag, "Unsupported language, using English");
        Language::En
    })
}

/// First non-empty locale variable according to `lookup`.
pub fn preferred_tag_with<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

/// Detect the language from `LC_ALL`, `LC_MESSAGES` and `LANG`.
#[must_use]
pub fn detect_from_environment() -> Language {
    let tag = preferred_tag_with(|name| std::env::var(name).ok());
    detect_language(tag.as_deref())
}
