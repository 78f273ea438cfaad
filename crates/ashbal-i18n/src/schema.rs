//! Typed locale bundle schema
//!
//! [`LocaleBundle`] is the complete set of strings the site renders for one
//! language. Every field maps to one Fluent message id; a bundle is only
//! built when every id resolves under the active [`MissingKeyPolicy`].

use crate::error::{I18nError, I18nResult};
use crate::manager::I18nManager;
use ashbal_common::{AshbalError, Language};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Number of cards in the activities, vision and events sections.
pub const ITEM_COUNT: usize = 4;

/// What to do when a language lacks a message the schema requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyPolicy {
    /// Refuse to build the bundle
    #[default]
    Fail,
    /// Use the English string and log a warning
    Fallback,
}

impl MissingKeyPolicy {
    /// Lowercase name used in configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for MissingKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingKeyPolicy {
    type Err = AshbalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "fallback" => Ok(Self::Fallback),
            other => Err(AshbalError::validation_field(
                format!("Unknown missing key policy '{other}', expected fail or fallback"),
                "missing_key_policy",
            )),
        }
    }
}

/// Header navigation labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLabels {
    pub activities: String,
    pub vision: String,
    pub president: String,
    pub contact: String,
}

/// Site header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderText {
    pub title: String,
    pub subtitle: String,
    pub nav: NavLabels,
}

/// President biography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresidentText {
    pub title: String,
    pub bio: String,
}

/// One titled card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemText {
    pub title: String,
    pub description: String,
}

/// A section made of a heading and four cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSectionText {
    pub title: String,
    pub description: String,
    pub items: [ItemText; ITEM_COUNT],
}

/// Caption of one event media item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventText {
    pub caption: String,
}

/// Events gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsText {
    pub title: String,
    pub description: String,
    pub items: [EventText; ITEM_COUNT],
}

/// Contact form placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderText {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact form labels and status messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactText {
    pub title: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submit: String,
    pub follow_us: String,
    pub success: String,
    pub error: String,
    pub placeholders: PlaceholderText,
}

/// Every string the site renders for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleBundle {
    pub header: HeaderText,
    pub president: PresidentText,
    pub activities: CardSectionText,
    pub vision: CardSectionText,
    pub events: EventsText,
    pub contact: ContactText,
    /// Label of the language selector
    pub language: String,
}

/// Reads schema keys and remembers the ones that could not be resolved
struct KeyReader<'a> {
    manager: &'a I18nManager,
    language: Language,
    policy: MissingKeyPolicy,
    missing: Vec<String>,
}

impl KeyReader<'_> {
    fn text(&mut self, key: &str) -> String {
        if let Ok(text) = self.manager.get_exact(key, self.language, None) {
            return text;
        }

        if self.policy == MissingKeyPolicy::Fallback {
            let fallback = self.manager.default_language();
            if let Ok(text) = self.manager.get_exact(key, fallback, None) {
                warn!(key, language = %self.language, "Missing locale key, using {} text", fallback);
                return text;
            }
        }

        self.missing.push(key.to_string());
        String::new()
    }

    fn items(&mut self, section: &str) -> [ItemText; ITEM_COUNT] {
        std::array::from_fn(|i| ItemText {
            title: self.text(&format!("{section}-item-{}-title", i + 1)),
            description: self.text(&format!("{section}-item-{}-description", i + 1)),
        })
    }

    fn card_section(&mut self, section: &str) -> CardSectionText {
        CardSectionText {
            title: self.text(&format!("{section}-title")),
            description: self.text(&format!("{section}-description")),
            items: self.items(section),
        }
    }
}

impl LocaleBundle {
    /// Build the bundle for `language` from a loaded manager.
    ///
    /// With [`MissingKeyPolicy::Fail`] any unresolved key yields
    /// [`I18nError::MissingKeys`] listing all of them. With
    /// [`MissingKeyPolicy::Fallback`] keys absent in `language` are read from
    /// the default language; only keys absent there too are reported.
    pub fn load(manager: &I18nManager, language: Language, policy: MissingKeyPolicy) -> I18nResult<Self> {
        let mut reader = KeyReader {
            manager,
            language,
            policy,
            missing: Vec::new(),
        };

        let bundle = Self {
            header: HeaderText {
                title: reader.text("header-title"),
                subtitle: reader.text("header-subtitle"),
                nav: NavLabels {
                    activities: reader.text("nav-activities"),
                    vision: reader.text("nav-vision"),
                    president: reader.text("nav-president"),
                    contact: reader.text("nav-contact"),
                },
            },
            president: PresidentText {
                title: reader.text("president-title"),
                bio: reader.text("president-bio"),
            },
            activities: reader.card_section("activities"),
            vision: reader.card_section("vision"),
            events: EventsText {
                title: reader.text("events-title"),
                description: reader.text("events-description"),
                items: std::array::from_fn(|i| EventText {
                    caption: reader.text(&format!("events-item-{}-caption", i + 1)),
                }),
            },
            contact: ContactText {
                title: reader.text("contact-title"),
                name: reader.text("contact-name"),
                email: reader.text("contact-email"),
                message: reader.text("contact-message"),
                submit: reader.text("contact-submit"),
                follow_us: reader.text("contact-follow-us"),
                success: reader.text("contact-success"),
                error: reader.text("contact-error"),
                placeholders: PlaceholderText {
                    name: reader.text("contact-placeholder-name"),
                    email: reader.text("contact-placeholder-email"),
                    message: reader.text("contact-placeholder-message"),
                },
            },
            language: reader.text("language"),
        };

        if reader.missing.is_empty() {
            Ok(bundle)
        } else {
            Err(I18nError::MissingKeys {
                language,
                keys: reader.missing,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceManager;
    use std::fs;
    use tempfile::TempDir;

    fn manager_without(language: &str, dropped: &[&str]) -> (TempDir, I18nManager) {
        let dir = TempDir::new().unwrap();
        let embedded = ResourceManager::embedded();
        for lang in Language::ALL {
            let mut text = embedded.source_text(lang).unwrap();
            if lang.code() == language {
                text = text
                    .lines()
                    .filter(|line| !dropped.iter().any(|key| line.starts_with(&format!("{key} ="))))
                    .collect::<Vec<_>>()
                    .join("\n");
            }
            fs::create_dir_all(dir.path().join(lang.code())).unwrap();
            fs::write(dir.path().join(lang.code()).join("main.ftl"), text).unwrap();
        }
        let manager = I18nManager::new(ResourceManager::from_dir(dir.path())).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_embedded_bundles_are_complete() {
        let manager = I18nManager::embedded().unwrap();
        let en = LocaleBundle::load(&manager, Language::En, MissingKeyPolicy::Fail).unwrap();
        assert_eq!(en.header.title, "Ashbal Karate");
        assert_eq!(en.activities.items[0].title, "Weekly Training");
        assert_eq!(en.events.items[3].caption, "Community Event");
        assert_eq!(en.contact.placeholders.email, "Enter your email");

        let fr = LocaleBundle::load(&manager, Language::Fr, MissingKeyPolicy::Fail).unwrap();
        assert_eq!(fr.language, "Langue");
        assert_eq!(fr.contact.submit, "Envoyer");

        let ar = LocaleBundle::load(&manager, Language::Ar, MissingKeyPolicy::Fail).unwrap();
        assert_eq!(ar.contact.submit, "إرسال");
        assert!(ar.vision.items.iter().all(|item| !item.description.is_empty()));
    }

    #[test]
    fn test_fail_policy_lists_every_missing_key() {
        let (_dir, manager) = manager_without("ar", &["events-title", "contact-error"]);
        let err = LocaleBundle::load(&manager, Language::Ar, MissingKeyPolicy::Fail).unwrap_err();
        match err {
            I18nError::MissingKeys { language, keys } => {
                assert_eq!(language, Language::Ar);
                assert_eq!(keys, vec!["events-title".to_string(), "contact-error".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fallback_policy_uses_english() {
        let (_dir, manager) = manager_without("fr", &["events-title"]);
        let fr = LocaleBundle::load(&manager, Language::Fr, MissingKeyPolicy::Fallback).unwrap();
        assert_eq!(fr.events.title, "Our Latest Events");
        assert_eq!(fr.contact.submit, "Envoyer");
    }

    #[test]
    fn test_fallback_policy_still_fails_without_english() {
        let (_dir, manager) = manager_without("en", &["language"]);
        let err = LocaleBundle::load(&manager, Language::En, MissingKeyPolicy::Fallback).unwrap_err();
        assert!(matches!(err, I18nError::MissingKeys { .. }));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("FAIL".parse::<MissingKeyPolicy>().unwrap(), MissingKeyPolicy::Fail);
        assert_eq!(" fallback ".parse::<MissingKeyPolicy>().unwrap(), MissingKeyPolicy::Fallback);
        assert!("ignore".parse::<MissingKeyPolicy>().is_err());
        assert_eq!(MissingKeyPolicy::default().to_string(), "fail");
    }
}
