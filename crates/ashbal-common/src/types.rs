//! Language and direction types shared by every crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AshbalError;

/// A language the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the reference language.
    #[default]
    En,
    /// French.
    Fr,
    /// Arabic, written right-to-left.
    Ar,
}

impl Language {
    /// Every supported language in selector order.
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Ar];

    /// Short language code (`en`, `fr`, `ar`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Regional tag used for number and date formatting.
    #[must_use]
    pub const fn region_tag(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Fr => "fr-FR",
            Self::Ar => "ar-SA",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Ar => "العربية",
        }
    }

    /// Text direction of the language.
    #[must_use]
    pub const fn direction(self) -> Direction {
        Direction::of(self)
    }

    /// Whether this is Arabic.
    #[must_use]
    pub const fn is_arabic(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Parse a short language code. Matching is case-insensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AshbalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AshbalError::unsupported_language(s))
    }
}

/// Layout direction, derived from a [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Direction of a language: `rtl` for Arabic, `ltr` otherwise.
    #[must_use]
    pub const fn of(language: Language) -> Self {
        match language {
            Language::Ar => Self::Rtl,
            Language::En | Language::Fr => Self::Ltr,
        }
    }

    /// Attribute value (`ltr` or `rtl`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Whether this is right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction inferred from a piece of content.
///
/// `Auto` means the text mixes Arabic and Latin script and the bidi
/// algorithm should resolve it per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentDirection {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
    /// Resolved by the renderer.
    Auto,
}

impl ContentDirection {
    /// Attribute value (`ltr`, `rtl` or `auto`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
            Self::Auto => "auto",
        }
    }
}

impl From<Direction> for ContentDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Ltr => Self::Ltr,
            Direction::Rtl => Self::Rtl,
        }
    }
}

impl fmt::Display for ContentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_of_language() {
        assert_eq!(Direction::of(Language::Ar), Direction::Rtl);
        assert_eq!(Direction::of(Language::En), Direction::Ltr);
        assert_eq!(Direction::of(Language::Fr), Direction::Ltr);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Ar.region_tag(), "ar-SA");
        assert_eq!(Language::Fr.native_name(), "Français");
        assert_eq!(Language::from_code(" AR "), Some(Language::Ar));
        assert_eq!(Language::from_code("de"), None);
        assert!("es".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&Language::Fr).unwrap();
        assert_eq!(json, "\"fr\"");
        let dir: Direction = serde_json::from_str("\"rtl\"").unwrap();
        assert_eq!(dir, Direction::Rtl);
        assert_eq!(ContentDirection::from(Direction::Ltr).as_str(), "ltr");
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Direction::Ltr.flipped(), Direction::Rtl);
        assert_eq!(Direction::Rtl.flipped().flipped(), Direction::Rtl);
    }
}
