//! Script detection and content direction inference.

use ashbal_common::{ContentDirection, Direction, Language};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use unicode_bidi::{bidi_class, BidiClass};

/// Arabic, Arabic Supplement, Arabic Extended-A and Presentation Forms A/B.
static ARABIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{08A0}-\x{08FF}\x{FB50}-\x{FDFF}\x{FE70}-\x{FEFF}]")
        .expect("Invalid Arabic range regex pattern")
});

/// LRM, RLM and the embedding/override controls.
static DIRECTIONAL_MARKS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{200E}\x{200F}\x{202A}-\x{202E}]").expect("Invalid directional mark regex pattern")
});

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"));

/// Whether `text` contains at least one Arabic-script character.
#[must_use]
pub fn has_arabic_text(text: &str) -> bool {
    ARABIC_REGEX.is_match(text)
}

/// Whether `text` contains at least one ASCII letter.
#[must_use]
pub fn has_latin_text(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// Whether `text` contains both Arabic and Latin script.
#[must_use]
pub fn is_mixed_content(text: &str) -> bool {
    has_arabic_text(text) && has_latin_text(text)
}

/// Direction to render `text` with.
///
/// Mixed script yields [`ContentDirection::Auto`], Arabic-only yields
/// [`ContentDirection::Rtl`], anything else yields `fallback`.
#[must_use]
pub fn content_direction(text: &str, fallback: Direction) -> ContentDirection {
    let arabic = has_arabic_text(text);
    let latin = has_latin_text(text);
    match (arabic, latin) {
        (true, true) => ContentDirection::Auto,
        (true, false) => ContentDirection::Rtl,
        _ => {
            debug!(fallback = %fallback, "No Arabic script in content, using fallback direction");
            fallback.into()
        }
    }
}

/// Direction of the first strong character, per the Unicode bidi classes.
///
/// Returns `None` when `text` has no strong character (digits, punctuation,
/// whitespace only).
#[must_use]
pub fn first_strong_direction(text: &str) -> Option<Direction> {
    text.chars().find_map(|c| match bidi_class(c) {
        BidiClass::L => Some(Direction::Ltr),
        BidiClass::R | BidiClass::AL => Some(Direction::Rtl),
        _ => None,
    })
}

/// Whether `text` is acceptable input for `language`.
///
/// Arabic input must contain Arabic script or be blank; other languages
/// accept anything.
#[must_use]
pub fn validate_rtl_input(text: &str, language: Language) -> bool {
    if language.is_arabic() {
        has_arabic_text(text) || text.trim().is_empty()
    } else {
        true
    }
}

/// Strip explicit directional marks and collapse runs of whitespace.
#[must_use]
pub fn normalize_arabic_text(text: &str) -> String {
    let stripped = DIRECTIONAL_MARKS_REGEX.replace_all(text, "");
    WHITESPACE_REGEX.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashbal_common::test_utils::text_fixtures::{ARABIC, LATIN, MIXED, NEUTRAL};

    #[test]
    fn test_arabic_detection() {
        assert!(has_arabic_text(ARABIC));
        assert!(!has_arabic_text(LATIN));
        assert!(has_arabic_text(MIXED));
        assert!(!has_arabic_text(NEUTRAL));
        assert!(!has_arabic_text(""));
    }

    #[test]
    fn test_arabic_extended_ranges() {
        // Arabic Supplement, Extended-A, Presentation Forms A and B
        for sample in ["\u{0750}", "\u{08A0}", "\u{FB50}", "\u{FEFC}"] {
            assert!(has_arabic_text(sample), "{sample:?} should be Arabic");
        }
        assert!(!has_arabic_text("\u{0590}"));
    }

    #[test]
    fn test_latin_detection() {
        assert!(has_latin_text(LATIN));
        assert!(has_latin_text("z"));
        assert!(!has_latin_text(ARABIC));
        assert!(!has_latin_text(NEUTRAL));
        assert!(!has_latin_text("éàç"));
    }

    #[test]
    fn test_mixed_detection() {
        assert!(is_mixed_content(MIXED));
        assert!(!is_mixed_content(ARABIC));
        assert!(!is_mixed_content(LATIN));
    }

    #[test]
    fn test_content_direction() {
        assert_eq!(content_direction(MIXED, Direction::Ltr), ContentDirection::Auto);
        assert_eq!(content_direction(ARABIC, Direction::Ltr), ContentDirection::Rtl);
        assert_eq!(content_direction(NEUTRAL, Direction::Rtl), ContentDirection::Rtl);
        assert_eq!(content_direction(LATIN, Direction::Ltr), ContentDirection::Ltr);
        assert_eq!(content_direction("", Direction::Ltr), ContentDirection::Ltr);
    }

    #[test]
    fn test_first_strong_direction() {
        assert_eq!(first_strong_direction(ARABIC), Some(Direction::Rtl));
        assert_eq!(first_strong_direction("123 Hello مرحبا"), Some(Direction::Ltr));
        assert_eq!(first_strong_direction(MIXED), Some(Direction::Rtl));
        assert_eq!(first_strong_direction(NEUTRAL), None);
    }

    #[test]
    fn test_validate_rtl_input() {
        assert!(validate_rtl_input(ARABIC, Language::Ar));
        assert!(validate_rtl_input("   ", Language::Ar));
        assert!(!validate_rtl_input(LATIN, Language::Ar));
        assert!(validate_rtl_input(LATIN, Language::Fr));
    }

    #[test]
    fn test_normalize_arabic_text() {
        let input = "\u{200F}مرحبا\u{202B}   بكم\u{202C}\n";
        assert_eq!(normalize_arabic_text(input), "مرحبا بكم");
        assert_eq!(normalize_arabic_text("  "), "");
    }
}
