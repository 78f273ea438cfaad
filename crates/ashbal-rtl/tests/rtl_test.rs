//! Integration tests for the ashbal-rtl crate.
//!
//! This test suite covers:
//! - Direction totality and class-table mirroring across every language
//! - Script detection consistency on arbitrary input
//! - Class-string rewriting behavior for Arabic and non-Arabic languages
//! - Locale-aware formatting through the public API

use ashbal_common::test_utils::property_testing::{
    arabic_text_strategy, language_strategy, latin_text_strategy,
};
use ashbal_common::test_utils::text_fixtures;
use ashbal_rtl::*;
use proptest::prelude::*;

#[cfg(test)]
mod direction_tests {
    use super::*;

    #[test]
    fn test_direction_is_rtl_only_for_arabic() {
        for language in Language::ALL {
            let expected = if language == Language::Ar {
                Direction::Rtl
            } else {
                Direction::Ltr
            };
            assert_eq!(language.direction(), expected);
        }
    }

    #[test]
    fn test_class_table_is_stable() {
        for dir in [Direction::Ltr, Direction::Rtl] {
            assert_eq!(rtl_classes(dir), rtl_classes(dir));
        }
    }

    #[test]
    fn test_start_and_end_name_opposite_sides() {
        assert_eq!(
            physical_side(LogicalSide::Start, Direction::Rtl),
            physical_side(LogicalSide::End, Direction::Ltr)
        );
        assert_eq!(
            physical_side(LogicalSide::End, Direction::Rtl),
            physical_side(LogicalSide::Start, Direction::Ltr)
        );
        assert_eq!(
            rtl_classes(Direction::Rtl).margin_start,
            rtl_classes(Direction::Ltr).margin_end
        );
    }

    #[test]
    fn test_rtl_table_tokens_parse_as_directional() {
        let rtl = rtl_classes(Direction::Rtl);
        for token in [rtl.margin_start, rtl.padding_end, rtl.border_start, rtl.rounded_end, rtl.float_start] {
            assert!(StyleToken::parse(token).is_directional(), "{token}");
        }
    }
}

#[cfg(test)]
mod detection_tests {
    use super::*;

    #[test]
    fn test_fixture_samples() {
        assert!(has_arabic_text(text_fixtures::ARABIC));
        assert!(!has_arabic_text(text_fixtures::LATIN));
        assert!(has_arabic_text(text_fixtures::MIXED));
        assert!(is_mixed_content(text_fixtures::MIXED));
        assert_eq!(
            content_direction(text_fixtures::MIXED, Direction::Ltr).as_str(),
            "auto"
        );
    }

    #[test]
    fn test_normalized_arabic_still_detected() {
        let noisy = format!("\u{200E}{}\u{202E}", text_fixtures::ARABIC);
        let normalized = normalize_arabic_text(&noisy);
        assert_eq!(normalized, text_fixtures::ARABIC);
        assert!(validate_rtl_input(&normalized, Language::Ar));
    }
}

#[cfg(test)]
mod rewrite_tests {
    use super::*;

    #[test]
    fn test_rewrite_matches_rtl_table() {
        let ltr = rtl_classes(Direction::Ltr);
        let rtl = rtl_classes(Direction::Rtl);
        let input = [ltr.margin_start, ltr.padding_start, ltr.border_start, ltr.flex_direction].join(" ");
        let expected = format!(
            "{} {} {} {} dir-rtl",
            rtl.margin_start, rtl.padding_start, rtl.border_start, rtl.flex_direction
        );
        assert_eq!(rewrite_classes(&input, Language::Ar), expected);
    }

    #[test]
    fn test_section_classes_for_arabic_page() {
        let classes = format!(
            "{} {}",
            section_arabic_classes(Language::Ar, SectionKind::Contact),
            grid_arabic_classes(Language::Ar)
        );
        assert_eq!(
            classes,
            "arabic-section arabic-text-container contact-section arabic-grid"
        );
    }
}

#[cfg(test)]
mod formatting_tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_number_formatting_per_language() {
        assert_eq!(format_number(1234.56, Language::En), "1,234.56");
        let fr = format_number(1234.56, Language::Fr);
        assert_ne!(fr, "1,234.56");
        let ar = format_number(1234.56, Language::Ar);
        assert!(ar == "1,234.56" || ar.contains('٫'), "got {ar}");
    }

    #[test]
    fn test_date_formatting_never_empty() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        for language in Language::ALL {
            assert!(!format_date(date, language).is_empty());
        }
    }
}

proptest! {
    #[test]
    fn prop_direction_is_total(language in language_strategy()) {
        let dir = language.direction();
        prop_assert_eq!(dir.is_rtl(), language == Language::Ar);
    }

    #[test]
    fn prop_mixed_iff_both_scripts(text in "\\PC{0,40}") {
        prop_assert_eq!(
            is_mixed_content(&text),
            has_arabic_text(&text) && has_latin_text(&text)
        );
    }

    #[test]
    fn prop_arabic_text_is_rtl(text in arabic_text_strategy()) {
        prop_assert!(has_arabic_text(&text));
        prop_assert_eq!(content_direction(&text, Direction::Ltr), ContentDirection::Rtl);
    }

    #[test]
    fn prop_latin_text_keeps_fallback(text in latin_text_strategy()) {
        prop_assert_eq!(content_direction(&text, Direction::Rtl), ContentDirection::Rtl);
        prop_assert_eq!(content_direction(&text, Direction::Ltr), ContentDirection::Ltr);
    }

    #[test]
    fn prop_rewrite_leaves_non_arabic_untouched(text in "[a-z0-9:\\- ]{0,60}") {
        prop_assert_eq!(rewrite_classes(&text, Language::En), text.clone());
        prop_assert_eq!(rewrite_classes(&text, Language::Fr), text);
    }

    #[test]
    fn prop_rewrite_appends_single_marker(text in "[a-z0-9\\- ]{0,60}") {
        let markers = |s: &str| s.split_whitespace().filter(|t| *t == "dir-rtl").count();
        let rewritten = rewrite_classes(&text, Language::Ar);
        prop_assert_eq!(markers(&rewritten), markers(&text).max(1));
    }

    #[test]
    fn prop_rewrite_is_idempotent(text in "((md:)?(ml|mr|pl|pr|border-l|rounded-r|space-x)-[0-9]|text-left|flex-row|float-left|bg-red-700| ){0,12}") {
        let once = rewrite_classes(&text, Language::Ar);
        prop_assert_eq!(rewrite_classes(&once, Language::Ar), once);
    }

    #[test]
    fn prop_token_parse_round_trips(token in "[a-z:\\-]{1,12}[a-z0-9]{0,4}") {
        prop_assert_eq!(StyleToken::parse(&token).to_string(), token);
    }
}
