//! Arabic-only semantic class builders.
//!
//! Arabic gets bespoke classes; English and French get nothing here and rely
//! on the mirrored tables in [`crate::classes`] instead.

use ashbal_common::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
    /// Justified.
    Justify,
}

impl Alignment {
    /// CSS `text-align` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page section a class set is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Landing banner.
    Hero,
    /// Club activities.
    Activities,
    /// Club vision.
    Vision,
    /// Events gallery.
    Events,
    /// President biography.
    President,
    /// Contact form.
    Contact,
    /// Anything else.
    #[default]
    Generic,
}

impl SectionKind {
    /// Lowercase name, also used as the section anchor id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Activities => "activities",
            Self::Vision => "vision",
            Self::Events => "events",
            Self::President => "president",
            Self::Contact => "contact",
            Self::Generic => "generic",
        }
    }
}

/// Heading level `h1` to `h6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// `h1`
    H1,
    /// `h2`
    #[default]
    H2,
    /// `h3`
    H3,
    /// `h4`
    H4,
    /// `h5`
    H5,
    /// `h6`
    H6,
}

impl HeadingLevel {
    /// Tag name.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

/// Viewport class for responsive alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
    /// Small screens.
    #[default]
    Mobile,
    /// Medium screens.
    Tablet,
    /// Large screens.
    Desktop,
}

/// Kind of inline content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Heading text.
    Title,
    /// Secondary heading.
    Subtitle,
    /// Body text.
    Paragraph,
    /// List.
    List,
    /// Button label.
    Button,
    /// Hyperlink.
    Link,
}

impl ContentKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Title => "arabic-title",
            Self::Subtitle => "arabic-subtitle",
            Self::Paragraph => "arabic-paragraph",
            Self::List => "arabic-list",
            Self::Button => "arabic-button",
            Self::Link => "arabic-link",
        }
    }
}

/// Extra markers added by [`apply_arabic_alignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignmentOptions {
    /// Add `override-center-arabic`.
    pub override_center: bool,
    /// Add `always-right`.
    pub force_right: bool,
    /// Add `arabic-text-container`.
    pub add_container: bool,
}

/// Alignment to use for `language` given the alignment LTR content would use.
#[must_use]
pub const fn arabic_alignment(language: Language, default: Alignment) -> Alignment {
    if language.is_arabic() {
        Alignment::Right
    } else {
        default
    }
}

/// `base` followed by direction-specific alignment classes.
#[must_use]
pub fn arabic_alignment_classes(language: Language, base: &str) -> String {
    let extra = if language.is_arabic() {
        "text-right direction-rtl arabic-content"
    } else {
        "text-left direction-ltr"
    };
    format!("{base} {extra}").trim().to_string()
}

/// Section wrapper classes.
#[must_use]
pub fn section_arabic_classes(language: Language, kind: SectionKind) -> String {
    if !language.is_arabic() {
        return String::new();
    }
    format!("arabic-section arabic-text-container {}-section", kind.as_str())
}

/// Card classes.
#[must_use]
pub const fn card_arabic_classes(language: Language) -> &'static str {
    if language.is_arabic() {
        "arabic-card arabic-content"
    } else {
        ""
    }
}

/// Heading classes for `level`.
#[must_use]
pub fn title_arabic_classes(language: Language, level: HeadingLevel) -> String {
    if !language.is_arabic() {
        return String::new();
    }
    format!("arabic-title arabic-{}", level.tag())
}

/// Paragraph classes.
#[must_use]
pub const fn paragraph_arabic_classes(language: Language) -> &'static str {
    if language.is_arabic() {
        "arabic-paragraph arabic-content"
    } else {
        ""
    }
}

/// Grid container classes.
#[must_use]
pub const fn grid_arabic_classes(language: Language) -> &'static str {
    if language.is_arabic() {
        "arabic-grid"
    } else {
        ""
    }
}

/// Flex container classes.
#[must_use]
pub const fn flex_arabic_classes(language: Language) -> &'static str {
    if language.is_arabic() {
        "arabic-flex"
    } else {
        ""
    }
}

/// Marker that turns centered text right-aligned in Arabic.
#[must_use]
pub const fn override_center_alignment(language: Language, should_override: bool) -> &'static str {
    if language.is_arabic() && should_override {
        "override-center-arabic"
    } else {
        ""
    }
}

/// Right-alignment class scoped to a breakpoint.
#[must_use]
pub const fn responsive_arabic_classes(language: Language, breakpoint: Breakpoint) -> &'static str {
    if !language.is_arabic() {
        return "";
    }
    match breakpoint {
        Breakpoint::Mobile => "mobile-arabic-right",
        Breakpoint::Tablet => "tablet-arabic-right",
        Breakpoint::Desktop => "desktop-arabic-right",
    }
}

/// Classes for a kind of inline content.
#[must_use]
pub fn content_type_arabic_classes(language: Language, kind: ContentKind) -> String {
    if !language.is_arabic() {
        return String::new();
    }
    format!("arabic-content {}", kind.class())
}

/// Drop left/center alignment and explicit direction classes from
/// `existing`, then append Arabic markers.
///
/// Only whole tokens are removed. Non-Arabic input is returned unchanged.
#[must_use]
pub fn apply_arabic_alignment(existing: &str, language: Language, options: AlignmentOptions) -> String {
    if !language.is_arabic() {
        return existing.to_string();
    }

    let mut tokens: Vec<&str> = existing
        .split_whitespace()
        .filter(|t| !matches!(*t, "text-left" | "text-center" | "direction-ltr" | "direction-rtl"))
        .collect();

    tokens.push("arabic-content");
    if options.override_center {
        tokens.push("override-center-arabic");
    }
    if options.force_right {
        tokens.push("always-right");
    }
    if options.add_container {
        tokens.push("arabic-text-container");
    }
    tokens.join(" ")
}

/// CSS `font-family` stack for a language.
#[must_use]
pub const fn font_family(language: Language) -> &'static str {
    match language {
        Language::Ar => "IBM Plex Sans Arabic, Noto Sans Arabic, sans-serif",
        Language::En | Language::Fr => "Poppins, Segoe UI, sans-serif",
    }
}
