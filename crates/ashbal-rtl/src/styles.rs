//! Inline style records for direction and alignment.

use crate::arabic::Alignment;
use ashbal_common::{Direction, Language};
use serde::Serialize;

/// A small set of inline CSS declarations.
///
/// Unset properties are omitted both from the serialized form and from
/// [`InlineStyle::to_css`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyle {
    /// `direction`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// `text-align`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<Alignment>,
    /// `unicode-bidi`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_bidi: Option<&'static str>,
    /// `width`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<&'static str>,
    /// `line-height`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

impl InlineStyle {
    /// Whether no property is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.direction.is_none()
            && self.text_align.is_none()
            && self.unicode_bidi.is_none()
            && self.width.is_none()
            && self.line_height.is_none()
    }

    /// Render as a `style` attribute value, e.g. `direction: rtl; text-align: right`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();
        if let Some(direction) = self.direction {
            declarations.push(format!("direction: {direction}"));
        }
        if let Some(align) = self.text_align {
            declarations.push(format!("text-align: {align}"));
        }
        if let Some(bidi) = self.unicode_bidi {
            declarations.push(format!("unicode-bidi: {bidi}"));
        }
        if let Some(width) = self.width {
            declarations.push(format!("width: {width}"));
        }
        if let Some(line_height) = self.line_height {
            declarations.push(format!("line-height: {line_height}"));
        }
        declarations.join("; ")
    }

    fn aligned(direction: Direction, align: Alignment) -> Self {
        Self {
            direction: Some(direction),
            text_align: Some(align),
            ..Self::default()
        }
    }
}

/// Right-to-left embedding for Arabic, or for any language when `force` is set.
#[must_use]
pub fn arabic_inline_styles(language: Language, force: bool) -> InlineStyle {
    if !language.is_arabic() && !force {
        return InlineStyle::default();
    }
    InlineStyle {
        unicode_bidi: Some("embed"),
        ..InlineStyle::aligned(Direction::Rtl, Alignment::Right)
    }
}

/// Full-width right-to-left wrapper for Arabic; empty otherwise.
#[must_use]
pub fn arabic_container_styles(language: Language) -> InlineStyle {
    if !language.is_arabic() {
        return InlineStyle::default();
    }
    InlineStyle {
        width: Some("100%"),
        ..InlineStyle::aligned(Direction::Rtl, Alignment::Right)
    }
}

/// Per-element styles for a page in `language`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentStyles {
    /// Section wrapper.
    pub section: InlineStyle,
    /// Headings.
    pub title: InlineStyle,
    /// Body text.
    pub paragraph: InlineStyle,
    /// Cards.
    pub card: InlineStyle,
    /// Grid containers.
    pub grid: InlineStyle,
}

/// Styles for every element kind. Titles are centered outside Arabic.
#[must_use]
pub fn arabic_alignment_styles(language: Language) -> AlignmentStyles {
    let direction = language.direction();
    let (start, title_align, line_height) = if language.is_arabic() {
        (Alignment::Right, Alignment::Right, 1.8)
    } else {
        (Alignment::Left, Alignment::Center, 1.6)
    };

    AlignmentStyles {
        section: InlineStyle::aligned(direction, start),
        title: InlineStyle::aligned(direction, title_align),
        paragraph: InlineStyle {
            line_height: Some(line_height),
            ..InlineStyle::aligned(direction, start)
        },
        card: InlineStyle::aligned(direction, start),
        grid: InlineStyle {
            direction: Some(direction),
            ..InlineStyle::default()
        },
    }
}
