//! # Ashbal RTL
//!
//! Pure, stateless translation from a [`Language`] or [`Direction`] to
//! presentation tokens for the Ashbal Karate site.
//!
//! This crate provides:
//!
//! - Direction-mirrored Tailwind class tables ([`rtl_classes`] and friends)
//! - Arabic/Latin script detection and content direction inference
//! - Locale-aware number, currency and date formatting backed by ICU4X
//! - Arabic-only semantic class builders for sections, cards and titles
//! - Structured class-string mirroring ([`rewrite_classes`])
//! - Inline style records for direction and alignment
//!
//! Nothing here performs I/O or holds state; identical inputs always give
//! identical outputs.
//!
//! # Example
//!
//! ```rust
//! use ashbal_common::{Direction, Language};
//! use ashbal_rtl::{rewrite_classes, rtl_classes};
//!
//! let classes = rtl_classes(Direction::Rtl);
//! assert_eq!(classes.margin_start, "mr-4");
//!
//! let rewritten = rewrite_classes("ml-4 text-left", Language::Ar);
//! assert_eq!(rewritten, "mr-4 text-right dir-rtl");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod arabic;
pub mod classes;
pub mod detect;
pub mod format;
pub mod mirror;
pub mod styles;

pub use arabic::{
    apply_arabic_alignment, arabic_alignment, arabic_alignment_classes, card_arabic_classes,
    content_type_arabic_classes, flex_arabic_classes, font_family, grid_arabic_classes,
    override_center_alignment, paragraph_arabic_classes, responsive_arabic_classes,
    section_arabic_classes, title_arabic_classes, Alignment, AlignmentOptions, Breakpoint,
    ContentKind, HeadingLevel, SectionKind,
};
pub use classes::{
    animation_classes, card_classes, css_custom_properties, form_classes, grid_classes,
    icon_transform, nav_classes, physical_side, responsive_classes, rtl_class_name, rtl_classes,
    rtl_spacing, AnimationClasses, CardClasses, DirectionClasses, FormClasses, GridClasses,
    LogicalSide, NavClasses, PhysicalSide, ResponsiveClasses, RtlSpacing,
};
pub use detect::{
    content_direction, first_strong_direction, has_arabic_text, has_latin_text, is_mixed_content,
    normalize_arabic_text, validate_rtl_input,
};
pub use format::{format_currency, format_date, format_number, format_number_with, NumberOptions};
pub use mirror::{rewrite_classes, StyleToken};
pub use styles::{
    arabic_alignment_styles, arabic_container_styles, arabic_inline_styles, AlignmentStyles,
    InlineStyle,
};

pub use ashbal_common::{ContentDirection, Direction, Language};
