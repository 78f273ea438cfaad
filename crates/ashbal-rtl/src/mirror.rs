//! Structured mirroring of Tailwind class strings.
//!
//! A class string is split into [`StyleToken`]s, each token is mirrored by a
//! single rule, and the result is printed back. Tokens that no rule knows
//! about are kept verbatim, including their variant prefixes.

use crate::arabic::Alignment;
use crate::classes::PhysicalSide;
use ashbal_common::Language;
use std::fmt;

/// Marker class appended to every rewritten Arabic class string.
const RTL_MARKER: &str = "dir-rtl";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Utility {
    TextAlign(Alignment),
    Margin { side: PhysicalSide, value: String },
    Padding { side: PhysicalSide, value: String },
    Border { side: PhysicalSide, rest: String },
    Rounded { side: PhysicalSide, rest: String },
    FlexRow { reversed: bool },
    Float(PhysicalSide),
    SpaceX(String),
    SpaceXReverse,
    Other(String),
}

/// One parsed class token such as `md:-ml-4` or `hover:border-l-2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleToken {
    variants: String,
    negative: bool,
    utility: Utility,
}

const fn side_from_char(letter: char) -> Option<PhysicalSide> {
    match letter {
        'l' => Some(PhysicalSide::Left),
        'r' => Some(PhysicalSide::Right),
        _ => None,
    }
}

/// `<prefix>-l`, `<prefix>-l-<rest>` and the `r` equivalents.
fn sided(body: &str, prefix: &str) -> Option<(PhysicalSide, String)> {
    let mut tail = body.strip_prefix(prefix)?.strip_prefix('-')?.chars();
    let side = side_from_char(tail.next()?)?;
    let rest = tail.as_str();
    if rest.is_empty() || rest.starts_with('-') {
        Some((side, rest.to_string()))
    } else {
        None
    }
}

/// `m<l|r>-<value>` style spacing utilities.
fn spacing(body: &str, property: char) -> Option<(PhysicalSide, String)> {
    let tail = body.strip_prefix(property)?;
    let (side, value) = tail.split_once('-')?;
    let mut side_chars = side.chars();
    let (Some(letter), None) = (side_chars.next(), side_chars.next()) else {
        return None;
    };
    if value.is_empty() {
        return None;
    }
    Some((side_from_char(letter)?, value.to_string()))
}

impl StyleToken {
    /// Parse a single class token. Never fails; unknown tokens become opaque.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let (variants, body) = match token.rfind(':') {
            Some(idx) => token.split_at(idx + 1),
            None => ("", token),
        };
        let (negative, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, body),
        };

        let utility = Self::parse_utility(body);
        Self {
            variants: variants.to_string(),
            negative,
            utility,
        }
    }

    fn parse_utility(body: &str) -> Utility {
        match body {
            "text-left" => return Utility::TextAlign(Alignment::Left),
            "text-center" => return Utility::TextAlign(Alignment::Center),
            "text-right" => return Utility::TextAlign(Alignment::Right),
            "text-justify" => return Utility::TextAlign(Alignment::Justify),
            "flex-row" => return Utility::FlexRow { reversed: false },
            "flex-row-reverse" => return Utility::FlexRow { reversed: true },
            "float-left" => return Utility::Float(PhysicalSide::Left),
            "float-right" => return Utility::Float(PhysicalSide::Right),
            "space-x-reverse" => return Utility::SpaceXReverse,
            _ => {}
        }

        if let Some((side, value)) = spacing(body, 'm') {
            return Utility::Margin { side, value };
        }
        if let Some((side, value)) = spacing(body, 'p') {
            return Utility::Padding { side, value };
        }
        if let Some((side, rest)) = sided(body, "border") {
            return Utility::Border { side, rest };
        }
        if let Some((side, rest)) = sided(body, "rounded") {
            return Utility::Rounded { side, rest };
        }
        if let Some(value) = body.strip_prefix("space-x-") {
            return Utility::SpaceX(value.to_string());
        }
        Utility::Other(body.to_string())
    }

    /// Whether a mirroring rule applies to this token.
    #[must_use]
    pub const fn is_directional(&self) -> bool {
        !matches!(
            self.utility,
            Utility::Other(_)
                | Utility::SpaceX(_)
                | Utility::SpaceXReverse
                | Utility::TextAlign(Alignment::Right | Alignment::Justify)
        )
    }

    /// Whether this is a horizontal `space-x-*` gap utility.
    #[must_use]
    pub const fn is_space_x(&self) -> bool {
        matches!(self.utility, Utility::SpaceX(_))
    }

    /// Whether this is the `space-x-reverse` modifier.
    #[must_use]
    pub const fn is_space_x_reverse(&self) -> bool {
        matches!(self.utility, Utility::SpaceXReverse)
    }

    /// The token as it reads in right-to-left layout.
    ///
    /// Left/center text alignment becomes right, physical sides swap and
    /// `flex-row` toggles its reverse form.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let utility = match &self.utility {
            Utility::TextAlign(Alignment::Left | Alignment::Center) => {
                Utility::TextAlign(Alignment::Right)
            }
            Utility::Margin { side, value } => Utility::Margin {
                side: side.opposite(),
                value: value.clone(),
            },
            Utility::Padding { side, value } => Utility::Padding {
                side: side.opposite(),
                value: value.clone(),
            },
            Utility::Border { side, rest } => Utility::Border {
                side: side.opposite(),
                rest: rest.clone(),
            },
            Utility::Rounded { side, rest } => Utility::Rounded {
                side: side.opposite(),
                rest: rest.clone(),
            },
            Utility::FlexRow { reversed } => Utility::FlexRow {
                reversed: !reversed,
            },
            Utility::Float(side) => Utility::Float(side.opposite()),
            other => other.clone(),
        };
        Self {
            variants: self.variants.clone(),
            negative: self.negative,
            utility,
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.variants)?;
        if self.negative {
            f.write_str("-")?;
        }
        match &self.utility {
            Utility::TextAlign(align) => write!(f, "text-{align}"),
            Utility::Margin { side, value } => write!(f, "m{}-{value}", side.letter()),
            Utility::Padding { side, value } => write!(f, "p{}-{value}", side.letter()),
            Utility::Border { side, rest } => write!(f, "border-{}{rest}", side.letter()),
            Utility::Rounded { side, rest } => write!(f, "rounded-{}{rest}", side.letter()),
            Utility::FlexRow { reversed: false } => f.write_str("flex-row"),
            Utility::FlexRow { reversed: true } => f.write_str("flex-row-reverse"),
            Utility::Float(side) => write!(f, "float-{}", side.name()),
            Utility::SpaceX(value) => write!(f, "space-x-{value}"),
            Utility::SpaceXReverse => f.write_str("space-x-reverse"),
            Utility::Other(body) => f.write_str(body),
        }
    }
}

/// Rewrite a class string for `language`.
///
/// For Arabic every directional token is mirrored exactly once,
/// `space-x-reverse` is added when a `space-x-*` gap is present, and
/// `dir-rtl` is appended. A string already carrying `dir-rtl` has been
/// rewritten and is returned as is. Any other language returns `classes`
/// unchanged.
#[must_use]
pub fn rewrite_classes(classes: &str, language: Language) -> String {
    if !language.is_arabic() || classes.split_whitespace().any(|t| t == RTL_MARKER) {
        return classes.to_string();
    }

    let tokens: Vec<StyleToken> = classes.split_whitespace().map(StyleToken::parse).collect();
    let needs_space_reverse = tokens.iter().any(StyleToken::is_space_x)
        && !tokens.iter().any(StyleToken::is_space_x_reverse);

    let mut out: Vec<String> = tokens.iter().map(|t| t.mirrored().to_string()).collect();
    if needs_space_reverse {
        out.push("space-x-reverse".to_string());
    }
    out.push(RTL_MARKER.to_string());
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror(token: &str) -> String {
        StyleToken::parse(token).mirrored().to_string()
    }

    #[test]
    fn test_parse_prints_back_verbatim() {
        for token in [
            "ml-4",
            "md:-mr-2",
            "hover:border-l-2",
            "border-lime-500",
            "rounded-lg",
            "rounded-l-xl",
            "space-x-6",
            "text-center",
            "sm:flex-row-reverse",
            "bg-red-700",
            "mx-auto",
            "m-4",
        ] {
            assert_eq!(StyleToken::parse(token).to_string(), token);
        }
    }

    #[test]
    fn test_mirror_rules() {
        assert_eq!(mirror("ml-4"), "mr-4");
        assert_eq!(mirror("mr-auto"), "ml-auto");
        assert_eq!(mirror("md:-ml-2"), "md:-mr-2");
        assert_eq!(mirror("pl-6"), "pr-6");
        assert_eq!(mirror("border-l"), "border-r");
        assert_eq!(mirror("border-l-4"), "border-r-4");
        assert_eq!(mirror("rounded-r-lg"), "rounded-l-lg");
        assert_eq!(mirror("text-left"), "text-right");
        assert_eq!(mirror("md:text-center"), "md:text-right");
        assert_eq!(mirror("text-right"), "text-right");
        assert_eq!(mirror("flex-row"), "flex-row-reverse");
        assert_eq!(mirror("flex-row-reverse"), "flex-row");
        assert_eq!(mirror("float-left"), "float-right");
    }

    #[test]
    fn test_lookalikes_are_untouched() {
        for token in ["border-lime-500", "rounded-lg", "mx-4", "pt-2", "text-lg", "flex-col", "ml-"] {
            let parsed = StyleToken::parse(token);
            assert!(!parsed.is_directional(), "{token} should not be directional");
            assert_eq!(parsed.mirrored().to_string(), token);
        }
    }

    #[test]
    fn test_rewrite_arabic() {
        assert_eq!(rewrite_classes("ml-4 text-left", Language::Ar), "mr-4 text-right dir-rtl");
        assert_eq!(
            rewrite_classes("flex flex-row space-x-4", Language::Ar),
            "flex flex-row-reverse space-x-4 space-x-reverse dir-rtl"
        );
        assert_eq!(
            rewrite_classes("space-x-4 space-x-reverse dir-rtl", Language::Ar),
            "space-x-4 space-x-reverse dir-rtl"
        );
        assert_eq!(rewrite_classes("", Language::Ar), "dir-rtl");
    }

    #[test]
    fn test_rewrite_mirrors_exactly_once() {
        let rewritten = rewrite_classes("ml-4 pl-2", Language::Ar);
        assert_eq!(rewritten.matches("mr-4").count(), 1);
        assert!(!rewritten.contains("ml-4"));
        assert_eq!(rewritten.matches("dir-rtl").count(), 1);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = rewrite_classes("ml-4 flex-row text-left", Language::Ar);
        assert_eq!(once, "mr-4 flex-row-reverse text-right dir-rtl");
        assert_eq!(rewrite_classes(&once, Language::Ar), once);
    }

    #[test]
    fn test_rewrite_non_arabic_unchanged() {
        let input = "ml-4  text-left flex-row";
        assert_eq!(rewrite_classes(input, Language::En), input);
        assert_eq!(rewrite_classes(input, Language::Fr), input);
    }
}
