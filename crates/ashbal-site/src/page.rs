//! Whole-page view model

use crate::sections::{
    CardSection, ContactSection, EventsSection, FooterSection, HeaderSection, HeroSection,
    PresidentSection,
};
use crate::selector::SelectorView;
use ashbal_common::{Direction, Language};
use ashbal_config::DEFAULT_SOCIAL_URL;
use ashbal_i18n::LanguageSnapshot;
use ashbal_rtl::{css_custom_properties, font_family};
use chrono::Datelike;
use serde::Serialize;

/// Inputs to page rendering that do not come from the language context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Year printed in the footer
    pub year: i32,
    /// Target of the social links
    pub social_url: String,
}

impl PageOptions {
    /// Options stamped with the current local year
    pub fn current(social_url: impl Into<String>) -> Self {
        Self {
            year: chrono::Local::now().year(),
            social_url: social_url.into(),
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::current(DEFAULT_SOCIAL_URL)
    }
}

/// Every section of the single-page site for one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Language of the page
    pub lang: Language,
    /// Direction of the page
    pub dir: Direction,
    /// Font stack for the language
    pub font_family: &'static str,
    /// CSS custom properties set on the document root
    pub custom_properties: Vec<(&'static str, &'static str)>,
    /// Language drop-down
    pub selector: SelectorView,
    /// Fixed header
    pub header: HeaderSection,
    /// Landing banner
    pub hero: HeroSection,
    /// Club activities
    pub activities: CardSection,
    /// Numbered vision statements
    pub vision: CardSection,
    /// Events gallery
    pub events: EventsSection,
    /// President biography
    pub president: PresidentSection,
    /// Contact form
    pub contact: ContactSection,
    /// Footer
    pub footer: FooterSection,
}

impl Page {
    /// Build the page for `snapshot`
    pub fn build(snapshot: &LanguageSnapshot, options: &PageOptions) -> Self {
        Self {
            lang: snapshot.language,
            dir: snapshot.direction,
            font_family: font_family(snapshot.language),
            custom_properties: css_custom_properties(snapshot.direction).to_vec(),
            selector: SelectorView::build(snapshot),
            header: HeaderSection::build(snapshot),
            hero: HeroSection::build(snapshot),
            activities: CardSection::activities(snapshot),
            vision: CardSection::vision(snapshot),
            events: EventsSection::build(snapshot),
            president: PresidentSection::build(snapshot),
            contact: ContactSection::build(snapshot, &options.social_url),
            footer: FooterSection::build(snapshot, options.year, &options.social_url),
        }
    }
}
