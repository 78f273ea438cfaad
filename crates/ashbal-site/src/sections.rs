//! Section view models
//!
//! Each section is built from a [`LanguageSnapshot`] and carries its text,
//! the `dir`/`lang` attributes of its root element and the class tokens
//! derived through `ashbal-rtl`. Nothing here keeps state; building the same
//! snapshot twice yields equal models.

use ashbal_common::{Direction, Language};
use ashbal_i18n::schema::{CardSectionText, ContactText, EventsText, HeaderText, PresidentText};
use ashbal_i18n::{LanguageSnapshot, ITEM_COUNT};
use ashbal_rtl::{
    arabic_container_styles, card_arabic_classes, flex_arabic_classes, form_classes,
    format_number, grid_arabic_classes, grid_classes, nav_classes, paragraph_arabic_classes,
    rewrite_classes, rtl_class_name, rtl_classes, section_arabic_classes, title_arabic_classes,
    HeadingLevel, InlineStyle, NavClasses, SectionKind,
};
use serde::Serialize;

/// Club logo shown in the header
pub const LOGO_SRC: &str = "/images/logo.png";

/// Trophy photo under the hero title
pub const HERO_IMAGE_SRC: &str = "/images/coupe.jpg";

/// President portrait
pub const PRESIDENT_PORTRAIT_SRC: &str = "/images/president.jpg";

/// Photo beside the contact form
pub const CONTACT_IMAGE_SRC: &str = "https://images.pexels.com/photos/7045551/pexels-photo-7045551.jpeg";

/// Media shown in the events gallery, in caption order
pub const EVENT_MEDIA: [(MediaKind, &str); ITEM_COUNT] = [
    (MediaKind::Image, "/images/coupe.jpg"),
    (MediaKind::Image, "/images/ourwork/coupe.jpg"),
    (MediaKind::Video, "/images/ourwork/Oussra.MP4"),
    (MediaKind::Image, "/images/ourwork/Small Billboard small copyk.jpg"),
];

/// Countries the president has competed or coached in
pub const PRESIDENT_FLAGS: [Flag; 6] = [
    Flag::new("/images/flags/mr.svg", "Mauritania"),
    Flag::new("/images/flags/sn.svg", "Senegal"),
    Flag::new("/images/flags/cm.svg", "Cameroon"),
    Flag::new("/images/flags/tn.svg", "Tunisia"),
    Flag::new("/images/flags/tr.svg", "Turkey"),
    Flag::new("/images/flags/us.svg", "United States"),
];

/// Label of the social link
pub const SOCIAL_LABEL: &str = "Facebook";

/// Join class lists, dropping empty parts and duplicate whitespace.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Kind of media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// `<img>`
    Image,
    /// `<video>`
    Video,
}

/// An image or video with its accessible text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    /// Element type
    pub kind: MediaKind,
    /// Asset path
    pub src: &'static str,
    /// Alternative text
    pub alt: String,
}

impl Media {
    fn image(src: &'static str, alt: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src,
            alt: alt.into(),
        }
    }
}

/// Country flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flag {
    /// Asset path
    pub src: &'static str,
    /// Country name
    pub name: &'static str,
}

impl Flag {
    const fn new(src: &'static str, name: &'static str) -> Self {
        Self { src, name }
    }
}

/// Attributes of a section's root element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionAttrs {
    /// Anchor id used by the navigation
    pub id: &'static str,
    /// `dir` attribute
    pub dir: Direction,
    /// `lang` attribute
    pub lang: Language,
    /// Tailwind classes after direction rewriting
    pub classes: String,
    /// Inline style, omitted when empty
    #[serde(skip_serializing_if = "InlineStyle::is_empty")]
    pub style: InlineStyle,
}

impl SectionAttrs {
    fn new(kind: SectionKind, language: Language, base: &str) -> Self {
        Self {
            id: kind.as_str(),
            dir: language.direction(),
            lang: language,
            classes: join_classes([
                rewrite_classes(base, language).as_str(),
                section_arabic_classes(language, kind).as_str(),
            ]),
            style: arabic_container_styles(language),
        }
    }
}

/// A run of text with its classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    /// Localized text
    pub text: String,
    /// Tailwind classes after direction rewriting
    pub classes: String,
}

impl Text {
    fn paragraph(text: &str, base: &str, language: Language) -> Self {
        Self {
            text: text.to_string(),
            classes: join_classes([
                rewrite_classes(base, language).as_str(),
                paragraph_arabic_classes(language),
            ]),
        }
    }
}

/// A heading element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// `h1` to `h3`
    pub level: HeadingLevel,
    /// Localized text
    pub text: String,
    /// Tailwind classes after direction rewriting
    pub classes: String,
}

impl Heading {
    fn new(text: &str, level: HeadingLevel, base: &str, language: Language) -> Self {
        Self {
            level,
            text: text.to_string(),
            classes: join_classes([
                rewrite_classes(base, language).as_str(),
                title_arabic_classes(language, level).as_str(),
            ]),
        }
    }
}

/// Navigation entry scrolling to a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Id of the section scrolled to
    pub target: &'static str,
    /// Visible label
    pub label: String,
}

/// Fixed page header with brand and navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSection {
    /// `dir` attribute
    pub dir: Direction,
    /// `lang` attribute
    pub lang: Language,
    /// Club logo
    pub logo: Media,
    /// Spacing between logo and title
    pub brand_classes: String,
    /// Club name
    pub title: Text,
    /// Tagline
    pub subtitle: Text,
    /// Classes of the desktop and mobile menus
    pub nav: NavClasses,
    /// Menu entries in display order
    pub items: Vec<NavItem>,
}

impl HeaderSection {
    /// Header for the snapshot's language
    pub fn build(snapshot: &LanguageSnapshot) -> Self {
        let HeaderText { title, subtitle, nav } = &snapshot.bundle.header;
        let dir = snapshot.direction;
        let items = [
            (SectionKind::Activities, &nav.activities),
            (SectionKind::Vision, &nav.vision),
            (SectionKind::President, &nav.president),
            (SectionKind::Contact, &nav.contact),
        ]
        .into_iter()
        .map(|(kind, label)| NavItem {
            target: kind.as_str(),
            label: label.clone(),
        })
        .collect();

        Self {
            dir,
            lang: snapshot.language,
            logo: Media::image(LOGO_SRC, title.as_str()),
            brand_classes: rtl_class_name("flex items-center space-x-4", "space-x-reverse", dir),
            title: Text {
                text: title.clone(),
                classes: join_classes(["text-xl md:text-3xl font-bold text-red-700", rtl_classes(dir).text_align]),
            },
            subtitle: Text {
                text: subtitle.clone(),
                classes: "text-xs sm:text-sm text-gray-600 whitespace-nowrap".to_string(),
            },
            nav: nav_classes(dir),
            items,
        }
    }
}

/// Landing banner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSection {
    /// Root element attributes
    #[serde(flatten)]
    pub attrs: SectionAttrs,
    /// Section heading
    pub title: Heading,
    /// Line under the title
    pub subtitle: Text,
    /// Illustration
    pub image: Media,
}

impl HeroSection {
    /// Hero for the snapshot's language
    pub fn build(snapshot: &LanguageSnapshot) -> Self {
        let language = snapshot.language;
        let header = &snapshot.bundle.header;
        Self {
            attrs: SectionAttrs::new(SectionKind::Hero, language, "pt-20 pb-12 sm:pt-24 sm:pb-16 md:pt-32 md:pb-24"),
            title: Heading::new(
                &header.title,
                HeadingLevel::H1,
                "text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold mb-3 sm:mb-4 text-red-700 text-center",
                language,
            ),
            subtitle: Text::paragraph(
                &header.subtitle,
                "text-lg sm:text-xl md:text-2xl max-w-3xl text-gray-700 px-2 sm:px-0 text-center",
                language,
            ),
            image: Media::image(HERO_IMAGE_SRC, "Karate competition trophy"),
        }
    }
}

/// Numbered badge on a vision card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    /// Number shown
    pub text: String,
    /// Tailwind classes after direction rewriting
    pub classes: String,
}

/// A titled card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Card container classes
    pub classes: String,
    /// Number badge, vision cards only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// Card heading
    pub title: Heading,
    /// Card body
    pub description: Text,
}

/// A heading, an introduction and a grid of cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSection {
    /// Root element attributes
    #[serde(flatten)]
    pub attrs: SectionAttrs,
    /// Section heading
    pub title: Heading,
    /// Introductory paragraph
    pub description: Text,
    /// Classes of the card grid
    pub grid_classes: String,
    /// Cards in display order
    pub cards: Vec<Card>,
}

impl CardSection {
    fn header(kind: SectionKind, text: &CardSectionText, language: Language, base: &str) -> (SectionAttrs, Heading, Text) {
        (
            SectionAttrs::new(kind, language, base),
            Heading::new(&text.title, HeadingLevel::H2, "text-2xl sm:text-3xl font-bold mb-3 sm:mb-4 text-center text-gray-800", language),
            Text::paragraph(&text.description, "text-base sm:text-lg text-center mb-8 sm:mb-12 max-w-3xl mx-auto", language),
        )
    }

    /// Activities grid: four columns of bordered cards
    pub fn activities(snapshot: &LanguageSnapshot) -> Self {
        let language = snapshot.language;
        let text = &snapshot.bundle.activities;
        let (attrs, title, description) = Self::header(SectionKind::Activities, text, language, "py-12 sm:py-16");

        let cards = text
            .items
            .iter()
            .map(|item| Card {
                classes: join_classes([
                    "bg-white p-4 sm:p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300 border-t-4 border-red-700",
                    card_arabic_classes(language),
                ]),
                marker: None,
                title: Heading::new(&item.title, HeadingLevel::H3, "text-lg sm:text-xl font-semibold mb-2 sm:mb-3 text-gray-800", language),
                description: Text::paragraph(&item.description, "text-gray-600", language),
            })
            .collect();

        Self {
            attrs,
            title,
            description,
            grid_classes: join_classes([
                grid_classes(snapshot.direction, 4).container.as_str(),
                grid_arabic_classes(language),
            ]),
            cards,
        }
    }

    /// Vision grid: two columns of numbered cards
    pub fn vision(snapshot: &LanguageSnapshot) -> Self {
        let language = snapshot.language;
        let table = rtl_classes(snapshot.direction);
        let text = &snapshot.bundle.vision;
        let (attrs, title, description) = Self::header(SectionKind::Vision, text, language, "py-16 bg-gray-50");

        let cards = text
            .items
            .iter()
            .zip(1u8..)
            .map(|(item, number)| Card {
                classes: join_classes([
                    "bg-white p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300 flex",
                    table.flex_direction,
                    flex_arabic_classes(language),
                    card_arabic_classes(language),
                ]),
                marker: Some(Marker {
                    text: format_number(f64::from(number), language),
                    classes: join_classes([
                        "flex-shrink-0 w-12 h-12 bg-red-700 rounded-full flex items-center justify-center text-white font-bold text-xl",
                        table.margin_end,
                    ]),
                }),
                title: Heading::new(&item.title, HeadingLevel::H3, "text-xl font-semibold mb-2 text-gray-800", language),
                description: Text::paragraph(&item.description, "text-gray-600", language),
            })
            .collect();

        Self {
            attrs,
            title,
            description,
            grid_classes: join_classes([
                grid_classes(snapshot.direction, 2).container.as_str(),
                grid_arabic_classes(language),
            ]),
            cards,
        }
    }
}

/// One gallery entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventItem {
    /// Photo or clip
    pub media: Media,
    /// Caption under the media
    pub caption: Text,
}

/// Events gallery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsSection {
    /// Root element attributes
    #[serde(flatten)]
    pub attrs: SectionAttrs,
    /// Section heading
    pub title: Heading,
    /// Introductory paragraph
    pub description: Text,
    /// Classes of the card grid
    pub grid_classes: String,
    /// Gallery entries in display order
    pub items: Vec<EventItem>,
}

impl EventsSection {
    /// Events gallery for the snapshot's language
    pub fn build(snapshot: &LanguageSnapshot) -> Self {
        let language = snapshot.language;
        let EventsText { title, description, items } = &snapshot.bundle.events;

        let items = items
            .iter()
            .zip(EVENT_MEDIA)
            .map(|(item, (kind, src))| EventItem {
                media: Media {
                    kind,
                    src,
                    alt: item.caption.clone(),
                },
                caption: Text::paragraph(&item.caption, "text-gray-600", language),
            })
            .collect();

        Self {
            attrs: SectionAttrs::new(SectionKind::Events, language, "py-16 bg-gray-50"),
            title: Heading::new(title, HeadingLevel::H2, "text-3xl font-bold mb-4 text-center text-gray-800", language),
            description: Text::paragraph(description, "text-lg text-center mb-12 max-w-3xl mx-auto", language),
            grid_classes: join_classes([
                grid_classes(snapshot.direction, 3).container.as_str(),
                grid_arabic_classes(language),
            ]),
            items,
        }
    }
}

/// President biography
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresidentSection {
    /// Root element attributes
    #[serde(flatten)]
    pub attrs: SectionAttrs,
    /// Portrait and text row
    pub layout_classes: String,
    /// Photo of the president
    pub portrait: Media,
    /// Section heading
    pub title: Heading,
    /// Biography paragraph
    pub bio: Text,
    /// Countries represented
    pub flags: Vec<Flag>,
}

impl PresidentSection {
    /// President section for the snapshot's language
    pub fn build(snapshot: &LanguageSnapshot) -> Self {
        let language = snapshot.language;
        let PresidentText { title, bio } = &snapshot.bundle.president;

        Self {
            attrs: SectionAttrs::new(SectionKind::President, language, "py-16 bg-gray-50"),
            layout_classes: rewrite_classes("flex flex-col md:flex-row items-center md:space-x-8", language),
            portrait: Media::image(PRESIDENT_PORTRAIT_SRC, title.as_str()),
            title: Heading::new(title, HeadingLevel::H2, "text-3xl font-bold mb-6 text-gray-800 md:text-left", language),
            bio: Text::paragraph(bio, "text-lg text-gray-700 leading-relaxed mb-6", language),
            flags: PRESIDENT_FLAGS.to_vec(),
        }
    }
}

/// One labelled form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// `name` attribute of the input
    pub name: &'static str,
    /// Visible label
    pub label: String,
    /// Placeholder text
    pub placeholder: String,
    /// Rendered as a `<textarea>`
    pub multiline: bool,
    /// Label classes
    pub label_classes: String,
    /// Input classes
    pub input_classes: String,
}

/// Outbound social profile link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Profile address
    pub url: String,
    /// Visible label
    pub label: &'static str,
    /// Icon spacing toward the label
    pub icon_classes: String,
}

impl SocialLink {
    /// Link to `url` with its icon spaced toward the label
    pub fn new(url: &str, language: Language) -> Self {
        Self {
            url: url.to_string(),
            label: SOCIAL_LABEL,
            icon_classes: rewrite_classes("mr-2", language),
        }
    }
}

/// Contact form and social link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSection {
    /// Root element attributes
    #[serde(flatten)]
    pub attrs: SectionAttrs,
    /// Section heading
    pub title: Heading,
    /// Name, email and message inputs
    pub fields: Vec<FormField>,
    /// Submit button label
    pub submit: String,
    /// Shown after a successful submission
    pub success: String,
    /// Shown after a failed submission
    pub error: String,
    /// Heading above the social link
    pub follow_us: Heading,
    /// Link to the club's social profile
    pub social: SocialLink,
    /// Illustration
    pub image: Media,
}

impl ContactSection {
    /// Contact section for the snapshot's language
    pub fn build(snapshot: &LanguageSnapshot, social_url: &str) -> Self {
        let language = snapshot.language;
        let text: &ContactText = &snapshot.bundle.contact;
        let classes = form_classes(snapshot.direction, false);

        let fields = [
            ("name", &text.name, &text.placeholders.name, false),
            ("email", &text.email, &text.placeholders.email, false),
            ("message", &text.message, &text.placeholders.message, true),
        ]
        .into_iter()
        .map(|(name, label, placeholder, multiline)| FormField {
            name,
            label: label.clone(),
            placeholder: placeholder.clone(),
            multiline,
            label_classes: classes.label.clone(),
            input_classes: classes.input.clone(),
        })
        .collect();

        Self {
            attrs: SectionAttrs::new(SectionKind::Contact, language, "py-12 sm:py-16"),
            title: Heading::new(&text.title, HeadingLevel::H2, "text-2xl sm:text-3xl font-bold mb-8 sm:mb-12 text-center text-gray-800", language),
            fields,
            submit: text.submit.clone(),
            success: text.success.clone(),
            error: text.error.clone(),
            follow_us: Heading::new(&text.follow_us, HeadingLevel::H3, "text-xl font-semibold mb-4", language),
            social: SocialLink::new(social_url, language),
            image: Media::image(CONTACT_IMAGE_SRC, "Karate training"),
        }
    }
}

/// Page footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterSection {
    /// `dir` attribute
    pub dir: Direction,
    /// `lang` attribute
    pub lang: Language,
    /// Tailwind classes after direction rewriting
    pub classes: String,
    /// Club name and year
    pub copyright: String,
    /// Link to the club's social profile
    pub social: SocialLink,
}

impl FooterSection {
    /// Footer with the club title and `year`
    pub fn build(snapshot: &LanguageSnapshot, year: i32, social_url: &str) -> Self {
        let language = snapshot.language;
        Self {
            dir: snapshot.direction,
            lang: language,
            classes: rewrite_classes("flex flex-col md:flex-row justify-between items-center", language),
            copyright: format!("{} © {}", snapshot.bundle.header.title, year),
            social: SocialLink::new(social_url, language),
        }
    }
}
