//! # Ashbal Site
//!
//! Page model of the Ashbal Karate club site in English, French and Arabic.
//!
//! This crate ties the language context from `ashbal-i18n` to the
//! direction-aware presentation tokens of `ashbal-rtl`:
//!
//! - [`sections`]: header, hero, activities, vision, events, president,
//!   contact and footer view models
//! - [`selector`]: the language drop-down
//! - [`contact`]: the contact form and its simulated submission
//! - [`page`]: the assembled page
//! - [`app`]: configuration-driven wiring of all of the above
//!
//! ```rust
//! use ashbal_common::{Direction, Language};
//! use ashbal_config::Config;
//! use ashbal_i18n::DocumentRoot;
//! use ashbal_site::Site;
//!
//! let root = DocumentRoot::new();
//! let site = Site::new(Config::default(), Some(Language::En), root.clone()).unwrap();
//!
//! site.selector().select("ar").unwrap();
//! assert_eq!(root.dir(), Direction::Rtl);
//! assert_eq!(site.page().dir, Direction::Rtl);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod contact;
pub mod error;
pub mod page;
pub mod sections;
pub mod selector;

pub use app::Site;
pub use contact::{ContactFields, ContactForm, ContactTimings, SubmissionHandle, SubmissionStatus};
pub use error::{SiteError, SiteResult};
pub use page::{Page, PageOptions};
pub use selector::{language_options, LanguageOption, LanguageSelector, SelectorView, SELECTOR_ID};
