//! Internationalization support for the Ashbal Karate site
//!
//! This crate provides the localized content and the language context using
//! the Fluent localization system. It includes:
//!
//! - Locale detection from the process environment
//! - Resource loading from embedded or on-disk `.ftl` files
//! - FluentBundle management with fallback to English
//! - A typed [`LocaleBundle`] schema checked at load time
//! - The [`LanguageProvider`] that owns the active language and direction
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ashbal_common::{Direction, Language};
//! use ashbal_i18n::{Catalog, DocumentRoot, LanguageProvider, MissingKeyPolicy};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(Catalog::embedded(MissingKeyPolicy::Fail)?);
//! let root = DocumentRoot::new();
//! let provider = LanguageProvider::new(catalog, Language::En, root.clone());
//!
//! provider.set_language(Language::Ar);
//! assert_eq!(root.dir(), Direction::Rtl);
//! println!("{}", provider.snapshot().bundle.header.title);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod bundle;
pub mod catalog;
pub mod context;
pub mod error;
pub mod locale;
pub mod manager;
pub mod resource;
pub mod schema;

pub use bundle::BundleManager;
pub use catalog::Catalog;
pub use context::{DocumentAttributes, DocumentRoot, LanguageProvider, LanguageSnapshot};
pub use error::{I18nError, I18nResult};
pub use locale::{detect_from_environment, detect_language, LocaleExt};
pub use manager::I18nManager;
pub use resource::{ResourceManager, ResourceSource};
pub use schema::{LocaleBundle, MissingKeyPolicy, ITEM_COUNT};

// Re-export commonly used Fluent types
pub use fluent::{FluentArgs, FluentValue};
