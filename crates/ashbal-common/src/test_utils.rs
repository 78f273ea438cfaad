//! Test utilities shared by the workspace crates.

use crate::Language;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Sample strings in each script, used by detection tests.
pub mod text_fixtures {
    /// Arabic-only greeting.
    pub const ARABIC: &str = "مرحبا بكم";
    /// Latin-only greeting.
    pub const LATIN: &str = "Hello World";
    /// Arabic and Latin in one string.
    pub const MIXED: &str = "مرحبا Hello";
    /// Digits and punctuation only.
    pub const NEUTRAL: &str = "2025 - 123!";
}

/// Property-based testing strategies.
#[cfg(any(test, feature = "proptest"))]
pub mod property_testing {
    use super::Language;
    use proptest::prelude::*;

    /// Strategy over every supported language.
    pub fn language_strategy() -> impl Strategy<Value = Language> {
        prop_oneof![Just(Language::En), Just(Language::Fr), Just(Language::Ar)]
    }

    /// Strategy for strings made of ASCII letters, digits and spaces.
    pub fn latin_text_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z][a-zA-Z0-9 ]{0,40}".prop_map(|s| s.to_string())
    }

    /// Strategy for strings made of characters from the basic Arabic block.
    pub fn arabic_text_strategy() -> impl Strategy<Value = String> {
        r"[ء-ي][ء-ي ]{0,40}".prop_map(|s| s.to_string())
    }
}
