//! Validation utilities and regex patterns

use ashbal_common::Language;
use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for absolute http(s) links without whitespace
pub static HTTP_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("Invalid http url regex pattern")
});

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate a supported language code (en, fr or ar)
pub fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if Language::from_code(code).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_language"))
    }
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url_regex() {
        assert!(HTTP_URL_REGEX.is_match("https://web.facebook.com/profile.php?id=100081279337283&sk=about"));
        assert!(HTTP_URL_REGEX.is_match("http://example.com"));

        assert!(!HTTP_URL_REGEX.is_match("ftp://example.com"));
        assert!(!HTTP_URL_REGEX.is_match("https://"));
        assert!(!HTTP_URL_REGEX.is_match("https://exa mple.com"));
        assert!(!HTTP_URL_REGEX.is_match(""));
    }

    #[test]
    fn test_validate_log_level() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(validate_log_level(level).is_ok());
        }
        assert!(validate_log_level("verbose").is_err());
        assert!(validate_log_level("INFO").is_err());
    }

    #[test]
    fn test_validate_language_code() {
        assert!(validate_language_code("en").is_ok());
        assert!(validate_language_code("fr").is_ok());
        assert!(validate_language_code("ar").is_ok());
        assert!(validate_language_code("de").is_err());
        assert!(validate_language_code("").is_err());
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("/var/log/ashbal.log").is_ok());
        assert!(validate_file_path("C:\\logs\\ashbal.log").is_ok());

        assert!(validate_file_path("").is_err());
        assert!(validate_file_path("file|name.log").is_err());
        assert!(validate_file_path("file?name.log").is_err());
    }
}
