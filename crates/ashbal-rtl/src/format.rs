//! Locale-aware number, currency and date formatting.
//!
//! Formatting goes through ICU4X compiled data for the regional tag of each
//! [`Language`] (`en-US`, `fr-FR`, `ar-SA`). Every function is total: if ICU
//! cannot build a formatter or the value cannot be represented, a plain
//! Western rendering is returned instead.

use ashbal_common::Language;
use chrono::{Datelike, NaiveDate};
use icu::calendar::Date;
use icu::datetime::{fieldsets, DateTimeFormatter};
use icu::decimal::input::Decimal;
use icu::decimal::DecimalFormatter;
use icu::locale::{locale, Locale};
use tracing::debug;

/// Largest scaled magnitude handed to ICU as an `i64`.
const MAX_SCALED: f64 = 9.0e18;

/// Fraction digit bounds for [`format_number_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberOptions {
    /// Minimum number of fraction digits shown.
    pub min_fraction_digits: u8,
    /// Maximum number of fraction digits shown; the value is rounded to it.
    pub max_fraction_digits: u8,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 3,
        }
    }
}

impl NumberOptions {
    /// Exactly `digits` fraction digits.
    #[must_use]
    pub const fn fixed(digits: u8) -> Self {
        Self {
            min_fraction_digits: digits,
            max_fraction_digits: digits,
        }
    }
}

fn icu_locale(language: Language) -> Locale {
    match language {
        Language::En => locale!("en-US"),
        Language::Fr => locale!("fr-FR"),
        Language::Ar => locale!("ar-SA"),
    }
}

/// Format `value` with grouping and up to three fraction digits.
#[must_use]
pub fn format_number(value: f64, language: Language) -> String {
    format_number_with(value, language, NumberOptions::default())
}

/// Format `value` with explicit fraction digit bounds.
#[must_use]
pub fn format_number_with(value: f64, language: Language, options: NumberOptions) -> String {
    let max = options.max_fraction_digits.min(9);
    let min = options.min_fraction_digits.min(max);

    let scaled = (value * 10_f64.powi(i32::from(max))).round();
    if !scaled.is_finite() || scaled.abs() >= MAX_SCALED {
        debug!(value, "Value outside the decimal range, using plain formatting");
        return format!("{value}");
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut digits = scaled as i64;
    let mut fraction = max;
    while fraction > min && digits % 10 == 0 {
        digits /= 10;
        fraction -= 1;
    }

    let mut decimal = Decimal::from(digits);
    decimal.multiply_pow10(-i16::from(fraction));

    match DecimalFormatter::try_new(icu_locale(language).into(), Default::default()) {
        Ok(formatter) => formatter.format(&decimal).to_string(),
        Err(e) => {
            debug!(language = %language, error = %e, "Decimal formatter unavailable, grouping manually");
            group_plain(digits, fraction)
        }
    }
}

/// Western digits with `,` grouping and `.` decimal separator.
fn group_plain(digits: i64, fraction: u8) -> String {
    let raw = digits.unsigned_abs().to_string();
    let fraction = usize::from(fraction);
    let padded = format!("{raw:0>width$}", width = fraction + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - fraction);

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if digits < 0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

fn currency_symbol(currency: &str, language: Language) -> String {
    let symbol = match (currency, language) {
        ("USD", Language::En) => "$",
        ("USD", Language::Fr) => "$US",
        ("USD", Language::Ar) => "US$",
        ("EUR", _) => "€",
        ("GBP", Language::Fr) => "£GB",
        ("GBP", _) => "£",
        ("SAR", Language::Ar) => "ر.س.\u{200F}",
        ("MAD", Language::Ar) => "د.م.\u{200F}",
        _ => return currency.to_string(),
    };
    symbol.to_string()
}

/// Format a monetary amount with two fraction digits.
///
/// `currency` is an ISO 4217 code; unknown codes are printed as-is. The
/// symbol leads for English and trails (after a no-break space) for French
/// and Arabic.
#[must_use]
pub fn format_currency(amount: f64, language: Language, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let code = if code.is_empty() { "USD".to_string() } else { code };
    let symbol = currency_symbol(&code, language);
    let body = format_number_with(amount.abs(), language, NumberOptions::fixed(2));
    let sign = if amount < 0.0 { "-" } else { "" };

    match language {
        Language::En if symbol.chars().count() > 1 && symbol.is_ascii() => {
            format!("{sign}{symbol}\u{00A0}{body}")
        }
        Language::En => format!("{sign}{symbol}{body}"),
        Language::Fr | Language::Ar => format!("{sign}{body}\u{00A0}{symbol}"),
    }
}

/// Format a calendar date as year, long month name and day.
#[must_use]
pub fn format_date(date: NaiveDate, language: Language) -> String {
    let fallback = || date.format("%Y-%m-%d").to_string();

    let (Ok(month), Ok(day)) = (u8::try_from(date.month()), u8::try_from(date.day())) else {
        return fallback();
    };
    let Ok(icu_date) = Date::try_new_iso(date.year(), month, day) else {
        debug!(%date, "Date outside the ICU range, using ISO format");
        return fallback();
    };

    DateTimeFormatter::try_new(icu_locale(language).into(), fieldsets::YMD::long())
        .ok()
        .map(|f| f.format(&icu_date).to_string())
        .unwrap_or_else(fallback)
}
