//! Localized labels at the granularity of a precision.

use chrono::{DateTime, Datelike, Utc};

use gazetteer_core::models::precision::{century_of, decade_of, millennium_of};
use gazetteer_core::models::{Locale, Precision, TimePoint};

use super::parse::parse_stamp;

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Label for a raw stamp and precision code. Malformed input yields an empty string.
pub fn format_label(stamp: &str, precision_code: &str, locale: Locale) -> String {
    let Some(precision) = Precision::from_code(precision_code) else {
        return String::new();
    };
    match parse_stamp(stamp) {
        Ok(instant) => format_instant(instant, precision, locale),
        Err(_) => String::new(),
    }
}

/// Label for an instant at the given precision.
///
/// Centuries and millennia before the first render as an empty string.
pub fn format_instant(instant: DateTime<Utc>, precision: Precision, locale: Locale) -> String {
    let year = instant.year();
    let month = instant.month0() as usize;
    let day = instant.day();

    match (locale, precision) {
        (_, Precision::Millennium) => ordinal_unit(millennium_of(year), locale, "millénaire", "millennium"),
        (_, Precision::Century) => ordinal_unit(century_of(year), locale, "siècle", "century"),
        (Locale::French, Precision::Decade) => format!("décennie {}", decade_of(year)),
        (Locale::English, Precision::Decade) => format!("{}s", decade_of(year)),
        (_, Precision::Year) => year.to_string(),
        (Locale::French, Precision::Month) => format!("{} {year}", FRENCH_MONTHS[month]),
        (Locale::English, Precision::Month) => format!("{} {year}", ENGLISH_MONTHS[month]),
        (Locale::French, Precision::Day) => {
            let day = if day == 1 { "1er".to_string() } else { day.to_string() };
            format!("{day} {} {year}", FRENCH_MONTHS[month])
        }
        (Locale::English, Precision::Day) => {
            let day = if day == 1 { "1st".to_string() } else { day.to_string() };
            format!("{day} {} {year}", ENGLISH_MONTHS[month])
        }
    }
}

/// Label for a representative point, prefixed when it is an inferred approximation.
pub fn format_point(point: &TimePoint, locale: Locale) -> String {
    let label = format_instant(point.instant, point.precision, locale);
    if !point.approximate || label.is_empty() {
        return label;
    }
    match locale {
        Locale::French => format!("vers {label}"),
        Locale::English => format!("circa {label}"),
    }
}

fn ordinal_unit(n: i32, locale: Locale, french_noun: &str, english_noun: &str) -> String {
    if n < 1 {
        return String::new();
    }
    match locale {
        Locale::French => {
            let suffix = if n == 1 { "er" } else { "e" };
            format!("{n}{suffix} {french_noun}")
        }
        Locale::English => format!("{n}{} {english_noun}", english_suffix(n)),
    }
}

fn english_suffix(n: i32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
