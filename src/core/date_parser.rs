//! Single-date parsing.
//!
//! Numeric triplets are tried first:
//! - `YYYY-MM-DD` / `YYYY/MM/DD` / `YYYY.MM.DD`
//! - `MM-DD-YYYY` / `MM/DD/YYYY` / `MM.DD.YYYY`
//!
//! A two-digit-first triplet is always read month first, whatever the separator.
//! Day-first input such as `15/01/2025` or `15.01.2025` is rejected with "Invalid month" instead of being guessed.
//! Anything else goes through a small list of textual formats
//! ("Jan 15, 2025", "15 January 2025", RFC 3339 timestamps, ...).

use super::{MAX_YEAR, MIN_YEAR};
use crate::errors::RangeError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    YearMonthDay,
    MonthDayYear,
}

static NUMERIC_FORMATS: LazyLock<Vec<(Regex, FieldOrder)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"^(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})$").expect("valid regex"),
            FieldOrder::YearMonthDay,
        ),
        (
            Regex::new(r"^(\d{1,2})[-/.](\d{1,2})[-/.](\d{4})$").expect("valid regex"),
            FieldOrder::MonthDayYear,
        ),
    ]
});

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").expect("valid regex"));

const TEXTUAL_DATE_FORMATS: [&str; 6] = [
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%a %B %d %Y",
    "%A, %B %d, %Y",
];

const TEXTUAL_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse one date token into a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, RangeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RangeError::EmptyInput);
    }

    for (re, order) in NUMERIC_FORMATS.iter() {
        if let Some(caps) = re.captures(trimmed) {
            debug!("date {trimmed:?} matched {order:?}");
            let field = |i: usize| caps[i].parse::<u32>();
            let (a, b, c) = match (field(1), field(2), field(3)) {
                (Ok(a), Ok(b), Ok(c)) => (a, b, c),
                _ => return Err(RangeError::invalid_date(trimmed, "Invalid date")),
            };
            let (year, month, day) = match order {
                FieldOrder::YearMonthDay => (a, b, c),
                FieldOrder::MonthDayYear => (c, a, b),
            };
            return build_date(trimmed, year as i32, month, day);
        }
    }

    parse_textual(trimmed)
}

fn build_date(input: &str, year: i32, month: u32, day: u32) -> Result<NaiveDate, RangeError> {
    if !(1..=12).contains(&month) {
        return Err(RangeError::invalid_date(input, "Invalid month"));
    }
    if !(1..=31).contains(&day) {
        return Err(RangeError::invalid_date(input, "Invalid day"));
    }
    check_year(input, year)?;

    // from_ymd_opt rejects Feb 30, Apr 31 and Feb 29 outside leap years.
    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|d| d.year() == year && d.month() == month && d.day() == day)
        .ok_or_else(|| RangeError::invalid_date(input, "Invalid date"))
}

fn check_year(input: &str, year: i32) -> Result<(), RangeError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(RangeError::invalid_date(
            input,
            format!("Year must be between {MIN_YEAR} and {MAX_YEAR}"),
        ))
    }
}

fn parse_textual(input: &str) -> Result<NaiveDate, RangeError> {
    let cleaned = ORDINAL_SUFFIX.replace_all(input, "$1");
    let cleaned = cleaned.trim();

    let parsed = TEXTUAL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cleaned, fmt).ok())
        .or_else(|| {
            TEXTUAL_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(cleaned, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(cleaned)
                .ok()
                .map(|dt| dt.date_naive())
        });

    match parsed {
        Some(date) => {
            debug!("date {input:?} matched a textual format");
            check_year(input, date.year())?;
            Ok(date)
        }
        None => Err(RangeError::invalid_date(input, "Unable to parse date")),
    }
}
