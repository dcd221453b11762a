//! Free-form range expressions: `last N days` or `<date> <separator> <date>`.

use super::date_parser::parse_date;
use super::{MAX_YEAR, MIN_YEAR, trailing_window};
use crate::errors::RangeError;
use crate::models::DateRange;
use chrono::NaiveDate;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static RELATIVE_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^last\s+(\d+)\s+days?$").expect("valid regex"));

/// Checked in this order; the first one present anywhere in the input decides the split.
pub const RANGE_SEPARATORS: [&str; 7] = [
    " to ",
    " - ",
    " through ",
    " thru ",
    "--",
    " \u{2014} ",
    " \u{2013} ",
];

/// Resolve a whole user-entered range.
pub fn parse_range_expression(text: &str, today: NaiveDate) -> Result<DateRange, RangeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RangeError::EmptyInput);
    }

    if let Some(caps) = RELATIVE_DAYS.captures(trimmed) {
        let digits = &caps[1];
        if digits.bytes().all(|b| b == b'0') {
            return Err(RangeError::UnrecognizedFormat(trimmed.to_string()));
        }
        // Too many days to fit in u32 reaches past the calendar anyway.
        let days = digits.parse::<u32>().map_err(|_| {
            RangeError::invalid_date(
                trimmed,
                format!("Year must be between {MIN_YEAR} and {MAX_YEAR}"),
            )
        })?;
        debug!("relative range: last {days} days");
        return trailing_window(today, days);
    }

    if let Some((start_raw, end_raw)) = split_on_separator(trimmed) {
        let start = parse_date(start_raw).map_err(|e| RangeError::InvalidRange {
            side: "start",
            source: Box::new(e),
        })?;
        let end = parse_date(end_raw).map_err(|e| RangeError::InvalidRange {
            side: "end",
            source: Box::new(e),
        })?;
        return DateRange::new(start, end);
    }

    Err(RangeError::UnrecognizedFormat(trimmed.to_string()))
}

fn split_on_separator(text: &str) -> Option<(&str, &str)> {
    // ASCII lowercasing keeps byte offsets valid for slicing `text`.
    let lowered = text.to_ascii_lowercase();
    RANGE_SEPARATORS.iter().find_map(|sep| {
        lowered.find(sep).map(|idx| {
            debug!("range separator {sep:?} at byte {idx}");
            (text[..idx].trim(), text[idx + sep.len()..].trim())
        })
    })
}
