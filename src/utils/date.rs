use crate::errors::{AppResult, RangeError};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// "Today" for this run: the `--today` override when given, the local date otherwise.
pub fn resolve_today(override_date: Option<&str>) -> AppResult<NaiveDate> {
    match override_date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            RangeError::InvalidDate {
                input: s.to_string(),
                reason: "Expected YYYY-MM-DD".to_string(),
            }
            .into()
        }),
        None => Ok(today()),
    }
}
