//! Date range resolution plus the logic behind each CLI command.

pub mod apply;
pub mod config;
pub mod date_parser;
pub mod filters;
pub mod format;
pub mod log;
pub mod presets;
pub mod range_parser;
pub mod transfer;
pub mod window;

pub use date_parser::parse_date;
pub use format::format_for_wire;
pub use presets::calculate_preset_range;
pub use range_parser::parse_range_expression;
pub use window::find_valid_28_day_window;

use crate::errors::RangeError;
use crate::models::{DateRange, Selection};
use chrono::{Datelike, Days, NaiveDate};

/// Days between "today" and the most recent day the dashboard has data for.
pub const INGESTION_LAG_DAYS: u64 = 2;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Last day with data available, relative to `today`.
pub fn lag_adjusted_today(today: NaiveDate) -> Result<NaiveDate, RangeError> {
    today
        .checked_sub_days(Days::new(INGESTION_LAG_DAYS))
        .ok_or_else(|| RangeError::InternalInvariant(format!("cannot step back from {today}")))
}

/// Inclusive `days`-long window ending at the lag-adjusted today.
pub(crate) fn trailing_window(today: NaiveDate, days: u32) -> Result<DateRange, RangeError> {
    let end = lag_adjusted_today(today)?;
    let start = end
        .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .filter(|d| d.year() >= MIN_YEAR)
        .ok_or_else(|| {
            RangeError::invalid_date(
                &format!("last {days} days"),
                format!("Year must be between {MIN_YEAR} and {MAX_YEAR}"),
            )
        })?;
    DateRange::new(start, end)
}

/// Resolve whatever the user picked into concrete dates.
pub fn resolve_selection(selection: &Selection, today: NaiveDate) -> Result<DateRange, RangeError> {
    match selection {
        Selection::Preset(preset) => calculate_preset_range(*preset, today),
        Selection::Custom(expr) => parse_range_expression(expr, today),
    }
}
