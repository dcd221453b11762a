//! 28-day window search for the "Last 28 Days" preset.
//!
//! Walks back one day at a time from the lag-adjusted today until the window
//! holds at least four full groups of five weekdays and four full weekends.

use super::lag_adjusted_today;
use crate::errors::RangeError;
use crate::models::DateRange;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use log::debug;

pub const WINDOW_DAYS: u64 = 28;
const REQUIRED_WEEKDAY_GROUPS: u32 = 4;
const REQUIRED_WEEKENDS: u32 = 4;
const MAX_ATTEMPTS: u32 = 60;

pub(crate) fn count_weekdays_and_weekends(start: NaiveDate, end: NaiveDate) -> (u32, u32) {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .fold((0, 0), |(weekdays, weekends), d| match d.weekday() {
            Weekday::Sat | Weekday::Sun => (weekdays, weekends + 1),
            _ => (weekdays + 1, weekends),
        })
}

fn satisfies_quota(weekdays: u32, weekends: u32) -> bool {
    weekdays / 5 >= REQUIRED_WEEKDAY_GROUPS && weekends / 2 >= REQUIRED_WEEKENDS
}

pub fn find_valid_28_day_window(today: NaiveDate) -> Result<DateRange, RangeError> {
    let mut end = lag_adjusted_today(today)?;

    for attempt in 0..MAX_ATTEMPTS {
        let start = end
            .checked_sub_days(Days::new(WINDOW_DAYS - 1))
            .ok_or_else(|| RangeError::InternalInvariant(format!("no 28-day window before {end}")))?;
        let (weekdays, weekends) = count_weekdays_and_weekends(start, end);
        debug!("window {start}..={end}: {weekdays} weekdays, {weekends} weekend days (attempt {attempt})");

        if satisfies_quota(weekdays, weekends) {
            return DateRange::new(start, end);
        }

        end = end
            .pred_opt()
            .ok_or_else(|| RangeError::InternalInvariant(format!("cannot step back from {end}")))?;
    }

    Err(RangeError::InternalInvariant(format!(
        "no valid 28-day window within {MAX_ATTEMPTS} days of {today}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn window_ends_at_lag_adjusted_today() {
        let r = find_valid_28_day_window(d(2025, 6, 20)).unwrap();
        assert_eq!(r.end(), d(2025, 6, 18));
        assert_eq!(r.start(), d(2025, 5, 22));
    }

    #[test]
    fn counts_one_full_week() {
        // 2025-06-16 is a Monday.
        assert_eq!(count_weekdays_and_weekends(d(2025, 6, 16), d(2025, 6, 22)), (5, 2));
        assert_eq!(count_weekdays_and_weekends(d(2025, 6, 21), d(2025, 6, 21)), (0, 1));
    }

    #[test]
    fn quota_rule() {
        assert!(satisfies_quota(20, 8));
        assert!(!satisfies_quota(19, 9));
        assert!(!satisfies_quota(21, 7));
    }

    #[test]
    fn holds_over_a_sliding_two_year_simulation() {
        let mut today = d(2024, 1, 1);
        let last = d(2026, 1, 31);
        while today <= last {
            let r = find_valid_28_day_window(today).unwrap();
            assert_eq!((r.end() - r.start()).num_days(), 27, "today={today}");
            let (weekdays, weekends) = count_weekdays_and_weekends(r.start(), r.end());
            assert!(weekdays >= 20, "today={today}");
            assert!(weekends >= 8, "today={today}");
            assert!(r.end() <= today - chrono::Duration::days(2));
            today = today.succ_opt().unwrap();
        }
    }
}
