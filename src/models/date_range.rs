use crate::errors::RangeError;
use chrono::NaiveDate;
use serde::Serialize;

/// Inclusive calendar-date range. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting (never swapping) a start that falls after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_day_range_counts_one_day() {
        let r = DateRange::new(d(2025, 3, 1), d(2025, 3, 1)).unwrap();
        assert_eq!(r.days(), 1);
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let err = DateRange::new(d(2025, 2, 28), d(2025, 1, 15)).unwrap_err();
        assert!(matches!(err, RangeError::StartAfterEnd { .. }));
    }
}
