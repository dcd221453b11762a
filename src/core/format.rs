use chrono::NaiveDate;

/// Render a date the way the dashboard expects it in `startDate` / `endDate`.
/// The calendar date is written as-is; no timezone conversion happens.
pub fn format_for_wire(date: NaiveDate, end_of_day: bool) -> String {
    let time = if end_of_day { "23:59:59" } else { "00:00:00" };
    format!("{}T{}Z", date.format("%Y-%m-%d"), time)
}
