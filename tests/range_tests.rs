use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::czf;

#[test]
fn test_relative_days_are_lag_adjusted() {
    czf()
        .args(["--today", "2025-06-20", "range", "last 45 days"])
        .assert()
        .success()
        .stdout(contains("Start : 2025-05-05"))
        .stdout(contains("End   : 2025-06-18"))
        .stdout(contains("Days  : 45"));
}

#[test]
fn test_preset_by_label_and_slug() {
    for preset in ["Last 7 Days", "last-7-days"] {
        czf()
            .args(["--today", "2025-03-15", "range", "--preset", preset])
            .assert()
            .success()
            .stdout(contains("Last 7 Days"))
            .stdout(contains("startDate=2025-03-07T00:00:00Z"))
            .stdout(contains("endDate=2025-03-13T23:59:59Z"));
    }
}

#[test]
fn test_28_day_preset_is_a_full_window() {
    czf()
        .args(["--today", "2025-03-15", "range", "-p", "last-28-days"])
        .assert()
        .success()
        .stdout(contains("Days  : 28"));
}

#[test]
fn test_explicit_ranges_in_several_formats() {
    czf()
        .args(["range", "01/15/2025 through 02/28/2025"])
        .assert()
        .success()
        .stdout(contains("Start : 2025-01-15"))
        .stdout(contains("End   : 2025-02-28"));

    czf()
        .args(["range", "2025-01-15 - 2025-02-28"])
        .assert()
        .success()
        .stdout(contains("Days  : 45"));

    czf()
        .args(["range", "2024-02-29 to 2024-02-29"])
        .assert()
        .success()
        .stdout(contains("Days  : 1"));
}

#[test]
fn test_reversed_range_is_rejected() {
    czf()
        .args(["range", "2025-03-01 to 2025-02-01"])
        .assert()
        .failure()
        .stderr(contains("Start date must be before end date"));
}

#[test]
fn test_invalid_dates_report_the_side() {
    czf()
        .args(["range", "2025-02-30 to 2025-03-10"])
        .assert()
        .failure()
        .stderr(contains("start date"));

    czf()
        .args(["range", "2025-02-01 to 2025-13-01"])
        .assert()
        .failure()
        .stderr(contains("end date"));
}

#[test]
fn test_unrecognized_and_empty_input() {
    czf()
        .args(["range", "yesterday-ish"])
        .assert()
        .failure()
        .stderr(contains("Unrecognized date range"));

    czf()
        .args(["range"])
        .assert()
        .failure()
        .stderr(contains("Please enter a date range"));

    czf()
        .args(["range", "--preset", "custom"])
        .assert()
        .failure()
        .stderr(contains("Please enter a date range"));
}

#[test]
fn test_unknown_preset_is_a_usage_error() {
    czf()
        .args(["range", "--preset", "last-8-days"])
        .assert()
        .failure()
        .stderr(contains("Unknown period").or(contains("invalid value")));
}

#[test]
fn test_bad_today_override() {
    czf()
        .args(["--today", "15/03/2025", "range", "last 7 days"])
        .assert()
        .failure()
        .stderr(contains("Expected YYYY-MM-DD"));
}
