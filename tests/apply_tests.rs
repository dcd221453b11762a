use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{czf, init_db, init_db_with_filters, setup_test_db};

const URL: &str = "https://app.cloudzero.com/explorer?view=costs&partitions=Cloud+Provider";

#[test]
fn test_apply_preset_patches_the_url() {
    let db_path = setup_test_db("apply_preset");
    init_db(&db_path);

    czf()
        .args([
            "--db",
            &db_path,
            "--today",
            "2025-03-15",
            "apply",
            "--url",
            URL,
            "-p",
            "last-7-days",
        ])
        .assert()
        .success()
        .stdout(contains("view=costs"))
        .stdout(contains("partitions=Cloud%20Provider"))
        .stdout(contains("dateRange=Custom"))
        .stdout(contains("startDate=2025-03-07T00%3A00%3A00Z"))
        .stdout(contains("endDate=2025-03-13T23%3A59%3A59Z"))
        .stdout(contains("showRightFlyout=filters"));
}

#[test]
fn test_apply_saved_filter_with_override() {
    let db_path = setup_test_db("apply_saved");
    init_db_with_filters(&db_path);

    czf()
        .args([
            "--db",
            &db_path,
            "--today",
            "2025-04-02",
            "apply",
            "--url",
            URL,
            "--filter",
            "q1",
            "--cost-type",
            "billed_cost",
        ])
        .assert()
        .success()
        .stdout(contains("Using saved filter \"Q1\""))
        .stdout(contains("granularity=monthly"))
        .stdout(contains("activeCostType=billed_cost"))
        .stdout(contains("startDate=2025-01-01T00%3A00%3A00Z"))
        .stdout(contains("endDate=2025-03-31T23%3A59%3A59Z"));
}

#[test]
fn test_apply_default_filter_from_settings() {
    let db_path = setup_test_db("apply_default");
    init_db_with_filters(&db_path);

    czf()
        .args(["--db", &db_path, "settings", "--set", "defaultFilter=weekly"])
        .assert()
        .success();

    czf()
        .args(["--db", &db_path, "--today", "2025-03-15", "apply", "--url", URL])
        .assert()
        .success()
        .stdout(contains("startDate=2025-03-07T00%3A00%3A00Z"));
}

#[test]
fn test_apply_without_anything_to_apply() {
    let db_path = setup_test_db("apply_nothing");
    init_db(&db_path);

    czf()
        .args(["--db", &db_path, "apply", "--url", URL])
        .assert()
        .failure()
        .stderr(contains("Please enter a date range"));
}

#[test]
fn test_apply_refuses_foreign_pages() {
    let db_path = setup_test_db("apply_foreign");
    init_db(&db_path);

    czf()
        .args([
            "--db",
            &db_path,
            "apply",
            "--url",
            "https://example.com/costs",
            "last 7 days",
        ])
        .assert()
        .failure()
        .stderr(contains("Not a dashboard page"));
}

#[test]
fn test_notifications_can_be_silenced() {
    let db_path = setup_test_db("apply_quiet");
    init_db(&db_path);

    czf()
        .args(["--db", &db_path, "settings", "--set", "show_notifications=false"])
        .assert()
        .success();

    czf()
        .args(["--db", &db_path, "apply", "--url", URL, "last 10 days"])
        .assert()
        .success()
        .stdout(contains("dateRange=Custom").and(contains("Filter applied").not()));
}
