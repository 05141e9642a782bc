use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_event, init_store_with_data, rts, setup_test_store};

#[test]
fn test_regular_report_total() {
    let store = setup_test_store("regular_report_total");
    init_store_with_data(&store);

    rts()
        .args([
            "--store",
            &store,
            "report",
            "regular",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--plain",
        ])
        .assert()
        .success()
        .stdout(contains("01.01.2024 08:00"))
        .stdout(contains("Total hours:"))
        .stdout(contains("08:00"));
}

#[test]
fn test_summary_report_json() {
    let store = setup_test_store("summary_report_json");
    init_store_with_data(&store);

    rts()
        .args([
            "--store",
            &store,
            "report",
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"grand_total\": 2560.0"))
        .stdout(contains("\"value\": 1280.0"));
}

#[test]
fn test_phone_report_deducts_call_in() {
    let store = setup_test_store("phone_report_deducts_call_in");
    init_store_with_data(&store);
    add_event(&store, "T", "2024-01-01T22:00", "2024-01-02T06:00");
    add_event(&store, "W", "2024-01-02T02:00", "2024-01-02T03:00");

    rts()
        .args([
            "--store",
            &store,
            "report",
            "phone",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-03",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"total\": \"07:00\""))
        .stdout(contains("\"total\": \"01:00\""));
}

#[test]
fn test_summary_counts_day_off_tagged_standby() {
    let store = setup_test_store("summary_counts_day_off_tagged_standby");
    rts()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();
    add_event(&store, "TP", "2024-01-01T08:00", "2024-01-01T16:00");
    add_event(&store, "WU", "2024-01-01T20:00", "2024-01-01T21:00");

    rts()
        .args([
            "--store",
            &store,
            "report",
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"grand_total\": 560.0"));
}

#[test]
fn test_day_off_rows_show_labels() {
    let store = setup_test_store("day_off_rows_show_labels");
    init_store_with_data(&store);

    rts()
        .args(["--store", &store, "add", "P", "--start", "2024-01-03T00:00"])
        .assert()
        .success();
    rts()
        .args(["--store", &store, "add", "U", "--start", "2024-01-04T00:00"])
        .assert()
        .success();

    rts()
        .args([
            "--store",
            &store,
            "report",
            "regular",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
            "--plain",
        ])
        .assert()
        .success()
        .stdout(contains("paid day off"))
        .stdout(contains("unpaid day off"))
        .stdout(contains("15:00"));
}

#[test]
fn test_malformed_range_fails() {
    let store = setup_test_store("malformed_range_fails");
    init_store_with_data(&store);

    rts()
        .args([
            "--store",
            &store,
            "report",
            "night",
            "--from",
            "2024/01/01",
            "--to",
            "2024-01-02",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_empty_range_reports_zero() {
    let store = setup_test_store("empty_range_reports_zero");
    init_store_with_data(&store);

    rts()
        .args([
            "--store",
            &store,
            "report",
            "night",
            "--from",
            "2025-01-01",
            "--to",
            "2025-01-31",
            "--plain",
        ])
        .assert()
        .success()
        .stdout(contains("00:00").and(contains("01.01.2024").not()));
}
