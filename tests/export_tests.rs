mod common;
use common::{init_store_with_data, rts, setup_test_store, temp_out};
use std::fs;

#[test]
fn test_export_regular_csv() {
    let store = setup_test_store("export_regular_csv");
    init_store_with_data(&store);

    let out = temp_out("export_regular_csv", "csv");

    rts()
        .args([
            "--store",
            &store,
            "export",
            "regular",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Regular working hours"));
    assert!(content.contains("01.01.2024 08:00"));
    assert!(content.contains("Total hours:,08:00"));
}

#[test]
fn test_export_summary_json() {
    let store = setup_test_store("export_summary_json");
    init_store_with_data(&store);

    let out = temp_out("export_summary_json", "json");

    rts()
        .args([
            "--store",
            &store,
            "export",
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--format",
            "json",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["report_type"], "summary");
    assert_eq!(doc["range_start"], "2024-01-01");
    assert_eq!(doc["report"]["grand_total"], 2560.0);
}

#[test]
fn test_export_night_pdf() {
    let store = setup_test_store("export_night_pdf");
    init_store_with_data(&store);

    let out = temp_out("export_night_pdf", "pdf");

    rts()
        .args([
            "--store",
            &store,
            "export",
            "night",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_phone_xlsx() {
    let store = setup_test_store("export_phone_xlsx");
    init_store_with_data(&store);

    let out = temp_out("export_phone_xlsx", "xlsx");

    rts()
        .args([
            "--store",
            &store,
            "export",
            "phone",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--format",
            "xlsx",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_relative_path_fails() {
    let store = setup_test_store("export_relative_path_fails");
    init_store_with_data(&store);

    rts()
        .args([
            "--store",
            &store,
            "export",
            "regular",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_existing_file_needs_force() {
    let store = setup_test_store("export_existing_file_needs_force");
    init_store_with_data(&store);

    let out = temp_out("export_existing_file_needs_force", "csv");
    fs::write(&out, "old").expect("seed file");

    let args = [
        "--store",
        &store,
        "export",
        "regular",
        "--from",
        "2024-01-01",
        "--to",
        "2024-01-02",
        "--format",
        "csv",
        "--file",
        &out,
    ];

    rts().args(args).write_stdin("n\n").assert().failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    rts().args(args).arg("--force").assert().success();
    assert!(fs::read_to_string(&out).expect("read").contains("Total hours:"));
}
