use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rtimesheet::store::EventStore;
use std::path::Path;

mod common;
use common::{init_store_with_data, rts, setup_test_store};

#[test]
fn test_template_apply_rolls_over_midnight() {
    let store = setup_test_store("template_apply_rolls_over_midnight");
    rts()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    rts()
        .args([
            "--store", &store, "template", "add", "Dyzur", "--start", "15:35", "--end", "08:00",
        ])
        .assert()
        .success()
        .stdout(contains("16:25"));

    rts()
        .args(["--store", &store, "template", "apply", "1", "2024-02-29"])
        .assert()
        .success()
        .stdout(contains("01.03.2024 08:00"));

    let loaded = EventStore::load(Path::new(&store)).expect("load store");
    assert_eq!(loaded.events.len(), 1);
    assert_eq!(loaded.events[0].title, "Dyzur");
}

#[test]
fn test_template_apply_by_letter() {
    let store = setup_test_store("template_apply_by_letter");
    rts()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    for (title, start, end) in [("N", "08:00", "15:35"), ("T", "15:35", "08:00")] {
        rts()
            .args([
                "--store", &store, "template", "add", title, "--start", start, "--end", end,
            ])
            .assert()
            .success();
    }

    rts()
        .args(["--store", &store, "template", "apply", "t", "2024-01-05"])
        .assert()
        .success();

    let loaded = EventStore::load(Path::new(&store)).expect("load store");
    assert_eq!(loaded.events[0].title, "T");
}

#[test]
fn test_unknown_template_fails() {
    let store = setup_test_store("unknown_template_fails");
    rts()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    rts()
        .args(["--store", &store, "template", "apply", "7", "2024-01-05"])
        .assert()
        .failure()
        .stderr(contains("Template not found"));
}

#[test]
fn test_delete_event() {
    let store = setup_test_store("delete_event");
    init_store_with_data(&store);

    let before = EventStore::load(Path::new(&store)).expect("load store");
    assert_eq!(before.events.len(), 2);
    let id = before.events[0].id.clone();

    rts()
        .args(["--store", &store, "del", &id, "-y"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let after = EventStore::load(Path::new(&store)).expect("load store");
    assert_eq!(after.events.len(), 1);
    assert!(after.events.iter().all(|e| e.id != id));

    rts()
        .args(["--store", &store, "del", &id, "-y"])
        .assert()
        .failure()
        .stderr(contains("Event not found"));
}

#[test]
fn test_list_period() {
    let store = setup_test_store("list_period");
    init_store_with_data(&store);

    rts()
        .args(["--store", &store, "list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("01.01.2024 08:00").and(contains("02.01.2024 06:00")));

    rts()
        .args(["--store", &store, "list", "--period", "2023"])
        .assert()
        .success()
        .stdout(contains("No events"));
}

#[test]
fn test_legacy_browser_store_is_readable() {
    let store = setup_test_store("legacy_browser_store");
    std::fs::write(
        &store,
        r##"{
  "version": 1,
  "state": {
    "events": [
      {
        "id": "1",
        "title": "N",
        "start": "2024-01-01T08:00",
        "end": "2024-01-01T16:00",
        "color": "#4F46E5"
      }
    ],
    "templates": [
      {"id": "2", "title": "N", "color": "#4F46E5"}
    ]
  }
}"##,
    )
    .expect("write store");

    let loaded = EventStore::load(Path::new(&store)).expect("load store");
    assert_eq!(loaded.events.len(), 1);
    assert_eq!(loaded.templates[0].span_str(), "09:00 - 10:00");

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
        .stdout(contains("08:00"));
}

#[test]
fn test_relative_store_is_shared_by_init_and_add() {
    let name = "relative_store_shared_rtimesheet_events.json";
    let resolved = rtimesheet::config::Config::resolve_store(name);
    std::fs::remove_file(&resolved).ok();

    rts()
        .args(["--store", name, "--test", "init"])
        .assert()
        .success();
    rts()
        .args([
            "--store",
            name,
            "add",
            "N",
            "--start",
            "2024-01-01T08:00",
            "--end",
            "2024-01-01T16:00",
        ])
        .assert()
        .success();

    let loaded = EventStore::load(&resolved).expect("load store");
    assert_eq!(loaded.events.len(), 1);

    std::fs::remove_file(&resolved).ok();
}
