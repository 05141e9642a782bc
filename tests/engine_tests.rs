use chrono::NaiveDateTime;
use rtimesheet::models::event::Event;
use rtimesheet::models::report::{Category, ReportResult};
use rtimesheet::models::report_type::ReportType;
use rtimesheet::{ReportSettings, generate_report_str};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").expect("timestamp")
}

fn month() -> Vec<Event> {
    vec![
        Event::new("1", "N", at("2024-03-01T08:00"), at("2024-03-01T15:35"), "#1"),
        Event::new("2", "D", at("2024-03-01T15:35"), at("2024-03-02T08:00"), "#2"),
        Event::new("3", "P", at("2024-03-04T00:00"), at("2024-03-04T00:00"), "#3"),
        Event::new("4", "T", at("2024-03-05T15:35"), at("2024-03-06T08:00"), "#4"),
        Event::new("5", "W", at("2024-03-05T23:00"), at("2024-03-06T01:30"), "#5"),
        Event::new("6", "U", at("2024-03-07T00:00"), at("2024-03-07T00:00"), "#6"),
        Event::new("7", "N", at("2024-04-01T08:00"), at("2024-04-01T15:35"), "#7"),
    ]
}

#[test]
fn test_month_regular_section() {
    let report = generate_report_str(
        &month(),
        ReportType::Regular,
        "2024-03-01",
        "2024-03-31",
        &ReportSettings::default(),
    )
    .expect("report");

    let ReportResult::Regular(section) = report else {
        panic!("expected regular report");
    };
    assert_eq!(section.rows.len(), 3);
    // 07:35 + 07:00 + 00:00
    assert_eq!(section.total, "14:35");
}

#[test]
fn test_month_summary() {
    let report = generate_report_str(
        &month(),
        ReportType::Summary,
        "2024-03-01",
        "2024-03-31",
        &ReportSettings::default(),
    )
    .expect("report");

    let ReportResult::Summary(summary) = report else {
        panic!("expected summary report");
    };

    let regular = summary.row(Category::Regular).expect("regular");
    assert_eq!(regular.total, "07:35");
    assert_eq!(regular.value, 1213.33);

    let night = summary.row(Category::Night).expect("night");
    assert_eq!(night.total, "16:25");
    assert_eq!(night.value, 2626.67);

    let phone = summary.row(Category::Phone).expect("phone");
    // 16:25 standby minus 2:30 call-in
    assert_eq!(phone.total, "13:55");
    assert_eq!(phone.value, 695.83);

    let call_in = summary.row(Category::CallIn).expect("call-in");
    assert_eq!(call_in.total, "02:30");
    assert_eq!(call_in.value, 400.0);

    assert_eq!(summary.grand_total, 4935.83);
}

#[test]
fn test_invalid_dates_are_rejected() {
    let err = generate_report_str(
        &month(),
        ReportType::Night,
        "2024-02-30",
        "2024-03-31",
        &ReportSettings::default(),
    );
    assert!(err.is_err());
}
