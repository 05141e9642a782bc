// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Interpret a report cell as a date or timestamp, returning the
/// Excel serial and its number format.
///
/// `HH:MM` durations are left alone: they may exceed 24 hours.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%d.%m.%Y %H:%M") {
        return Some(("dd.mm.yyyy hh:mm", naive_datetime_to_excel_serial(&dt)?));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%d.%m.%Y") {
        let dt = d.and_time(chrono::NaiveTime::MIN);
        return Some(("dd.mm.yyyy", naive_datetime_to_excel_serial(&dt)?));
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(chrono::NaiveTime::MIN);

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_and_dates_become_serials() {
        let (fmt, serial) = parse_to_excel_date("01.01.2024 12:00").unwrap();
        assert_eq!(fmt, "dd.mm.yyyy hh:mm");
        assert_eq!(serial, 45292.5);

        let (fmt, serial) = parse_to_excel_date("01.01.2024").unwrap();
        assert_eq!(fmt, "dd.mm.yyyy");
        assert_eq!(serial, 45292.0);
    }

    #[test]
    fn durations_and_labels_stay_text() {
        assert!(parse_to_excel_date("31:15").is_none());
        assert!(parse_to_excel_date("paid day off").is_none());
    }
}
