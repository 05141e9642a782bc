//! Time utilities: parsing HH:MM and timestamps, formatting minutes, serde helpers.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, NaiveTime};

/// Timestamp layouts accepted for event start/end values.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Parse an event timestamp.
///
/// Local wall-clock values (`2024-01-01T08:00`) are taken as is; values with
/// an offset (`2024-01-01T07:00:00.000Z`) are converted to local time.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .map_err(|_| AppError::InvalidDateTime(s.to_string()))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// Render minutes as `HH:MM`; hours are not wrapped at 24 and negative
/// values keep a leading `-`.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Serde adapter for `NaiveDateTime` fields stored as `YYYY-MM-DDTHH:MM`.
pub mod datetime_serde {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_datetime(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_datetime(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for `NaiveTime` fields stored as `HH:MM`.
pub mod clock_serde {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).ok_or_else(|| de::Error::custom(format!("invalid time: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_minutes_pads_and_keeps_sign() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(420), "07:00");
        assert_eq!(format_minutes(1_505), "25:05");
        assert_eq!(format_minutes(-90), "-01:30");
    }

    #[test]
    fn parse_datetime_accepts_minute_and_second_precision() {
        let a = parse_datetime("2024-01-01T08:00").unwrap();
        let b = parse_datetime("2024-01-01T08:00:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(format_datetime(&a), "2024-01-01T08:00");
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(AppError::InvalidDateTime(_))
        ));
    }
}
