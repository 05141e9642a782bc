use super::event::{NewEvent, default_color};
use crate::utils::time::{clock_serde, format_minutes};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reusable preset used to place events on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    pub id: String,
    pub title: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(with = "clock_serde")]
    pub start_time: NaiveTime,
    #[serde(default)]
    pub duration: String,
    #[serde(with = "clock_serde")]
    pub end_time: NaiveTime,
}

impl EventTemplate {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        color: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        let mut t = Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            start_time,
            duration: String::new(),
            end_time,
        };
        t.duration = format_minutes(t.span_minutes());
        t
    }

    /// True when the end clock time falls on the following day.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }

    pub fn span_minutes(&self) -> i64 {
        let raw = (self.end_time - self.start_time).num_minutes();
        if self.crosses_midnight() {
            raw + 24 * 60
        } else {
            raw
        }
    }

    /// Build an event on `day`; an end earlier than the start rolls to the next day.
    pub fn instantiate(&self, day: NaiveDate) -> NewEvent {
        let start = day.and_time(self.start_time);
        let end_day = if self.crosses_midnight() {
            day + Duration::days(1)
        } else {
            day
        };

        NewEvent {
            title: self.title.clone(),
            start,
            end: end_day.and_time(self.end_time),
            color: self.color.clone(),
        }
    }

    /// Quick-add lookup key: 1-based position or first letter of the title.
    pub fn matches_key(&self, index: usize, key: &str) -> bool {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        (index + 1).to_string() == key || self.title.to_lowercase().starts_with(&key)
    }

    pub fn span_str(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn instantiate_same_day() {
        let tpl = EventTemplate::new("1", "N", "#000", t(8, 0), t(15, 35));
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let ev = tpl.instantiate(day);

        assert_eq!(ev.start, day.and_time(t(8, 0)));
        assert_eq!(ev.end, day.and_time(t(15, 35)));
        assert_eq!(tpl.duration, "07:35");
    }

    #[test]
    fn instantiate_rolls_end_to_next_day() {
        let tpl = EventTemplate::new("2", "D", "#000", t(15, 35), t(8, 0));
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let ev = tpl.instantiate(day);

        let next = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(ev.end, next.and_time(t(8, 0)));
        assert_eq!(tpl.duration, "16:25");
    }

    #[test]
    fn matches_key_by_index_or_first_letter() {
        let tpl = EventTemplate::new("3", "Telefon", "#000", t(15, 35), t(8, 0));
        assert!(tpl.matches_key(1, "2"));
        assert!(tpl.matches_key(1, "t"));
        assert!(tpl.matches_key(1, "T"));
        assert!(!tpl.matches_key(1, "1"));
        assert!(!tpl.matches_key(1, ""));
    }
}
