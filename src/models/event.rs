use super::tag::TagSet;
use crate::core::classify::classify;
use crate::utils::time::datetime_serde;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A scheduled entry as held by the event store.
///
/// Events are never edited in place: the store only adds and removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(with = "datetime_serde")]
    pub start: NaiveDateTime,
    /// For day-off markers this is not a meaningful end time.
    #[serde(with = "datetime_serde")]
    pub end: NaiveDateTime,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Event data before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: String,
}

pub fn default_color() -> String {
    "#4F46E5".to_string()
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            color: color.into(),
        }
    }

    pub fn from_new(id: String, ev: NewEvent) -> Self {
        Self {
            id,
            title: ev.title,
            start: ev.start,
            end: ev.end,
            color: ev.color,
        }
    }

    pub fn tags(&self) -> TagSet {
        classify(&self.title)
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%d.%m.%Y %H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%d.%m.%Y %H:%M").to_string()
    }

    pub fn date_str(&self) -> String {
        self.start.format("%d.%m.%Y").to_string()
    }
}
