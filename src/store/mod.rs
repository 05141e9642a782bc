//! JSON file holding the canonical event and template lists.

pub mod migrate;

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, NewEvent};
use crate::models::template::EventTemplate;
use crate::utils::date::{first_day_of_month, last_day_of_month};
use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStore {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub templates: Vec<EventTemplate>,
}

#[derive(Serialize)]
struct StoreDocument<'a> {
    version: u32,
    events: &'a [Event],
    templates: &'a [EventTemplate],
}

impl EventStore {
    /// Read the store; a missing file is an empty store.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "event store not found, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: serde_json::Value = serde_json::from_str(&content)?;
        let store: EventStore = serde_json::from_value(migrate::upgrade(raw)?)?;
        debug!(
            path = %path.display(),
            events = store.events.len(),
            templates = store.templates.len(),
            "event store loaded"
        );
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let doc = StoreDocument {
            version: migrate::CURRENT_VERSION,
            events: &self.events,
            templates: &self.templates,
        };
        fs::write(path, serde_json::to_string_pretty(&doc)?)?;
        debug!(path = %path.display(), "event store saved");
        Ok(())
    }

    /// Millisecond timestamp id, bumped until unique.
    fn next_id(&self) -> String {
        let mut n = Local::now().timestamp_millis();
        loop {
            let id = n.to_string();
            let taken = self.events.iter().any(|e| e.id == id)
                || self.templates.iter().any(|t| t.id == id);
            if !taken {
                return id;
            }
            n += 1;
        }
    }

    pub fn add_event(&mut self, ev: NewEvent) -> Event {
        let event = Event::from_new(self.next_id(), ev);
        self.events.push(event.clone());
        event
    }

    pub fn remove_event(&mut self, id: &str) -> AppResult<Event> {
        let pos = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::EventNotFound(id.to_string()))?;
        Ok(self.events.remove(pos))
    }

    pub fn add_template(
        &mut self,
        title: &str,
        color: &str,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<EventTemplate> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidTemplate("title must not be empty".into()));
        }

        let tpl = EventTemplate::new(self.next_id(), title, color, start_time, end_time);
        self.templates.push(tpl.clone());
        Ok(tpl)
    }

    pub fn remove_template(&mut self, id: &str) -> AppResult<EventTemplate> {
        let pos = self
            .templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::TemplateNotFound(id.to_string()))?;
        Ok(self.templates.remove(pos))
    }

    /// Template by id, 1-based position or first letter of its title.
    pub fn find_template(&self, key: &str) -> AppResult<&EventTemplate> {
        if let Some(t) = self.templates.iter().find(|t| t.id == key) {
            return Ok(t);
        }
        self.templates
            .iter()
            .enumerate()
            .find(|(i, t)| t.matches_key(*i, key))
            .map(|(_, t)| t)
            .ok_or_else(|| AppError::TemplateNotFound(key.to_string()))
    }

    /// Place a new event from a template on `day`.
    pub fn apply_template(&mut self, key: &str, day: NaiveDate) -> AppResult<Event> {
        let new_event = self.find_template(key)?.instantiate(day);
        Ok(self.add_event(new_event))
    }

    /// Events whose start date lies in `[first, last]`, ordered by start.
    pub fn events_between(&self, first: NaiveDate, last: NaiveDate) -> Vec<&Event> {
        let mut out: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.date() >= first && e.date() <= last)
            .collect();
        out.sort_by_key(|e| e.start);
        out
    }

    pub fn events_on(&self, day: NaiveDate) -> Vec<&Event> {
        self.events_between(day, day)
    }

    pub fn events_in_month(&self, day: NaiveDate) -> AppResult<Vec<&Event>> {
        let last = last_day_of_month(day.year(), day.month())?;
        Ok(self.events_between(first_day_of_month(day), last))
    }
}
