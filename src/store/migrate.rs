//! Upgrades of the on-disk store document.

use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use tracing::info;

pub const CURRENT_VERSION: u32 = 2;

/// Normalize a raw document to the current layout.
///
/// Accepts both the plain layout `{version, events, templates}` and the
/// wrapped layout `{version, state: {events, templates}}` written by the
/// browser build.
pub fn upgrade(mut doc: Value) -> AppResult<Value> {
    let raw_version = doc
        .get("version")
        .and_then(Value::as_u64)
        .unwrap_or(u64::from(CURRENT_VERSION));
    let version = u32::try_from(raw_version).map_err(|_| AppError::StoreVersion(raw_version))?;

    if let Some(state) = doc.get_mut("state").map(Value::take) {
        doc = state;
    }

    let obj = doc
        .as_object_mut()
        .ok_or_else(|| AppError::Json(serde::de::Error::custom("store root must be an object")))?;

    match version {
        1 => {
            migrate_v1_templates(obj);
            info!("event store migrated from version 1 to {}", CURRENT_VERSION);
        }
        CURRENT_VERSION => {}
        other => return Err(AppError::StoreVersion(u64::from(other))),
    }

    obj.insert("version".to_string(), Value::from(CURRENT_VERSION));
    Ok(doc)
}

/// Version 1 templates had no clock times: give them 09:00-10:00.
fn migrate_v1_templates(obj: &mut Map<String, Value>) {
    if let Some(Value::Array(templates)) = obj.get_mut("templates") {
        for t in templates.iter_mut() {
            if let Some(t) = t.as_object_mut() {
                t.insert("startTime".to_string(), Value::from("09:00"));
                t.insert("duration".to_string(), Value::from("01:00"));
                t.insert("endTime".to_string(), Value::from("10:00"));
            }
        }
    }
}
