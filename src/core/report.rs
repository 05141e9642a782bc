//! Report engine: pure functions from an event snapshot to report tables.

use crate::core::calculator::duration::{adjusted_standby_minutes, event_minutes};
use crate::core::calculator::pay::{monetary_value, round2};
use crate::core::range::ReportRange;
use crate::core::settings::ReportSettings;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::report::{Category, ReportResult, ReportRow, Section, Summary, SummaryRow};
use crate::models::report_type::ReportType;
use crate::models::tag::{DayOff, Tag};
use crate::utils::time::format_minutes;
use tracing::{debug, warn};

pub const REGULAR_TITLE: &str = "Regular working hours";
pub const NIGHT_TITLE: &str = "Night duty hours";
pub const STANDBY_TITLE: &str = "Phone standby hours";
pub const CALL_IN_TITLE: &str = "Call-in hours";

/// Build the requested report for the events starting inside `range`.
pub fn generate_report(
    events: &[Event],
    report_type: ReportType,
    range: &ReportRange,
    settings: &ReportSettings,
) -> ReportResult {
    let selected = filter_range(events, range);
    debug!(
        report = report_type.as_str(),
        total = events.len(),
        in_range = selected.len(),
        "generating report"
    );

    match report_type {
        ReportType::Regular => ReportResult::Regular(regular_section(&selected, settings)),
        ReportType::Night => ReportResult::Night(night_section(&selected, settings)),
        ReportType::Phone => {
            let (standby, call_in) = phone_sections(&selected, settings);
            ReportResult::Phone { standby, call_in }
        }
        ReportType::Summary => ReportResult::Summary(summary(&selected, settings)),
    }
}

/// Same as [`generate_report`] with `YYYY-MM-DD` bounds.
pub fn generate_report_str(
    events: &[Event],
    report_type: ReportType,
    range_start: &str,
    range_end: &str,
    settings: &ReportSettings,
) -> AppResult<ReportResult> {
    let range = ReportRange::parse(range_start, range_end)?;
    Ok(generate_report(events, report_type, &range, settings))
}

/// Events starting inside `range`, ordered by start. Ties keep input order.
pub fn filter_range<'a>(events: &'a [Event], range: &ReportRange) -> Vec<&'a Event> {
    let mut out: Vec<&Event> = events.iter().filter(|e| range.contains(&e.start)).collect();
    out.sort_by_key(|e| e.start);
    out
}

/// Events carrying `tag`, optionally skipping day-off markers.
fn select<'a>(events: &[&'a Event], tag: Tag, exclude_day_off: bool) -> Vec<&'a Event> {
    events
        .iter()
        .copied()
        .filter(|e| {
            let tags = e.tags();
            tags.contains(tag) && !(exclude_day_off && tags.is_day_off())
        })
        .collect()
}

fn regular_events<'a>(events: &[&'a Event]) -> Vec<&'a Event> {
    events
        .iter()
        .copied()
        .filter(|e| {
            let tags = e.tags();
            tags.contains(Tag::Regular) || tags.is_day_off()
        })
        .collect()
}

fn night_events<'a>(events: &[&'a Event], settings: &ReportSettings) -> Vec<&'a Event> {
    select(events, Tag::Night, settings.policy.exclude_day_off_from_night)
}

fn standby_and_call_in<'a>(
    events: &[&'a Event],
    exclude: bool,
) -> (Vec<&'a Event>, Vec<&'a Event>) {
    (
        select(events, Tag::Phone, exclude),
        select(events, Tag::CallIn, exclude),
    )
}

/// Minutes a regular-section event contributes.
fn regular_minutes(ev: &Event, settings: &ReportSettings) -> i64 {
    match ev.tags().day_off() {
        Some(DayOff::Paid) => settings.paid_day_off_minutes,
        Some(DayOff::Unpaid) => 0,
        None => event_minutes(ev),
    }
}

fn timed_row(index: usize, ev: &Event, minutes: i64) -> ReportRow {
    if minutes < 0 {
        warn!(
            id = %ev.id,
            title = %ev.title,
            minutes,
            "event has a negative duration"
        );
    }

    ReportRow {
        index,
        start: ev.start_str(),
        end: ev.end_str(),
        duration: format_minutes(minutes),
        minutes,
        day_off: None,
    }
}

fn day_off_row(index: usize, ev: &Event, kind: DayOff, settings: &ReportSettings) -> ReportRow {
    let (label, minutes) = match kind {
        DayOff::Unpaid => (settings.unpaid_day_off_label.clone(), 0),
        DayOff::Paid => (
            settings.paid_day_off_label.clone(),
            settings.paid_day_off_minutes,
        ),
    };

    ReportRow {
        index,
        start: ev.date_str(),
        end: label,
        duration: format_minutes(minutes),
        minutes,
        day_off: Some(kind),
    }
}

fn section(title: &str, rows: Vec<ReportRow>) -> Section {
    let total_minutes: i64 = rows.iter().map(|r| r.minutes).sum();
    debug!(section = title, rows = rows.len(), total_minutes, "section built");

    Section {
        title: title.to_string(),
        rows,
        total_minutes,
        total: format_minutes(total_minutes),
    }
}

/// Section of rows with plain elapsed durations.
fn elapsed_section(title: &str, events: &[&Event]) -> Section {
    let rows = events
        .iter()
        .enumerate()
        .map(|(i, ev)| timed_row(i + 1, ev, event_minutes(ev)))
        .collect();
    section(title, rows)
}

pub fn regular_section(events: &[&Event], settings: &ReportSettings) -> Section {
    let rows = regular_events(events)
        .into_iter()
        .enumerate()
        .map(|(i, ev)| match ev.tags().day_off() {
            Some(kind) => day_off_row(i + 1, ev, kind, settings),
            None => timed_row(i + 1, ev, event_minutes(ev)),
        })
        .collect();
    section(REGULAR_TITLE, rows)
}

pub fn night_section(events: &[&Event], settings: &ReportSettings) -> Section {
    elapsed_section(NIGHT_TITLE, &night_events(events, settings))
}

/// Standby section (overlap-adjusted) and call-in section.
pub fn phone_sections(events: &[&Event], settings: &ReportSettings) -> (Section, Section) {
    let (standby, call_ins) =
        standby_and_call_in(events, settings.policy.exclude_day_off_from_phone);

    let rows = standby
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let minutes = adjusted_standby_minutes(t, call_ins.iter().copied());
            timed_row(i + 1, t, minutes)
        })
        .collect();

    (
        section(STANDBY_TITLE, rows),
        elapsed_section(CALL_IN_TITLE, &call_ins),
    )
}

pub fn summary(events: &[&Event], settings: &ReportSettings) -> Summary {
    let regular: i64 = if settings.policy.summary_regular_includes_day_off {
        regular_events(events)
            .into_iter()
            .map(|e| regular_minutes(e, settings))
            .sum()
    } else {
        select(events, Tag::Regular, false)
            .into_iter()
            .map(event_minutes)
            .sum()
    };

    let night: i64 = night_events(events, settings)
        .into_iter()
        .map(event_minutes)
        .sum();

    let (standby, call_ins) =
        standby_and_call_in(events, settings.policy.exclude_day_off_from_summary_phone);
    let phone: i64 = standby
        .iter()
        .map(|t| adjusted_standby_minutes(t, call_ins.iter().copied()))
        .sum();
    let call_in: i64 = call_ins.iter().copied().map(event_minutes).sum();

    let rates = &settings.rates;
    let rows: Vec<SummaryRow> = Category::ALL
        .into_iter()
        .map(|category| {
            let (total_minutes, rate) = match category {
                Category::Regular => (regular, rates.regular),
                Category::Night => (night, rates.night),
                Category::Phone => (phone, rates.phone),
                Category::CallIn => (call_in, rates.call_in),
            };
            SummaryRow {
                category,
                total_minutes,
                total: format_minutes(total_minutes),
                rate,
                value: monetary_value(total_minutes, rate),
            }
        })
        .collect();

    let grand_total = round2(rows.iter().map(|r| r.value).sum());
    debug!(grand_total, "summary built");

    Summary { rows, grand_total }
}
