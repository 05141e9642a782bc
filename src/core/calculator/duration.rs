//! Duration arithmetic shared by every report section.
//!
//! None of these helpers clamp: inverted intervals give negative minutes and
//! over-deduction can push a standby shift below zero.

use crate::models::event::Event;
use chrono::NaiveDateTime;

/// Whole minutes from `start` to `end`, truncated toward zero.
pub fn elapsed_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

pub fn event_minutes(ev: &Event) -> i64 {
    elapsed_minutes(ev.start, ev.end)
}

/// Length of the intersection of two intervals, 0 when they are disjoint.
pub fn overlap_minutes(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> i64 {
    let lo = a_start.max(b_start);
    let hi = a_end.min(b_end);
    elapsed_minutes(lo, hi).max(0)
}

/// Standby minutes after removing the time spent on call-in shifts.
///
/// Every overlapping call-in is deducted, so overlapping call-ins are counted
/// twice.
pub fn adjusted_standby_minutes<'a, I>(standby: &Event, call_ins: I) -> i64
where
    I: IntoIterator<Item = &'a Event>,
{
    let deducted: i64 = call_ins
        .into_iter()
        .map(|w| overlap_minutes(standby.start, standby.end, w.start, w.end))
        .sum();
    event_minutes(standby) - deducted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    fn ev(title: &str, start: &str, end: &str) -> Event {
        Event::new(title, title, at(start), at(end), "#000")
    }

    #[test]
    fn elapsed_spans_midnight_and_goes_negative() {
        assert_eq!(elapsed_minutes(at("2024-01-01T22:00"), at("2024-01-02T06:00")), 480);
        assert_eq!(elapsed_minutes(at("2024-01-01T16:00"), at("2024-01-01T08:00")), -480);
    }

    #[test]
    fn overlap_of_disjoint_and_touching_intervals_is_zero() {
        let o = overlap_minutes(
            at("2024-01-01T08:00"),
            at("2024-01-01T10:00"),
            at("2024-01-01T10:00"),
            at("2024-01-01T12:00"),
        );
        assert_eq!(o, 0);

        let o = overlap_minutes(
            at("2024-01-01T08:00"),
            at("2024-01-01T10:00"),
            at("2024-01-01T11:00"),
            at("2024-01-01T12:00"),
        );
        assert_eq!(o, 0);
    }

    #[test]
    fn overlap_partial() {
        let o = overlap_minutes(
            at("2024-01-01T08:00"),
            at("2024-01-01T10:00"),
            at("2024-01-01T09:15"),
            at("2024-01-01T12:00"),
        );
        assert_eq!(o, 45);
    }

    #[test]
    fn contained_call_in_is_deducted() {
        let t = ev("T", "2024-01-01T22:00", "2024-01-02T06:00");
        let w = ev("W", "2024-01-02T02:00", "2024-01-02T03:00");
        assert_eq!(adjusted_standby_minutes(&t, [&w]), 480 - 60);
    }

    #[test]
    fn every_call_in_is_deducted() {
        let t = ev("T", "2024-01-01T22:00", "2024-01-02T06:00");
        let w1 = ev("W", "2024-01-01T23:00", "2024-01-01T23:30");
        let w2 = ev("W", "2024-01-02T04:00", "2024-01-02T04:30");
        assert_eq!(adjusted_standby_minutes(&t, [&w1, &w2]), 480 - 60);
    }

    #[test]
    fn overlapping_call_ins_can_drive_standby_negative() {
        let t = ev("T", "2024-01-01T22:00", "2024-01-01T23:00");
        let w1 = ev("W", "2024-01-01T21:00", "2024-01-02T00:00");
        let w2 = ev("W", "2024-01-01T22:00", "2024-01-01T23:00");
        assert_eq!(adjusted_standby_minutes(&t, [&w1, &w2]), -60);
    }
}
