use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Report window `[start 00:00, end 00:00]`, both bounds inclusive.
///
/// The end bound is the *start* of `end`'s day: no end-of-day adjustment is
/// applied, callers pick `end` accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` bounds.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        let s = parse_date(start.trim()).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
        let e = parse_date(end.trim()).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;
        Self::new(s, e)
    }

    pub fn lower(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    pub fn upper(&self) -> NaiveDateTime {
        self.end.and_time(NaiveTime::MIN)
    }

    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        *instant >= self.lower() && *instant <= self.upper()
    }

    /// Human label, e.g. `01.01.2024 - 31.01.2024`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d.%m.%Y"),
            self.end.format("%d.%m.%Y")
        )
    }
}
