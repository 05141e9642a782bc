// src/export/model.rs

use crate::core::range::ReportRange;
use crate::models::report::{ReportResult, Section, Summary};
use crate::models::report_type::ReportType;
use serde::Serialize;

/// Plain table of strings, shared by every output format.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// JSON document: the report plus the window it covers.
#[derive(Serialize, Debug)]
pub(crate) struct ReportDocument<'a> {
    pub report_type: ReportType,
    pub range_start: String,
    pub range_end: String,
    pub report: &'a ReportResult,
}

impl<'a> ReportDocument<'a> {
    pub fn new(report: &'a ReportResult, range: &ReportRange) -> Self {
        Self {
            report_type: report.report_type(),
            range_start: range.start.format("%Y-%m-%d").to_string(),
            range_end: range.end.format("%Y-%m-%d").to_string(),
            report,
        }
    }
}

pub(crate) fn section_headers() -> Vec<&'static str> {
    vec!["No.", "Start", "End", "Hours"]
}

pub(crate) fn summary_headers() -> Vec<&'static str> {
    vec!["Type", "Hours", "Rate", "Value"]
}

pub(crate) fn section_to_table(section: &Section) -> ReportTable {
    let mut rows: Vec<Vec<String>> = section
        .rows
        .iter()
        .map(|r| {
            vec![
                r.index.to_string(),
                r.start.clone(),
                r.end.clone(),
                r.duration.clone(),
            ]
        })
        .collect();

    rows.push(vec![
        String::new(),
        String::new(),
        "Total hours:".to_string(),
        section.total.clone(),
    ]);

    ReportTable {
        title: section.title.clone(),
        headers: section_headers(),
        rows,
    }
}

pub(crate) fn summary_to_table(summary: &Summary) -> ReportTable {
    let mut rows: Vec<Vec<String>> = summary
        .rows
        .iter()
        .map(|r| {
            vec![
                r.category.label().to_string(),
                r.total.clone(),
                format_rate(r.rate),
                format!("{:.2}", r.value),
            ]
        })
        .collect();

    rows.push(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", summary.grand_total),
    ]);

    ReportTable {
        title: ReportType::Summary.title().to_string(),
        headers: summary_headers(),
        rows,
    }
}

/// Rates are shown without decimals when they are whole numbers.
fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{rate:.0}")
    } else {
        format!("{rate:.2}")
    }
}

/// Tables in display order.
pub fn report_to_tables(report: &ReportResult) -> Vec<ReportTable> {
    match report {
        ReportResult::Summary(s) => vec![summary_to_table(s)],
        other => other.sections().into_iter().map(section_to_table).collect(),
    }
}
