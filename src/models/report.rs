use super::report_type::ReportType;
use super::tag::DayOff;
use serde::Serialize;

/// One line of a report section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub index: usize,
    pub start: String,
    /// End timestamp, or the day-off label for day-off rows.
    pub end: String,
    pub duration: String,
    pub minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_off: Option<DayOff>,
}

/// Ordered rows plus their total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<ReportRow>,
    pub total_minutes: i64,
    pub total: String,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pay categories of the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Regular,
    Night,
    Phone,
    CallIn,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Regular,
        Category::Night,
        Category::Phone,
        Category::CallIn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Regular => "Working days",
            Category::Night => "Night duty",
            Category::Phone => "Phone standby",
            Category::CallIn => "Call-in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub category: Category,
    pub total_minutes: i64,
    pub total: String,
    pub rate: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub grand_total: f64,
}

impl Summary {
    pub fn row(&self, category: Category) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.category == category)
    }
}

/// Engine output, shaped per report type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportResult {
    Regular(Section),
    Night(Section),
    Phone { standby: Section, call_in: Section },
    Summary(Summary),
}

impl ReportResult {
    pub fn report_type(&self) -> ReportType {
        match self {
            ReportResult::Regular(_) => ReportType::Regular,
            ReportResult::Night(_) => ReportType::Night,
            ReportResult::Phone { .. } => ReportType::Phone,
            ReportResult::Summary(_) => ReportType::Summary,
        }
    }

    /// Sections in display order; empty for the summary report.
    pub fn sections(&self) -> Vec<&Section> {
        match self {
            ReportResult::Regular(s) | ReportResult::Night(s) => vec![s],
            ReportResult::Phone { standby, call_in } => vec![standby, call_in],
            ReportResult::Summary(_) => Vec::new(),
        }
    }
}
