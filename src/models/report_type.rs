use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The four report layouts the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Regular,
    Night,
    Phone,
    Summary,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Regular => "regular",
            ReportType::Night => "night",
            ReportType::Phone => "phone",
            ReportType::Summary => "summary",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportType::Regular => "Regular working hours",
            ReportType::Night => "Night duty hours",
            ReportType::Phone => "Phone standby and call-in hours",
            ReportType::Summary => "Summary report",
        }
    }
}
