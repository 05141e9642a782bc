use serde::{Deserialize, Serialize};

/// Which buckets drop titles that also carry a day-off tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationPolicy {
    #[serde(default = "default_true")]
    pub exclude_day_off_from_phone: bool,
    #[serde(default)]
    pub exclude_day_off_from_night: bool,
    /// Same exclusion for the summary's phone and call-in buckets.
    #[serde(default)]
    pub exclude_day_off_from_summary_phone: bool,
    /// Count `u`/`p` credits in the summary's regular bucket.
    #[serde(default)]
    pub summary_regular_includes_day_off: bool,
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self {
            exclude_day_off_from_phone: true,
            exclude_day_off_from_night: false,
            exclude_day_off_from_summary_phone: false,
            summary_regular_includes_day_off: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Hourly rates per pay category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub regular: f64,
    pub night: f64,
    pub phone: f64,
    pub call_in: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            regular: 160.0,
            night: 160.0,
            phone: 50.0,
            call_in: 160.0,
        }
    }
}

/// Everything the engine needs besides the events and the range.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub policy: ClassificationPolicy,
    pub rates: Rates,
    pub paid_day_off_minutes: i64,
    pub unpaid_day_off_label: String,
    pub paid_day_off_label: String,
}

pub const DEFAULT_PAID_DAY_OFF_MINUTES: i64 = 7 * 60;

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            policy: ClassificationPolicy::default(),
            rates: Rates::default(),
            paid_day_off_minutes: DEFAULT_PAID_DAY_OFF_MINUTES,
            unpaid_day_off_label: "unpaid day off".to_string(),
            paid_day_off_label: "paid day off".to_string(),
        }
    }
}
