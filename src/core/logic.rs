use crate::config::Config;
use crate::core::range::ReportRange;
use crate::core::report::generate_report;
use crate::errors::AppResult;
use crate::models::report::ReportResult;
use crate::models::report_type::ReportType;
use crate::store::EventStore;

pub struct Core;

impl Core {
    /// Load the configured store and run the engine over it.
    pub fn build_report(
        cfg: &Config,
        kind: ReportType,
        from: &str,
        to: &str,
    ) -> AppResult<(ReportResult, ReportRange)> {
        let range = ReportRange::parse(from, to)?;
        let store = EventStore::load(cfg.store_path())?;
        let report = generate_report(&store.events, kind, &range, &cfg.report_settings());
        Ok((report, range))
    }
}
