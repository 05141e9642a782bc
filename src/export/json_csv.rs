// src/export/json_csv.rs

use crate::core::range::ReportRange;
use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportDocument, report_to_tables};
use crate::export::notify_export_success;
use crate::models::report::ReportResult;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(
    report: &ReportResult,
    range: &ReportRange,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = ReportDocument::new(report, range);
    let json_data = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: every table is written as a title record, a header record and its rows.
pub(crate) fn export_csv(report: &ReportResult, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    for table in report_to_tables(report) {
        wtr.write_record([table.title.as_str()])
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        wtr.write_record(&table.headers)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        for row in &table.rows {
            wtr.write_record(row)
                .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        }
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
