// src/export/logic.rs

use crate::core::range::ReportRange;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::report_to_tables;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::export::xlsx::export_xlsx;
use crate::models::report::ReportResult;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::io;
use std::path::Path;

/// High level export of a generated report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is overwritten only with `force` or after confirmation
    /// - `header_lines` are printed above the tables (PDF and XLSX)
    pub fn export(
        report: &ReportResult,
        range: &ReportRange,
        format: ExportFormat,
        file: &str,
        force: bool,
        header_lines: &[String],
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        let path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let title = build_title(report, range);

        match format {
            ExportFormat::Csv => export_csv(report, path)?,
            ExportFormat::Json => export_json(report, range, path)?,
            ExportFormat::Xlsx => {
                export_xlsx(&report_to_tables(report), &title, header_lines, path)?
            }
            ExportFormat::Pdf => export_pdf(report, path, &title, header_lines)?,
        }

        Ok(())
    }
}

/// Document title, e.g. `Night duty hours 01.01.2024 - 31.01.2024`.
pub(crate) fn build_title(report: &ReportResult, range: &ReportRange) -> String {
    format!("{} {}", report.report_type().title(), range.label())
}

fn export_pdf(
    report: &ReportResult,
    path: &Path,
    title: &str,
    header_lines: &[String],
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_report(title, header_lines, &report_to_tables(report));

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
