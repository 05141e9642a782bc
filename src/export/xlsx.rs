// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::ReportTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: tables stacked on one sheet, styled headers and auto column widths.
pub(crate) fn export_xlsx(
    tables: &[ReportTable],
    title: &str,
    header_lines: &[String],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let title_format = Format::new().set_bold().set_font_size(13);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let total_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9D9D9))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut row: u32 = 0;

    for line in header_lines {
        worksheet.write(row, 0, line.as_str()).map_err(to_app_error)?;
        row += 1;
    }
    if !header_lines.is_empty() {
        row += 1;
    }

    worksheet
        .write_with_format(row, 0, title, &title_format)
        .map_err(to_app_error)?;
    row += 2;

    let columns = tables.iter().map(|t| t.headers.len()).max().unwrap_or(0);
    let mut col_widths: Vec<usize> = vec![0; columns];

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for table in tables {
        worksheet
            .write_with_format(row, 0, table.title.as_str(), &title_format)
            .map_err(to_app_error)?;
        row += 1;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet
                .write_with_format(row, col as u16, *header, &header_format)
                .map_err(to_app_error)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(*header));
        }
        row += 1;

        let last = table.rows.len().saturating_sub(1);
        for (row_index, values) in table.rows.iter().enumerate() {
            let band_color = if row_index % 2 == 0 { band1 } else { band2 };

            for (col, value) in values.iter().enumerate() {
                let v = value.as_str();

                if row_index == last {
                    worksheet
                        .write_with_format(row, col as u16, v, &total_format)
                        .map_err(to_app_error)?;
                } else {
                    write_xlsx_cell(worksheet, row, col as u16, v, band_color)?;
                }

                col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
            }
            row += 1;
        }

        row += 1;
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell, turning dates/timestamps and plain numbers into typed values.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = Format::new()
            .set_num_format(num_format)
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let fmt = Format::new()
            .set_align(FormatAlign::Right)
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
