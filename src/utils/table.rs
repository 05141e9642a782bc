//! Table rendering utilities for CLI outputs.

use crate::export::ReportTable;
use crate::utils::colors::{bold, colorize_duration};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Columns sized to the widest header or cell.
    pub fn from_report_table(t: &ReportTable) -> Self {
        let mut columns: Vec<Column> = t
            .headers
            .iter()
            .map(|h| Column {
                header: h.to_string(),
                width: UnicodeWidthStr::width(*h),
            })
            .collect();

        for row in &t.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(col) = columns.get_mut(i) {
                    col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }

        let mut table = Table::new(columns);
        for row in &t.rows {
            table.add_row(row.clone());
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Plain text rendering.
    pub fn render(&self) -> String {
        self.render_with(|_, cell| cell.to_string())
    }

    /// Rendering with highlighted durations (last column) and a bold total row.
    pub fn render_colored(&self) -> String {
        let last_col = self.columns.len().saturating_sub(1);
        let last_row = self.rows.len().saturating_sub(1);
        self.render_with(|(r, c), cell| {
            if r == Some(last_row) {
                bold(cell)
            } else if r.is_some() && c == last_col {
                colorize_duration(cell)
            } else {
                cell.to_string()
            }
        })
    }

    fn render_with<F>(&self, paint: F) -> String
    where
        F: Fn((Option<usize>, usize), &str) -> String,
    {
        let mut out = String::new();

        // Header
        for (c, col) in self.columns.iter().enumerate() {
            out.push_str(&paint((None, c), &pad(&col.header, col.width)));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for (r, row) in self.rows.iter().enumerate() {
            for (c, col) in self.columns.iter().enumerate() {
                let cell = row.get(c).map(String::as_str).unwrap_or("");
                out.push_str(&paint((Some(r), c), &pad(cell, col.width)));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Left-align to a display width (format! pads by chars, not columns).
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_widest_cell() {
        let t = ReportTable {
            title: "x".into(),
            headers: vec!["No.", "End"],
            rows: vec![vec!["1".into(), "dzień wolny płatny".into()]],
        };
        let table = Table::from_report_table(&t);
        assert_eq!(table.columns[1].width, 18);

        let out = table.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "No. End                ");
        assert_eq!(lines[1], "1   dzień wolny płatny ");
    }
}
