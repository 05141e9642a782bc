use crate::export::model::ReportTable;
use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Page being filled, with its vertical cursor.
struct PageCursor {
    content: Content,
    y: f32,
    page: usize,
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ids assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(&win_ansi_bytes(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray + 0.02);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 5.0, font_size, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header and content, scaled to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = (cell.chars().count() as f32 * 6.2).max(widths[i]);
                widths[i] = w;
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    fn start_page(&mut self, title: &str, page: usize) -> PageCursor {
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, page);
        PageCursor {
            content,
            y: self.page_h - self.margin - 30.0,
            page,
        }
    }

    /// Close the current page and open the next one if fewer than `needed`
    /// points are left.
    fn ensure_space(&mut self, cur: PageCursor, title: &str, needed: f32) -> PageCursor {
        if cur.y - needed >= self.margin {
            return cur;
        }
        let next = cur.page + 1;
        self.finalize_page(cur.content);
        self.start_page(title, next)
    }

    /// Multi-table report: free text lines, then every table with its own
    /// heading. Tables flow across pages; the column header is repeated on
    /// each page a table spans.
    pub fn write_report(&mut self, title: &str, header_lines: &[String], tables: &[ReportTable]) {
        let mut cur = self.start_page(title, 1);

        for line in header_lines {
            cur = self.ensure_space(cur, title, self.row_h);
            self.draw_text(&mut cur.content, self.margin, cur.y, self.font_size, line);
            cur.y -= self.font_size + 4.0;
        }
        if !header_lines.is_empty() {
            cur.y -= self.row_h;
        }

        for table in tables {
            let col_widths = self.compute_col_widths(&table.headers, &table.rows);
            let width: f32 = col_widths.iter().sum();
            let header_row: Vec<String> = table.headers.iter().map(|s| s.to_string()).collect();

            // heading + column header + at least one row
            cur = self.ensure_space(cur, title, 3.0 * self.row_h);
            self.draw_text(
                &mut cur.content,
                self.margin,
                cur.y,
                self.header_font_size,
                &table.title,
            );
            cur.y -= self.row_h + 4.0;

            self.fill_band(&mut cur.content, cur.y, width, 0.85);
            self.draw_row(
                &mut cur.content,
                cur.y,
                &col_widths,
                &header_row,
                self.header_font_size,
            );
            cur.y -= self.row_h;

            for (i, row) in table.rows.iter().enumerate() {
                if cur.y - self.row_h < self.margin {
                    cur = self.ensure_space(cur, title, 2.0 * self.row_h);
                    self.fill_band(&mut cur.content, cur.y, width, 0.85);
                    self.draw_row(
                        &mut cur.content,
                        cur.y,
                        &col_widths,
                        &header_row,
                        self.header_font_size,
                    );
                    cur.y -= self.row_h;
                }

                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut cur.content, cur.y, width, 0.96);
                }

                self.draw_row(&mut cur.content, cur.y, &col_widths, row, self.font_size);
                cur.y -= self.row_h;
            }

            cur.y -= self.row_h;
        }

        self.finalize_page(cur.content);
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Finished document bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Encode text for the built-in Helvetica font (WinAnsiEncoding).
///
/// Latin-1 maps one to one; letters outside the code page lose their
/// diacritic (`ł` -> `l`) and anything else becomes `?`.
fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            'Š' => 0x8A,
            'š' => 0x9A,
            'Ž' => 0x8E,
            'ž' => 0x9E,
            _ => fold_diacritic(c),
        })
        .collect()
}

fn fold_diacritic(c: char) -> u8 {
    match c {
        'ą' | 'ă' | 'ā' => b'a',
        'Ą' | 'Ă' | 'Ā' => b'A',
        'ć' | 'č' => b'c',
        'Ć' | 'Č' => b'C',
        'ď' => b'd',
        'Ď' => b'D',
        'ę' | 'ě' | 'ē' => b'e',
        'Ę' | 'Ě' | 'Ē' => b'E',
        'ł' | 'ľ' | 'ĺ' => b'l',
        'Ł' | 'Ľ' | 'Ĺ' => b'L',
        'ń' | 'ň' => b'n',
        'Ń' | 'Ň' => b'N',
        'ő' => b'o',
        'Ő' => b'O',
        'ř' => b'r',
        'Ř' => b'R',
        'ś' | 'ş' => b's',
        'Ś' | 'Ş' => b'S',
        'ť' | 'ţ' => b't',
        'Ť' | 'Ţ' => b'T',
        'ů' | 'ű' => b'u',
        'Ů' | 'Ű' => b'U',
        'ź' | 'ż' => b'z',
        'Ź' | 'Ż' => b'Z',
        _ => b'?',
    }
}
