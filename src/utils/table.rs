//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

fn pad(cell: &str, width: usize, right_align: bool) -> String {
    // display width, not byte length: labels may contain emoji or CJK text
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell)));
    if right_align {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| pad(&col.header, *w, col.right_align))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, w))| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    pad(cell, *w, col.right_align)
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}
