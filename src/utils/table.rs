//! Fixed-width tables for the terminal views.
//!
//! Widths are display widths, so emoji and CJK cells line up. Cells longer
//! than their column are cut with `…`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    /// Right-aligned column, for numbers.
    pub fn right(header: &str, width: usize) -> Self {
        Self {
            align: Align::Right,
            ..Self::new(header, width)
        }
    }

    fn cell(&self, value: &str) -> String {
        let value = fit(value, self.width);
        let gap = " ".repeat(self.width.saturating_sub(value.width()));
        match self.align {
            Align::Left => format!("{value}{gap}"),
            Align::Right => format!("{gap}{value}"),
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();

        let mut out = self.line(&header);
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&self.line(&cells));
        }
        out
    }

    fn line(&self, cells: &[&str]) -> String {
        let joined = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| col.cell(cells.get(i).copied().unwrap_or("")))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}\n", joined.trim_end())
    }
}

/// `s` cut to at most `width` display columns.
fn fit(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
