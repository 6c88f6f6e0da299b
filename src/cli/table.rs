//! Plain-text table rendering for the record matrix.
//!
//! Records are laid out one per column with the record fields as rows,
//! mirroring the admin surface this CLI fronts. Width math is ANSI-aware
//! because dirty scratch cells are colorized.

use colored::Colorize;

use crate::cli::output::current_preferences;
use crate::editor::TableEditor;
use crate::registry::{Field, RecordStore};

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Configuration for a single rendered column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment: Alignment::Left,
        }
    }
}

/// A table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub show_headers: bool,
    pub padding: usize,
}

impl Table {
    /// Computes content widths from headers, rows, and column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    fn render_header(&self, widths: &[usize]) -> String {
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_row(&header, widths)
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell, widths[idx], column.alignment, self.padding)
            })
            .collect();
        rendered.join(" ").trim_end().to_string()
    }

    /// Renders the full table, optionally including headers and a rule.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut out = String::new();

        if self.show_headers {
            out.push_str(&self.render_header(&widths));
            out.push('\n');
            out.push_str(&horizontal_rule(&widths, self.padding));
            if !self.rows.is_empty() {
                out.push('\n');
            }
        }

        for (idx, row) in self.rows.iter().enumerate() {
            out.push_str(&self.render_row(row, &widths));
            if idx < self.rows.len() - 1 {
                out.push('\n');
            }
        }

        out
    }
}

/// Width of `text` as it will appear on screen, skipping ANSI sequences.
pub fn visible_width(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut width = 0;

    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            idx += 1;
            if idx < bytes.len() && bytes[idx] == b'[' {
                idx += 1;
                while idx < bytes.len() {
                    let byte = bytes[idx];
                    idx += 1;
                    if (0x40..=0x7E).contains(&byte) {
                        break;
                    }
                }
                continue;
            }
        }

        if let Some(ch) = text[idx..].chars().next() {
            width += 1;
            idx += ch.len_utf8();
        } else {
            break;
        }
    }

    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 1 {
        return "…".to_string();
    }

    let target = width - 1;
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut visible = 0;
    let mut result = String::new();
    let mut saw_ansi = false;

    while idx < bytes.len() && visible < target {
        if bytes[idx] == 0x1b {
            let start = idx;
            idx += 1;
            if idx < bytes.len() && bytes[idx] == b'[' {
                idx += 1;
                while idx < bytes.len() {
                    let byte = bytes[idx];
                    idx += 1;
                    if (0x40..=0x7E).contains(&byte) {
                        break;
                    }
                }
            }
            result.push_str(&text[start..idx]);
            saw_ansi = true;
            continue;
        }

        if let Some(ch) = text[idx..].chars().next() {
            let len = ch.len_utf8();
            result.push_str(&text[idx..idx + len]);
            visible += 1;
            idx += len;
        } else {
            break;
        }
    }

    result.push('…');
    if saw_ansi {
        result.push_str("\u{1b}[0m");
    }
    result
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));

    let (left_spaces, right_spaces) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
    };

    let mut cell = String::new();
    cell.push_str(&" ".repeat(padding));
    cell.push_str(&" ".repeat(left_spaces));
    cell.push_str(&fitted);
    cell.push_str(&" ".repeat(right_spaces));
    cell.push_str(&" ".repeat(padding));
    cell
}

/// Builds a horizontal rule spanning the width of the table.
pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(total_width)
}

/// Builds the field-by-row / record-by-column matrix for display.
///
/// The active edit column shows scratch values; cells whose scratch value
/// differs from the stored original are flagged with a trailing `*` and,
/// unless plain mode is on, highlighted.
pub fn record_matrix(store: &RecordStore, editor: &TableEditor) -> Table {
    let plain = current_preferences().plain_mode;
    let mut columns = vec![TableColumn::left("Field")];
    for idx in 0..store.len() {
        let mut header = format!("User #{idx}");
        if editor.active_index() == Some(idx) {
            header.push_str(" (editing)");
        }
        columns.push(TableColumn::left(header));
    }

    let rows = Field::ALL
        .iter()
        .map(|field| {
            let mut row = vec![field.label().to_string()];
            for (idx, record) in store.all().iter().enumerate() {
                let cell = if editor.active_index() == Some(idx) {
                    let value = editor.scratch_value(*field).unwrap_or_default();
                    if editor.is_field_dirty(*field) {
                        let marked = format!("{value} *");
                        if plain {
                            marked
                        } else {
                            marked.bright_yellow().to_string()
                        }
                    } else {
                        value.to_string()
                    }
                } else {
                    record.get(*field).to_string()
                };
                row.push(cell);
            }
            row
        })
        .collect();

    Table {
        columns,
        rows,
        show_headers: true,
        padding: 1,
    }
}
