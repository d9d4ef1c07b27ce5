use std::borrow::Cow;

use crate::fonts::Font;

use super::canvas::Canvas;
use super::flow::Cell;
use super::surface::Surface;
use super::{Align, Cursor, EPSILON, TextStyle};

pub const ELLIPSIS: &str = "...";

/// Character budget for a fixed-width column. Text longer than `limit`
/// characters keeps its first `keep` characters followed by [`ELLIPSIS`].
/// The result never exceeds `limit` characters: `keep` is clamped to leave
/// room for the ellipsis, and a limit too small to hold one drops it.
/// Tuned by eye for the column widths in use, not derived from font metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharBudget {
    pub limit: usize,
    pub keep: usize,
}

impl CharBudget {
    pub const fn new(limit: usize, keep: usize) -> Self {
        Self { limit, keep }
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().count() <= self.limit {
            return Cow::Borrowed(text);
        }
        let marker = ELLIPSIS.chars().count();
        if self.limit < marker {
            return Cow::Owned(text.chars().take(self.limit).collect());
        }
        let keep = self.keep.min(self.limit - marker);
        let mut out: String = text.chars().take(keep).collect();
        out.push_str(ELLIPSIS);
        Cow::Owned(out)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Column<'a> {
    pub width: f32,
    pub label: &'a str,
    pub budget: Option<CharBudget>,
    pub align: Align,
}

impl<'a> Column<'a> {
    pub fn new(width: f32, label: &'a str) -> Self {
        Self {
            width,
            label,
            budget: None,
            align: Align::Left,
        }
    }

    pub fn budget(self, budget: CharBudget) -> Self {
        Self {
            budget: Some(budget),
            ..self
        }
    }

    pub fn align(self, align: Align) -> Self {
        Self { align, ..self }
    }
}

pub struct TableSpec<'a> {
    pub columns: Vec<Column<'a>>,
    pub header_style: TextStyle,
    pub body_style: TextStyle,
    pub header_fill: [u8; 3],
    pub header_height: f32,
    pub row_height: f32,
}

impl<'a> TableSpec<'a> {
    pub fn new(columns: Vec<Column<'a>>) -> Self {
        Self {
            columns,
            header_style: TextStyle::new(Font::HelveticaBold, 8.0),
            body_style: TextStyle::new(Font::Helvetica, 8.0),
            header_fill: [240, 240, 240],
            header_height: 7.0,
            row_height: 6.0,
        }
    }

    pub fn body_style(self, body_style: TextStyle) -> Self {
        Self { body_style, ..self }
    }

    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }
}

/// A table data row: the text of each column.
pub trait TableRow {
    fn cell(&self, column: usize) -> Cow<'_, str>;
}

impl<const N: usize> TableRow for [&str; N] {
    fn cell(&self, column: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.get(column).copied().unwrap_or(""))
    }
}

/// Draw a header row and one bordered row per item. Rows never split: a row
/// that does not fit moves whole to the next page. `row_fill` picks each row's
/// background.
pub fn draw_table<S, R>(
    canvas: &mut Canvas<S>,
    cursor: Cursor,
    spec: &TableSpec,
    rows: &[R],
    row_fill: impl Fn(&R) -> Option<[u8; 3]>,
) -> Cursor
where
    S: Surface,
    R: TableRow,
{
    let content_width = canvas.geometry().content_width();
    if spec.total_width() > content_width + EPSILON {
        log::warn!(
            "table is {:.1}mm wide but only {:.1}mm are available",
            spec.total_width(),
            content_width
        );
    }

    // The header never ends a page on its own.
    let lead = if rows.is_empty() {
        spec.header_height
    } else {
        spec.header_height + spec.row_height
    };
    let left = cursor.x;
    let mut at = canvas.ensure_space(cursor, lead);
    for (ci, col) in spec.columns.iter().enumerate() {
        let mut cell = Cell::new(col.width, spec.header_height, col.label, spec.header_style)
            .fill(spec.header_fill)
            .bordered();
        if ci + 1 == spec.columns.len() {
            cell = cell.next_line();
        }
        at = canvas.draw_cell(at, &cell);
    }
    at.x = left;

    for (ri, row) in rows.iter().enumerate() {
        at = canvas.ensure_space(at, spec.row_height);
        log::debug!(
            "TABLE row={} page={} y={:.2}",
            ri,
            canvas.page_no(),
            at.y
        );
        let fill = row_fill(row);
        for (ci, col) in spec.columns.iter().enumerate() {
            let raw = row.cell(ci);
            let text = match col.budget {
                Some(budget) => budget.apply(&raw),
                None => Cow::Borrowed(&*raw),
            };
            let mut cell = Cell::new(col.width, spec.row_height, &text, spec.body_style)
                .align(col.align)
                .bordered();
            if let Some(color) = fill {
                cell = cell.fill(color);
            }
            if ci + 1 == spec.columns.len() {
                cell = cell.next_line();
            }
            at = canvas.draw_cell(at, &cell);
        }
        at.x = left;
    }
    at
}
