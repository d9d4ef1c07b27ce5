//! Page layout and pagination engine.
//!
//! Everything here works in millimetres with the origin at the top-left corner
//! of the page. Operations take the current [`Cursor`] and return the updated
//! one; the [`Canvas`] owns geometry and page lifecycle, and draws onto a
//! [`Surface`].

mod canvas;
mod columns;
mod flow;
mod rule_block;
mod surface;
mod table;

pub use canvas::{Canvas, PageDecorator, PageGeometry, PlainPages};
pub use columns::{ColumnGrid, Slot, column_slots, draw_columns, items_per_column};
pub use flow::{Advance, Cell, WrapLines, paint_cell, wrap_lines};
pub use rule_block::{draw_code_block, draw_rule_block};
pub use surface::{DisplayList, DrawOp, Page, Surface};
pub use table::{CharBudget, Column, ELLIPSIS, TableRow, TableSpec, draw_table};

use crate::fonts::Font;

pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Tolerance for comparing accumulated layout positions.
pub(crate) const EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32, // points
    pub color: [u8; 3],
}

impl TextStyle {
    pub const fn new(font: Font, size: f32) -> Self {
        Self {
            font,
            size,
            color: [0, 0, 0],
        }
    }

    pub const fn color(self, color: [u8; 3]) -> Self {
        Self { color, ..self }
    }

    pub fn char_width(&self, ch: char) -> f32 {
        self.font.char_width_1000(ch) * self.size / 1000.0 / PT_PER_MM
    }

    pub fn text_width(&self, text: &str) -> f32 {
        self.font.text_width(text, self.size) / PT_PER_MM
    }

    /// Font size converted to millimetres.
    pub fn size_mm(&self) -> f32 {
        self.size / PT_PER_MM
    }
}
