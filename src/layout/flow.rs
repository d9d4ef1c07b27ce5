//! Flowing text: single cells and word-wrapped paragraphs that advance the
//! cursor and break pages when vertical space runs out.

use super::canvas::{Canvas, PageGeometry};
use super::surface::Surface;
use super::{Align, Cursor, EPSILON, TextStyle};

/// Where the cursor goes after a cell is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Right,
    NextLine,
}

/// One single-line box of text. A width of 0 extends to the right margin.
#[derive(Clone, Copy, Debug)]
pub struct Cell<'a> {
    pub width: f32,
    pub height: f32,
    pub text: &'a str,
    pub style: TextStyle,
    pub fill: Option<[u8; 3]>,
    pub border: bool,
    pub align: Align,
    pub advance: Advance,
}

impl<'a> Cell<'a> {
    pub fn new(width: f32, height: f32, text: &'a str, style: TextStyle) -> Self {
        Self {
            width,
            height,
            text,
            style,
            fill: None,
            border: false,
            align: Align::Left,
            advance: Advance::Right,
        }
    }

    pub fn fill(self, color: [u8; 3]) -> Self {
        Self {
            fill: Some(color),
            ..self
        }
    }

    pub fn bordered(self) -> Self {
        Self {
            border: true,
            ..self
        }
    }

    pub fn align(self, align: Align) -> Self {
        Self { align, ..self }
    }

    pub fn next_line(self) -> Self {
        Self {
            advance: Advance::NextLine,
            ..self
        }
    }
}

const BORDER_WIDTH: f32 = 0.2;

/// Paint a cell at an absolute position without any pagination. Returns the
/// resolved width.
pub fn paint_cell(surface: &mut dyn Surface, geometry: &PageGeometry, at: Cursor, cell: &Cell) -> f32 {
    let width = if cell.width > 0.0 {
        cell.width
    } else {
        (geometry.right_edge() - at.x).max(0.0)
    };

    if let Some(color) = cell.fill {
        surface.fill_rect(at.x, at.y, width, cell.height, color);
    }
    if cell.border {
        surface.stroke_rect(at.x, at.y, width, cell.height, BORDER_WIDTH, [0, 0, 0]);
    }

    if !cell.text.is_empty() {
        let text_w = cell.style.text_width(cell.text);
        let pad = geometry.cell_padding;
        let x = match cell.align {
            Align::Left => at.x + pad,
            Align::Center => at.x + (width - text_w) / 2.0,
            Align::Right => at.x + width - pad - text_w,
        };
        // Vertically centred: baseline sits 0.3em below the cell middle.
        let baseline = at.y + cell.height / 2.0 + 0.3 * cell.style.size_mm();
        surface.text(x, baseline, cell.text, &cell.style);
    }
    width
}

impl<S: Surface> Canvas<S> {
    /// Paint at an absolute position, bypassing the flow.
    pub fn paint_cell(&mut self, at: Cursor, cell: &Cell) -> f32 {
        let geometry = *self.geometry();
        paint_cell(self.surface_mut(), &geometry, at, cell)
    }

    /// Draw one cell in the flow. If the cell does not fit below `cursor` it
    /// moves whole to a new page first.
    pub fn draw_cell(&mut self, cursor: Cursor, cell: &Cell) -> Cursor {
        let at = self.ensure_space(cursor, cell.height);
        let width = self.paint_cell(at, cell);
        match cell.advance {
            Advance::Right => Cursor::new(at.x + width, at.y),
            Advance::NextLine => self.line_feed(at, cell.height),
        }
    }

    /// Word-wrap `cell.text` to the cell width and draw one cell per line
    /// (`cell.height` is the line height). Pages break between lines only.
    /// Returns a cursor at the starting x below the last line.
    pub fn draw_wrapped(&mut self, cursor: Cursor, cell: &Cell) -> Cursor {
        let width = if cell.width > 0.0 {
            cell.width
        } else {
            (self.geometry().right_edge() - cursor.x).max(0.0)
        };
        let text_width = width - 2.0 * self.geometry().cell_padding;
        let style = cell.style;

        let mut at = cursor;
        for line in wrap_lines(cell.text, text_width, move |ch| style.char_width(ch)) {
            let line_cell = Cell {
                width,
                text: line,
                advance: Advance::NextLine,
                ..*cell
            };
            at = self.draw_cell(at, &line_cell);
            at.x = cursor.x;
        }
        at
    }
}

/// Greedy word wrap. Lines are slices of the input; see [`WrapLines`].
pub fn wrap_lines<F>(text: &str, max_width: f32, char_width: F) -> WrapLines<'_, F>
where
    F: Fn(char) -> f32,
{
    WrapLines {
        paragraphs: text.split('\n'),
        current: None,
        max_width,
        char_width,
    }
}

/// Lazy iterator over wrapped lines.
///
/// Lines break at the last whitespace that fits; a token wider than the line
/// is cut at a character boundary. Explicit newlines always break and blank
/// lines come out as empty slices. Leading indentation of a paragraph is kept,
/// whitespace at a wrap point is dropped.
pub struct WrapLines<'a, F> {
    paragraphs: std::str::Split<'a, char>,
    current: Option<&'a str>,
    max_width: f32,
    char_width: F,
}

impl<'a, F> WrapLines<'a, F>
where
    F: Fn(char) -> f32,
{
    /// Split off the first line of `para`, returning (line, rest).
    fn split_line(&self, para: &'a str) -> (&'a str, &'a str) {
        let mut width = 0.0f32;
        let mut break_at: Option<usize> = None;
        let mut seen_word = false;

        for (i, ch) in para.char_indices() {
            let is_ws = ch.is_whitespace();
            if is_ws && seen_word {
                break_at = Some(i);
            }
            width += (self.char_width)(ch);
            if width > self.max_width + EPSILON {
                if is_ws && seen_word {
                    return (para[..i].trim_end(), para[i..].trim_start());
                }
                if let Some(b) = break_at {
                    return (para[..b].trim_end(), para[b..].trim_start());
                }
                // A single character wider than the line still has to go somewhere.
                let cut = if i == 0 { ch.len_utf8() } else { i };
                return (&para[..cut], &para[cut..]);
            }
            if !is_ws {
                seen_word = true;
            }
        }
        (para.trim_end(), "")
    }
}

impl<'a, F> Iterator for WrapLines<'a, F>
where
    F: Fn(char) -> f32,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let para = match self.current.take() {
            Some(rest) => rest,
            None => self.paragraphs.next()?.trim_end_matches('\r'),
        };
        if para.trim().is_empty() {
            return Some("");
        }
        let (line, rest) = self.split_line(para);
        if !rest.is_empty() {
            self.current = Some(rest);
        }
        Some(line)
    }
}
