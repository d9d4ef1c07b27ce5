//! Assembly of the two reference documents from a catalog.

mod detailed_guide;
mod quick_reference;

pub use detailed_guide::layout_detailed_guide;
pub use quick_reference::layout_quick_reference;

use crate::config::LayoutConfig;
use crate::fonts::Font;
use crate::layout::{
    Align, Canvas, Cell, Cursor, DisplayList, PageDecorator, PageGeometry, Surface, TextStyle,
    paint_cell,
};
use crate::model::Severity;
use crate::pdf::TOTAL_PAGES_ALIAS;

pub(crate) const NAVY: [u8; 3] = [0, 51, 102];
pub(crate) const GREY: [u8; 3] = [100, 100, 100];
const FOOTER_GREY: [u8; 3] = [128, 128, 128];
const WHITE: [u8; 3] = [255, 255, 255];

/// Title of the running header plus a `Page N/total` footer. Page 1 is a
/// title page and gets no header.
pub(crate) struct RunningHeader {
    title: &'static str,
}

impl PageDecorator for RunningHeader {
    fn header(&self, surface: &mut dyn Surface, geometry: &PageGeometry, page_no: usize) -> f32 {
        if page_no <= 1 {
            return geometry.margin_top;
        }
        let style = TextStyle::new(Font::HelveticaBold, 9.0).color(GREY);
        let at = Cursor::new(geometry.margin_left, geometry.margin_top);
        let cell = Cell::new(0.0, 8.0, self.title, style).align(Align::Center);
        paint_cell(surface, geometry, at, &cell);
        geometry.margin_top + 8.0 + 2.0
    }

    fn footer(&self, surface: &mut dyn Surface, geometry: &PageGeometry, page_no: usize) {
        let style = TextStyle::new(Font::HelveticaOblique, 8.0).color(FOOTER_GREY);
        let text = format!("Page {page_no}/{TOTAL_PAGES_ALIAS}");
        let at = Cursor::new(geometry.margin_left, geometry.height - 15.0);
        let cell = Cell::new(0.0, 10.0, &text, style).align(Align::Center);
        paint_cell(surface, geometry, at, &cell);
    }
}

pub(crate) fn new_canvas(config: &LayoutConfig, title: &'static str) -> Canvas {
    let geometry = config.geometry;
    Canvas::new(
        DisplayList::new(geometry.width, geometry.height),
        geometry,
        Box::new(RunningHeader { title }),
    )
}

/// Big centred product name followed by the document subtitle.
pub(crate) fn draw_title_block(
    canvas: &mut Canvas,
    cursor: Cursor,
    subtitle: &str,
    tagline: &str,
    gap: f32,
) -> Cursor {
    let title_style = TextStyle::new(Font::HelveticaBold, 32.0).color(NAVY);
    let mut at = canvas.draw_cell(
        cursor,
        &Cell::new(0.0, 15.0, "RuleKeeper", title_style)
            .align(Align::Center)
            .next_line(),
    );
    let subtitle_style = TextStyle::new(Font::Helvetica, 18.0).color(GREY);
    at = canvas.draw_cell(
        at,
        &Cell::new(0.0, 10.0, subtitle, subtitle_style)
            .align(Align::Center)
            .next_line(),
    );
    at = canvas.line_feed(at, gap);
    let tagline_style = TextStyle::new(Font::HelveticaOblique, 12.0).color(GREY);
    canvas.draw_cell(
        at,
        &Cell::new(0.0, 8.0, tagline, tagline_style)
            .align(Align::Center)
            .next_line(),
    )
}

/// One coloured chip per severity followed by its meaning.
pub(crate) fn draw_severity_legend(
    canvas: &mut Canvas,
    cursor: Cursor,
    row_height: f32,
    chip_size: f32,
    row_gap: f32,
    meaning: fn(Severity) -> &'static str,
) -> Cursor {
    let mut at = cursor;
    for severity in Severity::ALL {
        let chip_style = TextStyle::new(Font::HelveticaBold, chip_size).color(WHITE);
        at = canvas.draw_cell(
            at,
            &Cell::new(25.0, row_height, severity.label(), chip_style).fill(severity.color()),
        );
        let text = format!("  {}", meaning(severity));
        let text_style = TextStyle::new(Font::Helvetica, 9.0);
        at = canvas.draw_cell(at, &Cell::new(0.0, row_height, &text, text_style).next_line());
        if row_gap > 0.0 {
            at = canvas.line_feed(at, row_gap);
        }
    }
    at
}

/// Bold navy heading on its own line.
pub(crate) fn draw_heading(canvas: &mut Canvas, cursor: Cursor, text: &str, size: f32, gap: f32) -> Cursor {
    let style = TextStyle::new(Font::HelveticaBold, size).color(NAVY);
    let at = canvas.draw_cell(cursor, &Cell::new(0.0, 10.0, text, style).next_line());
    canvas.line_feed(at, gap)
}
