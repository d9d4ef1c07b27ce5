use crate::fonts::Font;
use crate::model::Rule;

use super::canvas::Canvas;
use super::flow::Cell;
use super::surface::Surface;
use super::{Align, Cursor, TextStyle};

const GOOD_LABEL: [u8; 3] = [0, 128, 0];
const BAD_LABEL: [u8; 3] = [200, 0, 0];
const CODE_FILL: [u8; 3] = [245, 245, 245];
const FIX_HINT: [u8; 3] = [0, 100, 0];

const ACCENT_LINE_WIDTH: f32 = 0.8;
const ID_WIDTH: f32 = 35.0;
const NAME_WIDTH: f32 = 120.0;
const CHIP_WIDTH: f32 = 25.0;
const PATTERN_LABEL_WIDTH: f32 = 20.0;
const HEADER_GAP: f32 = 2.0;
const HEADER_HEIGHT: f32 = 5.0;
/// Accent line to description: gap, header row and the space below it.
const HEADER_SPAN: f32 = 9.0;

/// Labelled monospace block on a light background.
pub fn draw_code_block<S: Surface>(
    canvas: &mut Canvas<S>,
    cursor: Cursor,
    code: &str,
    label: Option<(&str, [u8; 3])>,
) -> Cursor {
    let mut at = cursor;
    if let Some((label, color)) = label {
        let style = TextStyle::new(Font::HelveticaBold, 8.0).color(color);
        at = canvas.draw_cell(at, &Cell::new(0.0, 4.0, label, style).next_line());
    }
    let style = TextStyle::new(Font::Courier, 8.0);
    at = canvas.draw_wrapped(at, &Cell::new(0.0, 4.0, code, style).fill(CODE_FILL));
    canvas.line_feed(at, 2.0)
}

/// Draw the detail box of one rule.
///
/// The box is meant to stay on one page, but its height is not computed up
/// front: if the cursor is already below `break_y`, or the header row no
/// longer fits above the break trigger, the page is broken first.
/// After that every part uses the ordinary flow, so an unusually tall box can
/// still run onto the next page.
pub fn draw_rule_block<S: Surface>(
    canvas: &mut Canvas<S>,
    cursor: Cursor,
    rule: &Rule,
    break_y: f32,
) -> Cursor {
    let mut top = cursor;
    let needs_break = canvas.page_no() == 0
        || (!canvas.at_page_top(top)
            && (top.y > break_y || canvas.remaining_height(top) < HEADER_SPAN));
    if needs_break {
        log::debug!(
            "rule {} at y={:.1} (threshold {:.0}mm, {:.1}mm left); new page",
            rule.id,
            top.y,
            break_y,
            canvas.remaining_height(top)
        );
        top = canvas.new_page();
    }

    let geometry = *canvas.geometry();
    let color = rule.severity.color();
    let left = geometry.margin_left;

    canvas.surface_mut().line(
        (left, top.y),
        (geometry.right_edge(), top.y),
        ACCENT_LINE_WIDTH,
        color,
    );

    let mut at = Cursor::new(left, top.y + HEADER_GAP);
    let id_style = TextStyle::new(Font::CourierBold, 10.0).color(color);
    at = canvas.draw_cell(at, &Cell::new(ID_WIDTH, HEADER_HEIGHT, &rule.id, id_style));
    let name_style = TextStyle::new(Font::HelveticaBold, 10.0);
    at = canvas.draw_cell(at, &Cell::new(NAME_WIDTH, HEADER_HEIGHT, &rule.name, name_style));
    let chip_style = TextStyle::new(Font::HelveticaBold, 8.0).color([255, 255, 255]);
    let chip = Cell::new(CHIP_WIDTH, HEADER_HEIGHT, rule.severity.label(), chip_style)
        .fill(color)
        .align(Align::Center);
    let header = canvas.draw_cell(at, &chip);

    // Measured from the row the header landed on, which may be a new page.
    let mut at = Cursor::new(left, header.y + HEADER_SPAN - HEADER_GAP);
    let desc_style = TextStyle::new(Font::Helvetica, 9.0).color([80, 80, 80]);
    at = canvas.draw_wrapped(
        at,
        &Cell::new(geometry.content_width(), 5.0, &rule.description, desc_style),
    );

    if let Some(pattern) = &rule.pattern {
        let label_style = TextStyle::new(Font::HelveticaBold, 8.0).color([100, 100, 100]);
        at = canvas.draw_cell(at, &Cell::new(PATTERN_LABEL_WIDTH, 5.0, "Pattern:", label_style));
        let pattern_style = TextStyle::new(Font::Courier, 8.0).color([100, 100, 100]);
        at = canvas.draw_cell(at, &Cell::new(0.0, 5.0, pattern, pattern_style).next_line());
    }

    if let Some(good) = &rule.good_example {
        at = draw_code_block(canvas, at, good, Some(("Good Example:", GOOD_LABEL)));
    }
    if let Some(bad) = &rule.bad_example {
        at = draw_code_block(canvas, at, bad, Some(("Bad Example:", BAD_LABEL)));
    }

    if let Some(hint) = &rule.fix_hint {
        let text = format!("Fix: {hint}");
        let style = TextStyle::new(Font::HelveticaOblique, 8.0).color(FIX_HINT);
        at = canvas.draw_wrapped(at, &Cell::new(0.0, 4.0, &text, style));
    }

    canvas.line_feed(at, 5.0)
}
