mod common;

use rulekeeper_docs::Severity;
use rulekeeper_docs::layout::{Cell, Cursor, DrawOp, PageGeometry, TextStyle, draw_rule_block};
use rulekeeper_docs::Font;

const BODY: TextStyle = TextStyle::new(Font::Helvetica, 9.0);

#[test]
fn first_draw_opens_a_page() {
    let mut canvas = common::plain_canvas();
    assert_eq!(canvas.page_no(), 0);

    let at = canvas.draw_cell(Cursor::new(10.0, 0.0), &Cell::new(50.0, 5.0, "hello", BODY));
    assert_eq!(canvas.page_no(), 1);
    assert_eq!(at, Cursor::new(60.0, 10.0));

    let pages = canvas.finish();
    assert_eq!(pages.page_count(), 1);
    assert!(pages.pages()[0].contains_text("hello"));
}

#[test]
fn remaining_height_is_measured_to_the_break_trigger() {
    let canvas = common::plain_canvas();
    assert_eq!(canvas.geometry().break_trigger(), 282.0);
    assert_eq!(canvas.remaining_height(Cursor::new(10.0, 250.0)), 32.0);
    assert!(canvas.remaining_height(Cursor::new(10.0, 290.0)) < 0.0);
}

#[test]
fn cells_break_to_a_new_page_when_they_do_not_fit() {
    common::init_logging();
    let mut canvas = common::plain_canvas();
    let mut at = canvas.new_page();
    for i in 0..30 {
        let label = format!("row {i}");
        at = canvas.draw_cell(at, &Cell::new(0.0, 10.0, &label, BODY).next_line());
    }
    let pages = canvas.finish();

    // Rows start at y=10; the last one that ends at or above y=282 starts at y=270.
    assert_eq!(pages.page_count(), 2);
    assert_eq!(pages.find_page("row 26"), Some(1));
    assert_eq!(pages.find_page("row 27"), Some(2));
    assert_eq!(pages.pages()[1].texts().count(), 3);
}

#[test]
fn page_break_keeps_the_horizontal_position() {
    let mut canvas = common::plain_canvas();
    canvas.new_page();
    let at = canvas.ensure_space(Cursor::new(50.0, 280.0), 10.0);
    assert_eq!(canvas.page_no(), 2);
    assert_eq!(at, Cursor::new(50.0, 10.0));

    let unchanged = canvas.ensure_space(Cursor::new(50.0, 100.0), 10.0);
    assert_eq!(canvas.page_no(), 2);
    assert_eq!(unchanged, Cursor::new(50.0, 100.0));
}

#[test]
fn oversized_cell_at_page_top_is_drawn_without_looping() {
    common::init_logging();
    let mut canvas = common::plain_canvas();
    let at = canvas.new_page();
    assert!(canvas.at_page_top(at));

    let at = canvas.draw_cell(at, &Cell::new(0.0, 300.0, "too tall", BODY).next_line());
    assert_eq!(canvas.page_no(), 1);
    assert_eq!(at.y, 310.0);

    // The next unit is no longer at the top, so it moves on normally.
    canvas.draw_cell(at, &Cell::new(0.0, 5.0, "after", BODY).next_line());
    let pages = canvas.finish();
    assert_eq!(pages.page_count(), 2);
    assert_eq!(pages.find_page("too tall"), Some(1));
    assert_eq!(pages.find_page("after"), Some(2));
}

#[test]
fn wrapped_text_returns_to_its_starting_x() {
    let mut canvas = common::plain_canvas();
    canvas.new_page();
    let text = "Methods should be small and do one thing. Keep method length at or below thirty lines.";
    let at = canvas.draw_wrapped(Cursor::new(30.0, 20.0), &Cell::new(50.0, 5.0, text, BODY));
    assert_eq!(at.x, 30.0);

    let pages = canvas.finish();
    let lines = pages.pages()[0].texts().count();
    assert!(lines > 1, "expected the paragraph to wrap, got {lines} line(s)");
    assert_eq!(at.y, 20.0 + 5.0 * lines as f32);
    for op in &pages.pages()[0].ops {
        if let DrawOp::Text { x, .. } = op {
            assert!(*x >= 31.0 - 1e-3, "line starts at x={x}");
        }
    }
}

#[test]
fn rule_block_below_threshold_adds_exactly_one_page() {
    common::init_logging();
    let mut canvas = common::plain_canvas();
    canvas.new_page();
    let rule = common::rule("CS-TEST-001", Severity::High);

    draw_rule_block(&mut canvas, Cursor::new(10.0, 225.0), &rule, 220.0);
    let pages = canvas.finish();

    assert_eq!(pages.page_count(), 2);
    assert!(pages.pages()[0].ops.is_empty(), "block content leaked onto the first page");
    match pages.pages()[1].ops.first() {
        Some(DrawOp::Line { from, color, .. }) => {
            assert_eq!(*from, (10.0, 10.0));
            assert_eq!(*color, Severity::High.color());
        }
        other => panic!("expected the accent line first, got {other:?}"),
    }
    assert!(pages.pages()[1].contains_text("CS-TEST-001"));
}

#[test]
fn rule_block_above_threshold_stays_on_the_page() {
    let mut canvas = common::plain_canvas();
    canvas.new_page();
    let rule = common::detailed_rule("CS-TEST-002", Severity::Critical);

    let at = draw_rule_block(&mut canvas, Cursor::new(10.0, 215.0), &rule, 220.0);
    let pages = canvas.finish();

    assert_eq!(pages.page_count(), 1);
    assert!(at.y < 282.0);
    let page = &pages.pages()[0];
    for text in [
        "CS-TEST-002",
        "Rule CS-TEST-002",
        "CRITICAL",
        "Pattern:",
        "^[A-Z][a-zA-Z0-9]*$",
        "Good Example:",
        "Bad Example:",
        "Fix: Rename with an uppercase first letter",
    ] {
        assert!(page.contains_text(text), "missing {text:?}");
    }
}

#[test]
fn rule_block_omits_absent_optional_parts() {
    let mut canvas = common::plain_canvas();
    let rule = common::rule("CS-TEST-003", Severity::Low);
    draw_rule_block(&mut canvas, Cursor::new(10.0, 10.0), &rule, 220.0);
    let pages = canvas.finish();

    assert_eq!(pages.page_count(), 1);
    let page = &pages.pages()[0];
    assert!(page.contains_text("LOW"));
    assert!(!page.contains_text("Pattern:"));
    assert!(!page.contains_text("Good Example:"));
    assert!(!page.texts().any(|t| t.starts_with("Fix:")));
}

#[test]
fn tall_rule_block_flows_onto_following_pages() {
    common::init_logging();
    let mut canvas = common::plain_canvas();
    canvas.new_page();
    let mut rule = common::rule("CS-TEST-004", Severity::Medium);
    rule.description = "lorem ipsum dolor ".repeat(600);

    draw_rule_block(&mut canvas, Cursor::new(10.0, 10.0), &rule, 220.0);
    let pages = canvas.finish();
    assert!(pages.page_count() > 1);
    for page in pages.pages() {
        assert!(common::lowest_rect_bottom(page) <= 282.0 + 1e-3);
    }
}

#[test]
fn rule_block_header_that_cannot_fit_moves_the_whole_block() {
    common::init_logging();
    // Short page: the break trigger (195mm) lies above the 220mm threshold.
    let geometry = PageGeometry {
        height: 210.0,
        ..PageGeometry::default()
    };
    let mut canvas = common::canvas_with(geometry);
    canvas.new_page();
    let rule = common::rule("CS-TEST-005", Severity::Medium);

    draw_rule_block(&mut canvas, Cursor::new(10.0, 190.0), &rule, 220.0);
    let pages = canvas.finish();

    assert_eq!(pages.page_count(), 2);
    assert!(pages.pages()[0].ops.is_empty(), "accent line left behind");
    assert_eq!(pages.find_page("CS-TEST-005"), Some(2));
    assert_eq!(pages.find_page("Description of CS-TEST-005"), Some(2));

    let (_, id_baseline) = common::texts_with_baselines(&pages.pages()[1])
        .into_iter()
        .find(|(text, _)| *text == "CS-TEST-005")
        .expect("id text");
    let (_, desc_baseline) = common::texts_with_baselines(&pages.pages()[1])
        .into_iter()
        .find(|(text, _)| *text == "Description of CS-TEST-005")
        .expect("description text");
    assert!(desc_baseline > id_baseline);
    assert!(desc_baseline < 30.0);
}
