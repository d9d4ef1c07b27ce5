mod common;

use rulekeeper_docs::Font;
use rulekeeper_docs::layout::{
    Canvas, ColumnGrid, DisplayList, DrawOp, PageDecorator, PageGeometry, Surface, TextStyle,
    column_slots, draw_columns, items_per_column,
};

fn per_column_counts(len: usize, columns: usize) -> Vec<usize> {
    let mut counts = vec![0; columns];
    for slot in column_slots(len, columns) {
        counts[slot.column] += 1;
    }
    counts
}

fn index_grid() -> ColumnGrid {
    ColumnGrid {
        columns: 3,
        left: 10.0,
        top: 40.0,
        column_width: 63.0,
        row_height: 5.0,
    }
}

#[test]
fn column_major_distribution() {
    assert_eq!(items_per_column(47, 3), 16);
    assert_eq!(per_column_counts(47, 3), [16, 16, 15]);
    assert_eq!(per_column_counts(85, 3), [29, 29, 27]);
    assert_eq!(per_column_counts(3, 3), [1, 1, 1]);

    let slots: Vec<_> = column_slots(47, 3).collect();
    assert_eq!((slots[15].column, slots[15].row), (0, 15));
    assert_eq!((slots[16].column, slots[16].row), (1, 0));
    assert_eq!((slots[46].column, slots[46].row), (2, 14));
}

#[test]
fn degenerate_inputs_place_nothing() {
    assert_eq!(items_per_column(0, 3), 0);
    assert_eq!(column_slots(0, 3).count(), 0);
    assert_eq!(items_per_column(10, 0), 0);
    assert_eq!(column_slots(10, 0).count(), 0);
}

#[test]
fn items_are_painted_at_absolute_grid_positions() {
    let mut canvas = common::plain_canvas();
    canvas.new_page();
    let items: Vec<String> = (0..47).map(|i| format!("ID-{i:03}")).collect();
    let placed = draw_columns(
        &mut canvas,
        &index_grid(),
        &items,
        TextStyle::new(Font::Courier, 7.0),
        |item| item.clone(),
    );
    assert_eq!(placed, 47);

    let pages = canvas.finish();
    assert_eq!(pages.page_count(), 1);
    let x_of = |needle: &str| {
        pages.pages()[0].ops.iter().find_map(|op| match op {
            DrawOp::Text { x, text, .. } if text == needle => Some(*x),
            _ => None,
        })
    };
    // Left-aligned with 1mm cell padding.
    assert_eq!(x_of("ID-000"), Some(11.0));
    assert_eq!(x_of("ID-016"), Some(74.0));
    assert_eq!(x_of("ID-032"), Some(137.0));
}

#[test]
fn overlong_list_is_still_placed_without_breaking_pages() {
    common::init_logging();
    let mut canvas = common::plain_canvas();
    canvas.new_page();
    let items: Vec<usize> = (0..200).collect();
    let placed = draw_columns(
        &mut canvas,
        &index_grid(),
        &items,
        TextStyle::new(Font::Courier, 7.0),
        |i| i.to_string(),
    );
    assert_eq!(placed, 200);
    assert_eq!(canvas.page_no(), 1);
}

struct MarkedPages;

impl PageDecorator for MarkedPages {
    fn header(&self, surface: &mut dyn Surface, geometry: &PageGeometry, page_no: usize) -> f32 {
        let style = TextStyle::new(Font::Helvetica, 8.0);
        surface.text(geometry.margin_left, 8.0, &format!("header {page_no}"), &style);
        geometry.margin_top
    }

    fn footer(&self, surface: &mut dyn Surface, geometry: &PageGeometry, page_no: usize) {
        let style = TextStyle::new(Font::Helvetica, 8.0);
        surface.text(geometry.margin_left, 290.0, &format!("footer {page_no}"), &style);
    }
}

#[test]
fn grid_on_a_fresh_canvas_opens_a_decorated_page() {
    let geometry = PageGeometry::default();
    let mut canvas = Canvas::new(
        DisplayList::new(geometry.width, geometry.height),
        geometry,
        Box::new(MarkedPages),
    );
    let items = ["A-001", "A-002"];
    let placed = draw_columns(
        &mut canvas,
        &index_grid(),
        &items,
        TextStyle::new(Font::Courier, 7.0),
        |item| item.to_string(),
    );
    assert_eq!(placed, 2);
    assert_eq!(canvas.page_no(), 1);

    let pages = canvas.finish();
    assert_eq!(pages.page_count(), 1);
    let page = &pages.pages()[0];
    assert!(page.contains_text("header 1"));
    assert!(page.contains_text("footer 1"));
    assert!(page.contains_text("A-002"));
}
