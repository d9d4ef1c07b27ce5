use super::canvas::Canvas;
use super::flow::Cell;
use super::surface::Surface;
use super::{Cursor, TextStyle};

/// Absolute placement of a list into fixed columns. Independent of the flow
/// cursor; never breaks pages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnGrid {
    pub columns: usize,
    pub left: f32,
    pub top: f32,
    pub column_width: f32,
    pub row_height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub column: usize,
    pub row: usize,
}

pub fn items_per_column(len: usize, num_columns: usize) -> usize {
    if num_columns == 0 {
        return 0;
    }
    len.div_ceil(num_columns)
}

/// Column-major slots for `len` items. Items that would land in a column past
/// `num_columns` are dropped.
pub fn column_slots(len: usize, num_columns: usize) -> impl Iterator<Item = Slot> {
    let per_column = items_per_column(len, num_columns);
    (0..len)
        .take_while(move |_| per_column > 0)
        .map(move |index| Slot {
            index,
            column: index / per_column,
            row: index % per_column,
        })
        .filter(move |slot| slot.column < num_columns)
}

/// Draw `items` into the grid on the open page, opening the first page if
/// needed. Returns how many were placed.
pub fn draw_columns<S, T>(
    canvas: &mut Canvas<S>,
    grid: &ColumnGrid,
    items: &[T],
    style: TextStyle,
    render_item: impl Fn(&T) -> String,
) -> usize
where
    S: Surface,
{
    let rows = items_per_column(items.len(), grid.columns);
    let bottom = grid.top + rows as f32 * grid.row_height;
    if bottom > canvas.geometry().break_trigger() {
        log::warn!(
            "column list of {} items needs {} rows and runs to {:.1}mm, past the page break at {:.1}mm",
            items.len(),
            rows,
            bottom,
            canvas.geometry().break_trigger()
        );
    }

    if canvas.page_no() == 0 {
        canvas.new_page();
    }

    let mut placed = 0;
    for slot in column_slots(items.len(), grid.columns) {
        let at = Cursor::new(
            grid.left + slot.column as f32 * grid.column_width,
            grid.top + slot.row as f32 * grid.row_height,
        );
        let label = render_item(&items[slot.index]);
        canvas.paint_cell(at, &Cell::new(grid.column_width, grid.row_height, &label, style));
        placed += 1;
    }
    placed
}
