use crate::layout::{CharBudget, ColumnGrid, PageGeometry};

/// Layout constants. The defaults are tuned for A4 with the standard
/// Helvetica/Courier metrics; changing the geometry usually means revisiting
/// the budgets and thresholds too.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub geometry: PageGeometry,
    /// A rule box starting below this y (mm from the page top) goes to a new page.
    pub rule_block_break_y: f32,
    pub name_budget: CharBudget,
    pub description_budget: CharBudget,
    /// Placement of the complete rule id index.
    pub index_grid: ColumnGrid,
    /// Characters of the rule name shown next to each id in the index.
    pub index_name_chars: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let geometry = PageGeometry::default();
        Self {
            geometry,
            rule_block_break_y: 220.0,
            name_budget: CharBudget::new(28, 25),
            description_budget: CharBudget::new(63, 60),
            index_grid: ColumnGrid {
                columns: 3,
                left: geometry.margin_left,
                top: 40.0,
                column_width: 63.0,
                row_height: 5.0,
            },
            index_name_chars: 20,
        }
    }
}
