use super::surface::{DisplayList, Surface};
use super::{Cursor, EPSILON};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    /// Distance from the bottom edge at which flowing content breaks to a new page.
    pub break_margin: f32,
    /// Horizontal text padding inside cells.
    pub cell_padding: f32,
}

impl Default for PageGeometry {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_left: 10.0,
            margin_top: 10.0,
            margin_right: 10.0,
            break_margin: 15.0,
            cell_padding: 1.0,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn right_edge(&self) -> f32 {
        self.width - self.margin_right
    }

    /// y below which nothing flowing may extend.
    pub fn break_trigger(&self) -> f32 {
        self.height - self.break_margin
    }
}

/// Running header/footer hooks, injected per document type.
pub trait PageDecorator {
    /// Draw the header of page `page_no` (1-based) and return the y where body
    /// content starts.
    fn header(&self, _surface: &mut dyn Surface, geometry: &PageGeometry, _page_no: usize) -> f32 {
        geometry.margin_top
    }

    /// Called when page `page_no` is finalised.
    fn footer(&self, _surface: &mut dyn Surface, _geometry: &PageGeometry, _page_no: usize) {}
}

/// No header, no footer.
pub struct PlainPages;

impl PageDecorator for PlainPages {}

pub struct Canvas<S: Surface = DisplayList> {
    surface: S,
    geometry: PageGeometry,
    decorator: Box<dyn PageDecorator>,
    page_no: usize,
    content_top: f32,
}

impl<S: Surface> Canvas<S> {
    pub fn new(surface: S, geometry: PageGeometry, decorator: Box<dyn PageDecorator>) -> Self {
        Self {
            surface,
            content_top: geometry.margin_top,
            geometry,
            decorator,
            page_no: 0,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// 1-based number of the open page, 0 before the first page.
    pub fn page_no(&self) -> usize {
        self.page_no
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Finalise the open page (footer) and start a fresh one (header).
    pub fn new_page(&mut self) -> Cursor {
        if self.page_no > 0 {
            self.decorator
                .footer(&mut self.surface, &self.geometry, self.page_no);
        }
        self.surface.add_page();
        self.page_no += 1;
        self.content_top = self
            .decorator
            .header(&mut self.surface, &self.geometry, self.page_no);
        log::debug!("page {} opened, content top {:.1}", self.page_no, self.content_top);
        Cursor::new(self.geometry.margin_left, self.content_top)
    }

    pub fn remaining_height(&self, cursor: Cursor) -> f32 {
        self.geometry.break_trigger() - cursor.y
    }

    /// True when nothing has been placed below the header of the open page.
    pub fn at_page_top(&self, cursor: Cursor) -> bool {
        self.page_no > 0 && (cursor.y - self.content_top).abs() < EPSILON
    }

    /// Break to a new page unless `height` still fits below `cursor`. The x
    /// position is kept across the break.
    pub fn ensure_space(&mut self, cursor: Cursor, height: f32) -> Cursor {
        if self.page_no == 0 {
            let top = self.new_page();
            return Cursor::new(cursor.x, top.y);
        }
        if height <= self.remaining_height(cursor) + EPSILON {
            return cursor;
        }
        if self.at_page_top(cursor) {
            log::warn!(
                "layout overflow on page {}: {:.1}mm does not fit in {:.1}mm; drawing anyway",
                self.page_no,
                height,
                self.remaining_height(cursor)
            );
            return cursor;
        }
        let top = self.new_page();
        Cursor::new(cursor.x, top.y)
    }

    /// Move to the left margin, `h` further down. Never breaks the page.
    pub fn line_feed(&self, cursor: Cursor, h: f32) -> Cursor {
        Cursor::new(self.geometry.margin_left, cursor.y + h)
    }

    /// Finalise the last page and hand back the surface.
    pub fn finish(mut self) -> S {
        if self.page_no > 0 {
            self.decorator
                .footer(&mut self.surface, &self.geometry, self.page_no);
        }
        self.surface
    }
}
