use super::TextStyle;

/// Drawing capability the layout engine renders against. Coordinates are in
/// millimetres from the top-left corner of the current page.
pub trait Surface {
    fn add_page(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 3]);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, line_width: f32, color: [u8; 3]);
    fn line(&mut self, from: (f32, f32), to: (f32, f32), line_width: f32, color: [u8; 3]);
    /// `baseline` is the y of the text baseline.
    fn text(&mut self, x: f32, baseline: f32, text: &str, style: &TextStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: [u8; 3],
    },
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        line_width: f32,
        color: [u8; 3],
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        line_width: f32,
        color: [u8; 3],
    },
    Text {
        x: f32,
        baseline: f32,
        text: String,
        style: TextStyle,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

/// Recorded draw operations, one list per page. This is what the PDF back
/// end encodes.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayList {
    width: f32,
    height: f32,
    pages: Vec<Page>,
}

impl DisplayList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
        }
    }

    pub fn page_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 1-based number of the first page showing `text`.
    pub fn find_page(&self, text: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|p| p.contains_text(text))
            .map(|i| i + 1)
    }

    fn push(&mut self, op: DrawOp) {
        if self.pages.is_empty() {
            log::warn!("draw operation before the first page; opening one");
            self.pages.push(Page::default());
        }
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }
}

impl Surface for DisplayList {
    fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 3]) {
        self.push(DrawOp::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, line_width: f32, color: [u8; 3]) {
        self.push(DrawOp::StrokeRect {
            x,
            y,
            w,
            h,
            line_width,
            color,
        });
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), line_width: f32, color: [u8; 3]) {
        self.push(DrawOp::Line {
            from,
            to,
            line_width,
            color,
        });
    }

    fn text(&mut self, x: f32, baseline: f32, text: &str, style: &TextStyle) {
        self.push(DrawOp::Text {
            x,
            baseline,
            text: text.to_string(),
            style: *style,
        });
    }
}
