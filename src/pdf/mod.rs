use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::Error;
use crate::fonts::{Font, register_fonts, to_winansi_bytes};
use crate::layout::{DisplayList, DrawOp, PT_PER_MM, Page};

/// Placeholder in text replaced by the total page count at encoding time.
pub const TOTAL_PAGES_ALIAS: &str = "{nb}";

fn rgb(color: [u8; 3]) -> (f32, f32, f32) {
    (
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    )
}

/// Converts top-left millimetre coordinates to PDF user space.
struct PageSpace {
    height_mm: f32,
}

impl PageSpace {
    fn x(&self, x: f32) -> f32 {
        x * PT_PER_MM
    }

    fn y(&self, y: f32) -> f32 {
        (self.height_mm - y) * PT_PER_MM
    }

    fn len(&self, v: f32) -> f32 {
        v * PT_PER_MM
    }
}

fn render_page(page: &Page, space: &PageSpace, total_pages: &str) -> Content {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::FillRect { x, y, w, h, color } => {
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_fill_rgb(r, g, b);
                content.rect(space.x(*x), space.y(y + h), space.len(*w), space.len(*h));
                content.fill_nonzero();
                content.restore_state();
            }
            DrawOp::StrokeRect {
                x,
                y,
                w,
                h,
                line_width,
                color,
            } => {
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_line_width(space.len(*line_width));
                content.set_stroke_rgb(r, g, b);
                content.rect(space.x(*x), space.y(y + h), space.len(*w), space.len(*h));
                content.stroke();
                content.restore_state();
            }
            DrawOp::Line {
                from,
                to,
                line_width,
                color,
            } => {
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_line_width(space.len(*line_width));
                content.set_stroke_rgb(r, g, b);
                content.move_to(space.x(from.0), space.y(from.1));
                content.line_to(space.x(to.0), space.y(to.1));
                content.stroke();
                content.restore_state();
            }
            DrawOp::Text {
                x,
                baseline,
                text,
                style,
            } => {
                let resolved;
                let text = if text.contains(TOTAL_PAGES_ALIAS) {
                    resolved = text.replace(TOTAL_PAGES_ALIAS, total_pages);
                    resolved.as_str()
                } else {
                    text.as_str()
                };
                let (r, g, b) = rgb(style.color);
                content.save_state();
                content.begin_text();
                content.set_font(Name(style.font.resource_name().as_bytes()), style.size);
                content.set_fill_rgb(r, g, b);
                content.next_line(space.x(*x), space.y(*baseline));
                content.show(Str(&to_winansi_bytes(text)));
                content.end_text();
                content.restore_state();
            }
        }
    }
    content
}

/// Encode a laid-out document as PDF bytes.
pub fn render(list: &DisplayList) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let fonts: Vec<(Font, Ref)> = register_fonts(&mut pdf, &mut alloc);

    let (width_mm, height_mm) = list.page_size();
    let space = PageSpace { height_mm };
    let n = list.page_count();
    let total_pages = n.to_string();

    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, page) in list.pages().iter().enumerate() {
        let raw = render_page(page, &space, &total_pages).finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let media_box = Rect::new(0.0, 0.0, width_mm * PT_PER_MM, height_mm * PT_PER_MM);
    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(media_box)
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        let mut font_dict = resources.fonts();
        for (font, font_ref) in &fonts {
            font_dict.pair(Name(font.resource_name().as_bytes()), *font_ref);
        }
    }

    log::debug!(
        "Encoded {} pages in {:.1}ms",
        n,
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(pdf.finish())
}
