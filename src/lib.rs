mod catalog;
mod config;
mod document;
mod error;
mod fonts;
pub mod layout;
mod model;
mod pdf;

pub use config::LayoutConfig;
pub use document::{layout_detailed_guide, layout_quick_reference};
pub use error::Error;
pub use fonts::Font;
pub use model::{Catalog, Category, Rule, Severity};
pub use pdf::TOTAL_PAGES_ALIAS;

use std::path::Path;
use std::time::Instant;

use layout::DisplayList;

pub const QUICK_REFERENCE_FILE: &str = "RuleKeeper_Quick_Reference.pdf";
pub const DETAILED_GUIDE_FILE: &str = "RuleKeeper_Detailed_Guide.pdf";

/// Encode a laid-out document as PDF bytes.
pub fn encode_pdf(list: &DisplayList) -> Result<Vec<u8>, Error> {
    pdf::render(list)
}

pub fn render_quick_reference(catalog: &Catalog) -> Result<Vec<u8>, Error> {
    render_timed("quick reference", || {
        layout_quick_reference(catalog, &LayoutConfig::default())
    })
}

pub fn render_detailed_guide(catalog: &Catalog) -> Result<Vec<u8>, Error> {
    render_timed("detailed guide", || {
        layout_detailed_guide(catalog, &LayoutConfig::default())
    })
}

pub fn write_quick_reference(catalog: &Catalog, output: &Path) -> Result<(), Error> {
    write_pdf(&render_quick_reference(catalog)?, output)
}

pub fn write_detailed_guide(catalog: &Catalog, output: &Path) -> Result<(), Error> {
    write_pdf(&render_detailed_guide(catalog)?, output)
}

fn render_timed(
    what: &str,
    layout: impl FnOnce() -> Result<DisplayList, Error>,
) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let list = layout()?;
    let t_layout = t0.elapsed();

    let bytes = pdf::render(&list)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing {what}: layout={:.1}ms, encode={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_layout.as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        list.page_count(),
        bytes.len(),
    );

    Ok(bytes)
}

/// Single write attempt; a failure here is fatal for this document only.
fn write_pdf(bytes: &[u8], output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();
    std::fs::write(output, bytes).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", e, output.display()),
        ))
    })?;
    log::info!(
        "Timing write: {:.1}ms ({})",
        t0.elapsed().as_secs_f64() * 1000.0,
        output.display()
    );
    Ok(())
}
