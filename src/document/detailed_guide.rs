use crate::config::LayoutConfig;
use crate::error::Error;
use crate::fonts::Font;
use crate::layout::{
    Align, Canvas, Cell, Cursor, DisplayList, TextStyle, draw_code_block, draw_rule_block,
};
use crate::model::{Catalog, Severity};

use super::{GREY, NAVY, draw_heading, draw_severity_legend, draw_title_block, new_canvas};

const SUMMARY: &str = "This document provides comprehensive documentation for all RuleKeeper coding \
standard policies. Each policy includes detailed descriptions, regex patterns, good and bad examples, \
and fix hints.";

const INTRODUCTION: &str = "RuleKeeper is a Policy-as-Code tool designed to scan source code and \
validate compliance with organizational coding standards defined in YAML configuration files.";

const OPTIONS_OVERVIEW: &str = "Each rule in the YAML configuration supports the following options:

- enabled: true/false - Activate or deactivate the rule
- skip: true/false - Skip this rule during scanning
- pattern: Regex pattern that valid code should match
- anti_pattern: Regex pattern that indicates a violation
- custom_validator: Reference to a custom validation function
- prebuilt: Reference to a prebuilt policy template
- parameters: Additional configuration parameters";

const YAML_EXAMPLE: &str = r#"# Example rule configuration
coding_standards:
  naming_conventions:
    - id: CS-NAME-001
      name: "Class/Interface Naming"
      description: "Classes must use PascalCase"
      severity: high
      enabled: true
      skip: false
      pattern: "^[A-Z][a-zA-Z0-9]*$"
      anti_pattern: "^[a-z]|_"
      applies_to:
        - classes
        - interfaces
      file_pattern: "**/*.cs"
      custom_validator: null
      message: "Class name must use PascalCase"
      fix_hint: "Rename with uppercase first letter"
      examples:
        good: "AccountService"
        bad: "accountservice"
      tags:
        - naming
        - convention"#;

const DISABLE_EXAMPLE: &str = r#"    - id: CS-NAME-001
      name: "Class/Interface Naming"
      enabled: false  # Disable this rule
      skip: true      # Also skip during scanning"#;

const VALIDATOR_EXAMPLE: &str = r#"    - id: CS-METHOD-002
      name: "Method Length"
      custom_validator: "Validators.ValidateMethodLength"
      parameters:
        max_lines: 50  # Custom parameter"#;

/// Lay out the detailed guide.
///
/// The table of contents lists the page each chapter starts on, which is only
/// known after layout. Layout is deterministic and the contents page takes
/// the same space whatever numbers it shows, so a draft pass finds the chapter
/// pages and a second pass prints them.
pub fn layout_detailed_guide(catalog: &Catalog, config: &LayoutConfig) -> Result<DisplayList, Error> {
    catalog.validate()?;

    let draft = layout_pass(catalog, config, None);
    let fin = layout_pass(catalog, config, Some(&draft.chapter_pages));
    if fin.chapter_pages != draft.chapter_pages {
        log::warn!("chapter pages moved between layout passes; contents may be off");
    }
    log::debug!(
        "detailed guide: {} pages, chapters start at {:?}",
        fin.pages.page_count(),
        fin.chapter_pages
    );
    Ok(fin.pages)
}

struct GuideLayout {
    pages: DisplayList,
    chapter_pages: Vec<usize>,
}

fn layout_pass(catalog: &Catalog, config: &LayoutConfig, toc: Option<&[usize]>) -> GuideLayout {
    let mut canvas = new_canvas(config, "RuleKeeper - Detailed Policy Guide");

    draw_title_page(&mut canvas);
    draw_contents(&mut canvas, catalog, toc);
    draw_introduction(&mut canvas);

    let mut chapter_pages = Vec::with_capacity(catalog.categories.len());
    for category in &catalog.categories {
        let at = canvas.new_page();
        chapter_pages.push(canvas.page_no());
        let mut at = chapter_title(&mut canvas, at, &category.display_name);
        for rule in &category.rules {
            at = draw_rule_block(&mut canvas, at, rule, config.rule_block_break_y);
        }
    }

    draw_appendix(&mut canvas);

    GuideLayout {
        pages: canvas.finish(),
        chapter_pages,
    }
}

fn chapter_title(canvas: &mut Canvas, cursor: Cursor, title: &str) -> Cursor {
    draw_heading(canvas, cursor, title, 16.0, 4.0)
}

fn section_title(canvas: &mut Canvas, cursor: Cursor, title: &str) -> Cursor {
    let style = TextStyle::new(Font::HelveticaBold, 12.0).color([51, 51, 51]);
    let at = canvas.draw_cell(cursor, &Cell::new(0.0, 8.0, title, style).next_line());
    canvas.line_feed(at, 2.0)
}

fn body_text(canvas: &mut Canvas, cursor: Cursor, text: &str) -> Cursor {
    let style = TextStyle::new(Font::Helvetica, 9.0);
    let at = canvas.draw_wrapped(cursor, &Cell::new(0.0, 5.0, text, style));
    canvas.line_feed(at, 2.0)
}

fn draw_title_page(canvas: &mut Canvas) {
    let at = canvas.new_page();
    let at = canvas.line_feed(at, 40.0);
    let at = draw_title_block(
        canvas,
        at,
        "Detailed Policy Guide",
        "Parallex Bank IT Coding Standards",
        10.0,
    );
    let at = canvas.line_feed(at, 20.0);
    let summary_style = TextStyle::new(Font::Helvetica, 10.0);
    let at = canvas.draw_wrapped(at, &Cell::new(0.0, 6.0, SUMMARY, summary_style).align(Align::Center));
    let at = canvas.line_feed(at, 10.0);
    let version = concat!("Version ", env!("CARGO_PKG_VERSION"));
    let version_style = TextStyle::new(Font::Helvetica, 9.0).color([128, 128, 128]);
    canvas.draw_cell(
        at,
        &Cell::new(0.0, 5.0, version, version_style)
            .align(Align::Center)
            .next_line(),
    );
}

/// `toc` is `None` in the draft pass; the page column stays empty.
fn draw_contents(canvas: &mut Canvas, catalog: &Catalog, toc: Option<&[usize]>) {
    let at = canvas.new_page();
    let at = chapter_title(canvas, at, "Table of Contents");
    let mut at = canvas.line_feed(at, 5.0);

    let name_style = TextStyle::new(Font::Helvetica, 10.0);
    let page_style = name_style.color(GREY);
    for (i, category) in catalog.categories.iter().enumerate() {
        let page = toc
            .and_then(|pages| pages.get(i))
            .map(|p| p.to_string())
            .unwrap_or_default();
        at = canvas.draw_cell(at, &Cell::new(150.0, 6.0, &category.display_name, name_style));
        at = canvas.draw_cell(at, &Cell::new(0.0, 6.0, &page, page_style).next_line());
    }
}

fn draw_introduction(canvas: &mut Canvas) {
    let at = canvas.new_page();
    let at = chapter_title(canvas, at, "Introduction");
    let at = body_text(canvas, at, INTRODUCTION);

    let at = section_title(canvas, at, "YAML Configuration Options");
    let at = body_text(canvas, at, OPTIONS_OVERVIEW);

    let at = section_title(canvas, at, "Severity Levels");
    draw_severity_legend(canvas, at, 7.0, 10.0, 1.0, Severity::long_meaning);
}

fn draw_appendix(canvas: &mut Canvas) {
    let at = canvas.new_page();
    let at = chapter_title(canvas, at, "Appendix: YAML Configuration Example");
    let at = draw_code_block(canvas, at, YAML_EXAMPLE, None);
    let at = canvas.line_feed(at, 5.0);

    let at = section_title(canvas, at, "Disabling a Rule");
    let at = draw_code_block(canvas, at, DISABLE_EXAMPLE, None);

    let at = section_title(canvas, at, "Using Custom Validator");
    draw_code_block(canvas, at, VALIDATOR_EXAMPLE, None);
}
