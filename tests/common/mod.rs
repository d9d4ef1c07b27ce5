#![allow(dead_code)]

use std::path::PathBuf;

use rulekeeper_docs::layout::{Canvas, DisplayList, DrawOp, Page, PageGeometry, PlainPages};
use rulekeeper_docs::{Catalog, Category, Rule, Severity};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rule(id: &str, severity: Severity) -> Rule {
    Rule {
        id: id.to_string(),
        name: format!("Rule {id}"),
        description: format!("Description of {id}"),
        severity,
        pattern: None,
        good_example: None,
        bad_example: None,
        fix_hint: None,
    }
}

/// Rule with every optional field present.
pub fn detailed_rule(id: &str, severity: Severity) -> Rule {
    Rule {
        pattern: Some("^[A-Z][a-zA-Z0-9]*$".into()),
        good_example: Some("public class AccountService { }".into()),
        bad_example: Some("public class accountservice { }".into()),
        fix_hint: Some("Rename with an uppercase first letter".into()),
        ..rule(id, severity)
    }
}

pub fn category(id: &str, rules: Vec<Rule>) -> Category {
    Category {
        id: id.to_string(),
        display_name: format!("Category {id}"),
        rules,
    }
}

/// `n` categories with `per_category` rules each, ids unique across the catalog.
pub fn catalog(n: usize, per_category: usize) -> Catalog {
    let categories = (0..n)
        .map(|c| {
            let rules = (0..per_category)
                .map(|r| rule(&format!("T-{c:02}-{r:03}"), Severity::ALL[r % 4]))
                .collect();
            category(&format!("cat_{c}"), rules)
        })
        .collect();
    Catalog::new(categories)
}

/// Canvas without header or footer: content starts at the top margin.
pub fn plain_canvas() -> Canvas {
    canvas_with(PageGeometry::default())
}

pub fn canvas_with(geometry: PageGeometry) -> Canvas {
    Canvas::new(
        DisplayList::new(geometry.width, geometry.height),
        geometry,
        Box::new(PlainPages),
    )
}

/// (text, y of its baseline) for every text on the page.
pub fn texts_with_baselines(page: &Page) -> Vec<(&str, f32)> {
    page.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, baseline, .. } => Some((text.as_str(), *baseline)),
            _ => None,
        })
        .collect()
}

/// Lowest point reached by any rectangle on the page.
pub fn lowest_rect_bottom(page: &Page) -> f32 {
    page.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { y, h, .. } | DrawOp::StrokeRect { y, h, .. } => Some(y + h),
            _ => None,
        })
        .fold(0.0, f32::max)
}

/// Fresh scratch directory under tests/output/.
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create output dir");
    dir
}
