use std::borrow::Cow;

use crate::config::LayoutConfig;
use crate::error::Error;
use crate::fonts::Font;
use crate::layout::{
    Align, Canvas, Cell, Column, DisplayList, TableRow, TableSpec, TextStyle,
    draw_columns, draw_table,
};
use crate::model::{Catalog, Rule, Severity};

use super::{draw_heading, draw_severity_legend, draw_title_block, new_canvas};

const INTRO: &str = "This document provides a quick reference lookup for all RuleKeeper policies. \
Use this guide when modifying the rulekeeper.yaml configuration file.";

const CONFIG_OPTIONS: [[&str; 3]; 18] = [
    ["id", "string", "Unique identifier for the rule"],
    ["name", "string", "Human-readable rule name"],
    ["description", "string", "Detailed description of what the rule enforces"],
    ["severity", "critical|high|medium|low", "Severity level of violations"],
    ["enabled", "true|false", "Whether the rule is active"],
    ["skip", "true|false", "Skip this rule during scanning"],
    ["pattern", "regex", "Regex pattern for matching valid code"],
    ["anti_pattern", "regex", "Regex pattern that indicates violations"],
    ["applies_to", "list", "Code elements this rule applies to"],
    ["file_pattern", "glob", "Glob pattern for files to scan"],
    ["custom_validator", "string", "Name of custom validation function"],
    ["prebuilt", "string", "Reference to prebuilt policy template"],
    ["message", "string", "Custom message on violation"],
    ["fix_hint", "string", "Suggestion for fixing the violation"],
    ["examples.good", "string", "Example of correct code"],
    ["examples.bad", "string", "Example of incorrect code"],
    ["tags", "list", "Tags for categorization"],
    ["parameters", "object", "Additional parameters for validators"],
];

const PREBUILT_TEMPLATES: [[&str; 3]; 4] = [
    [
        "dotnet_naming",
        "Standard .NET naming conventions",
        "CS-NAME-001 through CS-NAME-007",
    ],
    [
        "security_essentials",
        "Essential security rules for financial apps",
        "CS-SEC-001-005, CS-CFG-001-002, API-AUTH-001-002, API-SAN-001",
    ],
    [
        "async_best_practices",
        "Async/await best practices",
        "CS-ASYNC-001 through CS-ASYNC-003",
    ],
    [
        "api_security",
        "API security standards",
        "API-CORS-001, API-VAL-001, API-ENC-001, API-AUTH-001-002, API-RATE-001",
    ],
];

const CUSTOM_VALIDATORS: [[&str; 2]; 8] = [
    ["ValidatePasswordComplexity", "Validates password meets complexity requirements"],
    ["ValidateAccountNumber", "Validates account number format"],
    ["ScanForSecrets", "Scans for potential secrets in code"],
    ["DetectSqlInjection", "Detects potential SQL injection vulnerabilities"],
    ["DetectSensitiveLogging", "Detects sensitive data in log statements"],
    ["ValidateSingleClassPerFile", "Validates one class per file"],
    ["ValidateMethodLength", "Validates method length constraints"],
    ["ValidateCyclomaticComplexity", "Validates cyclomatic complexity"],
];

impl TableRow for Rule {
    fn cell(&self, column: usize) -> Cow<'_, str> {
        match column {
            0 => Cow::Borrowed(&self.id),
            1 => Cow::Borrowed(&self.name),
            2 => Cow::Borrowed(&self.description),
            3 => Cow::Borrowed(self.severity.abbreviation()),
            _ => Cow::Borrowed(""),
        }
    }
}

/// Lay out the compact lookup document: title page, one table per category,
/// configuration reference tables and the complete id index.
pub fn layout_quick_reference(catalog: &Catalog, config: &LayoutConfig) -> Result<DisplayList, Error> {
    catalog.validate()?;

    let mut canvas = new_canvas(config, "RuleKeeper - Quick Reference");
    draw_title_page(&mut canvas);

    let rule_table = TableSpec::new(vec![
        Column::new(28.0, "ID"),
        Column::new(45.0, "Name").budget(config.name_budget),
        Column::new(100.0, "Description").budget(config.description_budget),
        Column::new(17.0, "Severity").align(Align::Center),
    ])
    .body_style(TextStyle::new(Font::Helvetica, 7.0));

    for category in &catalog.categories {
        let at = canvas.new_page();
        let at = draw_heading(&mut canvas, at, &category.display_name, 14.0, 2.0);
        draw_table(&mut canvas, at, &rule_table, &category.rules, |rule| {
            Some(rule.severity.row_fill())
        });
    }

    draw_reference_tables(&mut canvas);
    draw_id_index(&mut canvas, catalog, config);

    Ok(canvas.finish())
}

fn draw_title_page(canvas: &mut Canvas) {
    let at = canvas.new_page();
    let at = canvas.line_feed(at, 50.0);
    let at = draw_title_block(
        canvas,
        at,
        "Policy Quick Reference",
        "Complete Policy Lookup Guide",
        10.0,
    );
    let at = canvas.line_feed(at, 30.0);
    let intro_style = TextStyle::new(Font::Helvetica, 10.0);
    let at = canvas.draw_wrapped(at, &Cell::new(0.0, 6.0, INTRO, intro_style).align(Align::Center));
    let at = canvas.line_feed(at, 20.0);

    let legend_style = TextStyle::new(Font::HelveticaBold, 11.0);
    let at = canvas.draw_cell(at, &Cell::new(0.0, 8.0, "Severity Levels:", legend_style).next_line());
    let at = canvas.line_feed(at, 2.0);
    draw_severity_legend(canvas, at, 6.0, 9.0, 0.0, Severity::short_meaning);
}

fn draw_reference_tables(canvas: &mut Canvas) {
    let at = canvas.new_page();
    let at = draw_heading(canvas, at, "YAML Configuration Options", 14.0, 2.0);
    let options = TableSpec::new(vec![
        Column::new(40.0, "Option"),
        Column::new(45.0, "Type"),
        Column::new(105.0, "Description"),
    ]);
    draw_table(canvas, at, &options, &CONFIG_OPTIONS, |_| None);

    let at = canvas.new_page();
    let at = draw_heading(canvas, at, "Prebuilt Policy Templates", 14.0, 2.0);
    let templates = TableSpec::new(vec![
        Column::new(40.0, "Template"),
        Column::new(60.0, "Description"),
        Column::new(90.0, "Includes"),
    ]);
    let at = draw_table(canvas, at, &templates, &PREBUILT_TEMPLATES, |_| None);

    let at = canvas.line_feed(at, 10.0);
    let at = draw_heading(canvas, at, "Custom Validators", 14.0, 2.0);
    let validators = TableSpec::new(vec![
        Column::new(60.0, "Validator"),
        Column::new(130.0, "Description"),
    ]);
    draw_table(canvas, at, &validators, &CUSTOM_VALIDATORS, |_| None);
}

fn draw_id_index(canvas: &mut Canvas, catalog: &Catalog, config: &LayoutConfig) {
    let at = canvas.new_page();
    draw_heading(canvas, at, "Complete Policy ID List", 14.0, 2.0);

    let rules: Vec<&Rule> = catalog.rules().collect();
    let name_chars = config.index_name_chars;
    let placed = draw_columns(
        canvas,
        &config.index_grid,
        &rules,
        TextStyle::new(Font::Courier, 7.0),
        |rule| {
            let name: String = rule.name.chars().take(name_chars).collect();
            format!("{}: {}", rule.id, name)
        },
    );
    if placed < rules.len() {
        log::warn!("id index dropped {} of {} rules", rules.len() - placed, rules.len());
    }
}
