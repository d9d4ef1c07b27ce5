mod common;

use std::collections::HashSet;
use std::path::Path;

use rulekeeper_docs::{Catalog, Error, Severity};

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    catalog.validate().expect("built-in catalog validates");
    assert_eq!(catalog.categories.len(), 22);
    assert_eq!(catalog.rule_count(), 85);

    let ids: HashSet<&str> = catalog.rules().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 85);

    let detailed = catalog.rules().filter(|r| r.good_example.is_some()).count();
    assert_eq!(detailed, 15);
    let first = catalog.rules().next().expect("at least one rule");
    assert_eq!(first.id, "CS-NAME-001");
    assert!(first.pattern.is_some());
}

#[test]
fn severity_presentation() {
    assert_eq!(Severity::Critical.abbreviation(), "CRIT");
    assert_eq!(Severity::Medium.abbreviation(), "MEDI");
    assert_eq!(Severity::Low.abbreviation(), "LOW");
    assert_eq!(Severity::High.label(), "HIGH");
    assert_eq!(Severity::Critical.color(), [220, 53, 69]);
    assert_eq!(Severity::Low.row_fill(), [232, 245, 233]);
}

#[test]
fn duplicate_rule_id_is_rejected() {
    let catalog = Catalog::new(vec![
        common::category("a", vec![common::rule("DUP-001", Severity::High)]),
        common::category("b", vec![common::rule("DUP-001", Severity::Low)]),
    ]);
    match catalog.validate() {
        Err(Error::DuplicateRuleId(id)) => assert_eq!(id, "DUP-001"),
        other => panic!("expected DuplicateRuleId, got {other:?}"),
    }
}

#[test]
fn blank_required_field_is_rejected() {
    let mut rule = common::rule("CS-X-001", Severity::High);
    rule.name = "   ".into();
    let catalog = Catalog::new(vec![common::category("x", vec![rule])]);
    match catalog.validate() {
        Err(Error::MalformedRule { category, rule, field }) => {
            assert_eq!(category, "x");
            assert_eq!(rule, "CS-X-001");
            assert_eq!(field, "name");
        }
        other => panic!("expected MalformedRule, got {other:?}"),
    }

    let mut category = common::category("y", vec![]);
    category.display_name.clear();
    match Catalog::new(vec![category]).validate() {
        Err(Error::MalformedCategory { field, .. }) => assert_eq!(field, "display_name"),
        other => panic!("expected MalformedCategory, got {other:?}"),
    }
}

#[test]
fn json_catalog_loads_with_optional_fields() {
    let json = r#"{
        "categories": [
            {
                "id": "naming",
                "display_name": "Naming Conventions",
                "rules": [
                    {
                        "id": "N-001",
                        "name": "Class Naming",
                        "description": "Classes must use PascalCase",
                        "severity": "high",
                        "pattern": "^[A-Z]",
                        "fix_hint": "Capitalise"
                    },
                    {
                        "id": "N-002",
                        "name": "Method Naming",
                        "description": "Methods must use PascalCase",
                        "severity": "low"
                    }
                ]
            }
        ]
    }"#;
    let catalog = Catalog::from_json_str(json).expect("valid catalog");
    assert_eq!(catalog.rule_count(), 2);
    let rules: Vec<_> = catalog.rules().collect();
    assert_eq!(rules[0].severity, Severity::High);
    assert_eq!(rules[0].pattern.as_deref(), Some("^[A-Z]"));
    assert_eq!(rules[0].good_example, None);
    assert_eq!(rules[1].severity, Severity::Low);
    assert_eq!(rules[1].fix_hint, None);
}

#[test]
fn json_catalog_errors() {
    let bad_severity = r#"{"categories": [{"id": "c", "display_name": "C", "rules": [
        {"id": "R-1", "name": "n", "description": "d", "severity": "urgent"}]}]}"#;
    assert!(matches!(
        Catalog::from_json_str(bad_severity),
        Err(Error::Catalog(_))
    ));

    let duplicate = r#"{"categories": [{"id": "c", "display_name": "C", "rules": [
        {"id": "R-1", "name": "n", "description": "d", "severity": "low"},
        {"id": "R-1", "name": "m", "description": "e", "severity": "low"}]}]}"#;
    assert!(matches!(
        Catalog::from_json_str(duplicate),
        Err(Error::DuplicateRuleId(_))
    ));

    let missing = Path::new("tests/does-not-exist/catalog.json");
    match Catalog::from_json_file(missing) {
        Err(e @ Error::Io(_)) => assert!(e.to_string().contains("catalog.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}
