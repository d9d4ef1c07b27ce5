use std::collections::HashSet;

use serde::Deserialize;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Display order, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Strong accent used for chips and rule-box borders.
    pub fn color(self) -> [u8; 3] {
        match self {
            Severity::Critical => [220, 53, 69],
            Severity::High => [255, 153, 0],
            Severity::Medium => [255, 193, 7],
            Severity::Low => [40, 167, 69],
        }
    }

    /// Light background for table rows.
    pub fn row_fill(self) -> [u8; 3] {
        match self {
            Severity::Critical => [255, 230, 230],
            Severity::High => [255, 243, 224],
            Severity::Medium => [255, 249, 219],
            Severity::Low => [232, 245, 233],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    /// Four-character form used in narrow table columns.
    pub fn abbreviation(self) -> &'static str {
        let label = self.label();
        &label[..label.len().min(4)]
    }

    pub fn short_meaning(self) -> &'static str {
        match self {
            Severity::Critical => "Block deployment - Security/compliance risk",
            Severity::High => "Fix before deployment",
            Severity::Medium => "Address in current sprint",
            Severity::Low => "Best practice recommendation",
        }
    }

    pub fn long_meaning(self) -> &'static str {
        match self {
            Severity::Critical => {
                "Must be fixed immediately - security or compliance risk. Blocks deployment."
            }
            Severity::High => {
                "Should be fixed before deployment. Requires justification to override."
            }
            Severity::Medium => "Should be addressed in the current sprint. Warning only.",
            Severity::Low => "Best practice recommendation. Informational.",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub good_example: Option<String>,
    #[serde(default)]
    pub bad_example: Option<String>,
    #[serde(default)]
    pub fix_hint: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Category {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.categories.iter().flat_map(|c| c.rules.iter())
    }

    pub fn rule_count(&self) -> usize {
        self.categories.iter().map(|c| c.rules.len()).sum()
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", e, path.display()),
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// Checks required fields and id uniqueness. Must pass before any drawing starts.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen: HashSet<&str> = HashSet::new();
        for cat in &self.categories {
            if is_blank(&cat.id) {
                return Err(Error::MalformedCategory {
                    category: cat.display_name.clone(),
                    field: "id",
                });
            }
            if is_blank(&cat.display_name) {
                return Err(Error::MalformedCategory {
                    category: cat.id.clone(),
                    field: "display_name",
                });
            }
            for rule in &cat.rules {
                let missing = [
                    ("id", &rule.id),
                    ("name", &rule.name),
                    ("description", &rule.description),
                ]
                .into_iter()
                .find(|(_, value)| is_blank(value));
                if let Some((field, _)) = missing {
                    return Err(Error::MalformedRule {
                        category: cat.id.clone(),
                        rule: rule.id.clone(),
                        field,
                    });
                }
                if !seen.insert(rule.id.as_str()) {
                    return Err(Error::DuplicateRuleId(rule.id.clone()));
                }
            }
        }
        Ok(())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
