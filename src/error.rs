use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Output sink or catalog file could not be written/read.
    Io(std::io::Error),
    /// JSON catalog could not be decoded.
    Catalog(String),
    MalformedCategory {
        category: String,
        field: &'static str,
    },
    MalformedRule {
        category: String,
        rule: String,
        field: &'static str,
    },
    DuplicateRuleId(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Catalog(msg) => write!(f, "invalid catalog: {msg}"),
            Error::MalformedCategory { category, field } => {
                write!(f, "category '{category}': required field '{field}' is empty")
            }
            Error::MalformedRule {
                category,
                rule,
                field,
            } => write!(
                f,
                "rule '{rule}' in category '{category}': required field '{field}' is empty"
            ),
            Error::DuplicateRuleId(id) => write!(f, "rule id '{id}' is used more than once"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Catalog(e.to_string())
    }
}
