//! Optional clinical findings attached to a query.
//!
//! Findings are free text that is *expected* to be JSON (an object or an
//! array of objects with fields such as `tooth`, `bone_loss_pct`,
//! `furcation_class`, `mobility`). The remote assistant owns interpretation,
//! so the text is always forwarded verbatim. The local check only produces
//! user feedback and never blocks a query.

use serde::Serialize;
use thiserror::Error;

/// Raw findings text, kept byte-for-byte as the user supplied it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    raw: String,
}

impl Findings {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// No findings supplied.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn check(&self) -> FindingsCheck {
        check_findings_syntax(&self.raw)
    }
}

/// Why findings text did not look like observation records.
///
/// Always a warning; the text is still sent.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingsIssue {
    #[error("findings are not valid JSON (line {line}, column {column}): {message}")]
    InvalidSyntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("findings are valid JSON but a {found} rather than an object or array of objects")]
    UnexpectedShape { found: &'static str },
}

/// Outcome of the local findings check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FindingsCheck {
    /// Nothing (or only whitespace) was supplied.
    Absent,
    /// Parsed as observation records; `entries` counts them.
    Valid { entries: usize },
    /// Present but not parseable as observation records.
    Invalid { issue: FindingsIssue },
}

impl FindingsCheck {
    pub fn is_warning(&self) -> bool {
        matches!(self, FindingsCheck::Invalid { .. })
    }

    pub fn issue(&self) -> Option<&FindingsIssue> {
        match self {
            FindingsCheck::Invalid { issue } => Some(issue),
            _ => None,
        }
    }
}

/// Check whether `findings` parses as an object or an array of objects.
pub fn check_findings_syntax(findings: &str) -> FindingsCheck {
    if findings.trim().is_empty() {
        return FindingsCheck::Absent;
    }

    let value: serde_json::Value = match serde_json::from_str(findings) {
        Ok(v) => v,
        Err(e) => {
            return FindingsCheck::Invalid {
                issue: FindingsIssue::InvalidSyntax {
                    line: e.line(),
                    column: e.column(),
                    message: e.to_string(),
                },
            };
        }
    };

    match value {
        serde_json::Value::Object(_) => FindingsCheck::Valid { entries: 1 },
        serde_json::Value::Array(items) => {
            match items.iter().find(|item| !item.is_object()) {
                Some(other) => FindingsCheck::Invalid {
                    issue: FindingsIssue::UnexpectedShape {
                        found: shape_name(other),
                    },
                },
                None => FindingsCheck::Valid {
                    entries: items.len(),
                },
            }
        }
        other => FindingsCheck::Invalid {
            issue: FindingsIssue::UnexpectedShape {
                found: shape_name(&other),
            },
        },
    }
}

fn shape_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "nested array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_when_empty_or_whitespace() {
        assert_eq!(check_findings_syntax(""), FindingsCheck::Absent);
        assert_eq!(check_findings_syntax("  \n "), FindingsCheck::Absent);
        assert_eq!(Findings::none().check(), FindingsCheck::Absent);
    }

    #[test]
    fn test_array_of_records_is_valid() {
        let raw = r#"[{"tooth":"30","bone_loss_pct":40,"furcation_class":"II","mobility":"Class I","diabetes":true},
                     {"tooth":"19","CAL_mm":5}]"#;
        assert_eq!(
            check_findings_syntax(raw),
            FindingsCheck::Valid { entries: 2 }
        );
    }

    #[test]
    fn test_single_object_is_valid() {
        assert_eq!(
            check_findings_syntax(r#"{"tooth":"14","mobility":"Class II"}"#),
            FindingsCheck::Valid { entries: 1 }
        );
    }

    #[test]
    fn test_broken_json_is_warning_with_position() {
        let check = check_findings_syntax("[{\"tooth\": \"30\",}");
        assert!(check.is_warning());
        match check.issue() {
            Some(FindingsIssue::InvalidSyntax { line, .. }) => assert_eq!(*line, 1),
            other => panic!("expected InvalidSyntax, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_is_unexpected_shape() {
        assert_eq!(
            check_findings_syntax("42"),
            FindingsCheck::Invalid {
                issue: FindingsIssue::UnexpectedShape { found: "number" }
            }
        );
        assert_eq!(
            check_findings_syntax(r#"[{"tooth":"3"}, "loose"]"#),
            FindingsCheck::Invalid {
                issue: FindingsIssue::UnexpectedShape { found: "string" }
            }
        );
    }

    #[test]
    fn test_check_does_not_alter_raw_text() {
        let raw = "tooth 30: 40% bone loss, furcation II";
        let findings = Findings::new(raw);
        assert!(findings.check().is_warning());
        assert_eq!(findings.as_str(), raw);
    }

    #[test]
    fn test_serialize_check() {
        let json = serde_json::to_value(FindingsCheck::Valid { entries: 3 }).unwrap();
        assert_eq!(json["status"], "valid");
        assert_eq!(json["entries"], 3);
    }
}
