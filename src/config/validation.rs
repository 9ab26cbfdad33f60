//! Rule set linting.
//!
//! # Responsibilities
//! - Flag rules that can never be served (empty path, shadowed duplicates)
//! - Flag statuses that cannot be written as an HTTP status line
//!
//! # Design Decisions
//! - Lints are warnings only; a parsed rule set is always accepted
//! - Returns every warning, not just the first
//! - Pure function: &RuleSet → Vec<RuleWarning>

use std::collections::HashMap;
use std::fmt;

use crate::routing::RuleSet;

/// Something suspicious about a loaded rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleWarning {
    /// Rule has an empty path and no request can reach it.
    EmptyPath { index: usize },
    /// Rule repeats the path of an earlier rule and is never selected.
    Shadowed {
        index: usize,
        shadowed_by: usize,
        path: String,
    },
    /// Rule status cannot be sent on the wire.
    InvalidStatus { index: usize, status: i64 },
}

impl fmt::Display for RuleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleWarning::EmptyPath { index } => {
                write!(f, "rule #{index} has an empty path and is unreachable")
            }
            RuleWarning::Shadowed { index, shadowed_by, path } => write!(
                f,
                "rule #{index} for path '{path}' is shadowed by rule #{shadowed_by}"
            ),
            RuleWarning::InvalidStatus { index, status } => write!(
                f,
                "rule #{index} has status {status}, which will be served as 500"
            ),
        }
    }
}

/// Whether `status` can be sent as the status of a final response.
///
/// 1xx codes are informational and hyper refuses them as a final status.
pub fn is_wire_status(status: i64) -> bool {
    (200..=999).contains(&status)
}

/// Collect every warning for `rules`.
pub fn lint_rules(rules: &RuleSet) -> Vec<RuleWarning> {
    let mut warnings = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, rule) in rules.iter().enumerate() {
        if rule.path().is_empty() {
            warnings.push(RuleWarning::EmptyPath { index });
        } else if let Some(&shadowed_by) = first_seen.get(rule.path()) {
            warnings.push(RuleWarning::Shadowed {
                index,
                shadowed_by,
                path: rule.path().to_string(),
            });
        } else {
            first_seen.insert(rule.path(), index);
        }

        // 0 is the "use default" sentinel
        if rule.status() != 0 && !is_wire_status(rule.status()) {
            warnings.push(RuleWarning::InvalidStatus {
                index,
                status: rule.status(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Rule;
    use serde_json::json;

    #[test]
    fn test_clean_rules() {
        let rules = RuleSet::from(vec![
            Rule::new("/a", json!({}), 0),
            Rule::new("/b", json!({}), 404),
        ]);
        assert!(lint_rules(&rules).is_empty());
    }

    #[test]
    fn test_reports_all_warnings() {
        let rules = RuleSet::from(vec![
            Rule::new("/a", json!({}), 200),
            Rule::new("", json!({}), 0),
            Rule::new("/a", json!({}), 500),
            Rule::new("/b", json!({}), -1),
            Rule::new("/a", json!({}), 0),
            Rule::new("/c", json!({}), 100),
        ]);

        assert_eq!(
            lint_rules(&rules),
            vec![
                RuleWarning::EmptyPath { index: 1 },
                RuleWarning::Shadowed {
                    index: 2,
                    shadowed_by: 0,
                    path: "/a".into()
                },
                RuleWarning::InvalidStatus { index: 3, status: -1 },
                RuleWarning::Shadowed {
                    index: 4,
                    shadowed_by: 0,
                    path: "/a".into()
                },
                RuleWarning::InvalidStatus { index: 5, status: 100 },
            ]
        );
    }

    #[test]
    fn test_wire_status_range() {
        assert!(is_wire_status(200));
        assert!(is_wire_status(999));
        assert!(!is_wire_status(100));
        assert!(!is_wire_status(101));
        assert!(!is_wire_status(199));
        assert!(!is_wire_status(99));
        assert!(!is_wire_status(1000));
        assert!(!is_wire_status(0));
    }

    #[test]
    fn test_warning_messages() {
        let warning = RuleWarning::Shadowed {
            index: 2,
            shadowed_by: 0,
            path: "/a".into(),
        };
        assert_eq!(warning.to_string(), "rule #2 for path '/a' is shadowed by rule #0");
    }
}
