//! Mock rule model.
//!
//! # Design Decisions
//! - Rules are immutable after construction; fields are private
//! - The response body is held behind an `Arc` so every request served
//!   from the same rule shares one allocation
//! - A status of `0` is a sentinel for "use the default status" and is
//!   stored as-is; the synthesizer resolves it

use std::sync::Arc;

use serde_json::Value;

/// A single mapping from an exact request path to a canned response.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    path: String,
    response: Arc<Value>,
    status: i64,
}

impl Rule {
    /// Create a new rule.
    pub fn new(path: impl Into<String>, response: Value, status: i64) -> Self {
        Self {
            path: path.into(),
            response: Arc::new(response),
            status,
        }
    }

    /// The exact path this rule answers.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The configured response body.
    pub fn response(&self) -> &Arc<Value> {
        &self.response
    }

    /// The configured status code, `0` when none was given.
    pub fn status(&self) -> i64 {
        self.status
    }
}

/// Ordered collection of rules.
///
/// Order is significant: the earliest rule for a path shadows every later
/// rule with the same path. The set is never sorted, deduplicated or keyed
/// by path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Iterate rules in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_accessors() {
        let rule = Rule::new("/api/users", json!({"users": ["alice"]}), 201);
        assert_eq!(rule.path(), "/api/users");
        assert_eq!(rule.status(), 201);
        assert_eq!(**rule.response(), json!({"users": ["alice"]}));
    }

    #[test]
    fn test_cloned_rule_shares_body() {
        let rule = Rule::new("/a", json!({"big": [1, 2, 3]}), 0);
        let copy = rule.clone();
        assert!(Arc::ptr_eq(rule.response(), copy.response()));
    }

    #[test]
    fn test_rule_set_preserves_order() {
        let set = RuleSet::from(vec![
            Rule::new("/b", json!({}), 0),
            Rule::new("/a", json!({}), 0),
            Rule::new("/b", json!({}), 404),
        ]);
        let paths: Vec<&str> = set.iter().map(Rule::path).collect();
        assert_eq!(paths, vec!["/b", "/a", "/b"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(2).map(Rule::status), Some(404));
    }
}
