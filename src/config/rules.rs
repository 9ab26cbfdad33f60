//! Rules document wire format.
//!
//! ```text
//! { "rules": [ { "path": "/api/users", "response": {...}, "code": 200 }, ... ] }
//! ```
//!
//! `path` is required; `response` defaults to `{}` and `code` to `0`.
//! Unknown fields are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::routing::{Rule, RuleSet};

/// Top-level rules document.
#[derive(Debug, Deserialize)]
pub struct RulesDocument {
    pub rules: Vec<RuleEntry>,
}

/// One element of the `rules` array.
#[derive(Debug, Deserialize)]
pub struct RuleEntry {
    pub path: String,

    #[serde(default = "empty_object")]
    pub response: Value,

    #[serde(default)]
    pub code: i64,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl From<RuleEntry> for Rule {
    fn from(entry: RuleEntry) -> Self {
        Rule::new(entry.path, entry.response, entry.code)
    }
}

impl From<RulesDocument> for RuleSet {
    fn from(doc: RulesDocument) -> Self {
        doc.rules.into_iter().map(Rule::from).collect::<Vec<_>>().into()
    }
}

/// Parse a rules document into an ordered rule set.
pub fn parse_rules(bytes: &[u8]) -> Result<RuleSet, serde_json::Error> {
    let doc: RulesDocument = serde_json::from_slice(bytes)?;
    Ok(doc.into())
}
