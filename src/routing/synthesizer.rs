//! Response synthesis.
//!
//! Turns a matched rule, or the absence of one, into a `(status, body)`
//! pair. Both operations are total.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::routing::rule::Rule;

/// Status used when a rule carries no status and for the default response.
pub const DEFAULT_STATUS: i64 = 200;

/// A resolved response, ready to hand to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub status: i64,
    pub body: Arc<Value>,
}

/// Build the response for a matched rule.
///
/// A status of `0` becomes [`DEFAULT_STATUS`]; every other value, negative
/// ones included, passes through. The body is the rule's own, shared.
pub fn from_rule(rule: &Rule) -> Resolution {
    let status = match rule.status() {
        0 => DEFAULT_STATUS,
        status => status,
    };

    Resolution {
        status,
        body: Arc::clone(rule.response()),
    }
}

/// The fixed response used when no rule matches: `200` and `{}`.
pub fn default_response() -> Resolution {
    Resolution {
        status: DEFAULT_STATUS,
        body: Arc::new(Value::Object(Map::new())),
    }
}
