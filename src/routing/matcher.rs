//! Rule matching logic.
//!
//! # Responsibilities
//! - Find the rule answering a request path
//! - Report an explicit no-match so the caller picks the default response
//!
//! # Design Decisions
//! - Exact, case-sensitive comparison; no trimming, decoding or
//!   trailing-slash collapsing
//! - Linear scan in configuration order: the first rule wins and later
//!   duplicates are unreachable. A path-keyed map would lose that.
//! - The matcher only ever sees a path; query strings are stripped upstream

use crate::routing::rule::{Rule, RuleSet};

/// Returns the first rule whose path equals `request_path`, or `None`.
pub fn find_match<'a>(request_path: &str, rules: &'a RuleSet) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.path() == request_path)
}
