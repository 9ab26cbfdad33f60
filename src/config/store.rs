//! Rule set storage.
//!
//! Holds the current [`RuleSet`] snapshot behind an [`ArcSwap`]. A load
//! parses the whole document first and only then swaps the pointer, so
//! readers see either the previous snapshot or the new one, never a mix,
//! and a failed load leaves the previous snapshot in place.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::loader::ConfigError;
use crate::config::rules::parse_rules;
use crate::routing::RuleSet;

/// Owner of the active rule set.
#[derive(Debug)]
pub struct ConfigStore {
    current: ArcSwap<RuleSet>,
}

impl ConfigStore {
    /// Create a store holding an empty rule set.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(RuleSet::default()),
        }
    }

    /// Parse `bytes` and replace the current rule set with the result.
    ///
    /// `origin` names the byte source (a file path, usually) for error
    /// reporting.
    pub fn load(&self, origin: impl Into<String>, bytes: &[u8]) -> Result<Arc<RuleSet>, ConfigError> {
        let rules = parse_rules(bytes).map_err(|error| ConfigError::Parse {
            origin: origin.into(),
            error,
        })?;

        let rules = Arc::new(rules);
        self.current.store(Arc::clone(&rules));
        Ok(rules)
    }

    /// The current rule set snapshot.
    pub fn get(&self) -> Arc<RuleSet> {
        self.current.load_full()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RuleSet> for ConfigStore {
    fn from(rules: RuleSet) -> Self {
        Self {
            current: ArcSwap::from_pointee(rules),
        }
    }
}
