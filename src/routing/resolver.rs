//! Request resolution pipeline.
//!
//! # Data Flow
//! ```text
//! InboundRequest (method, path, query multi-map)
//!     → flatten query (first value per key)
//!     → sink.request
//!     → store snapshot → matcher
//!         match    → sink.matched  → synthesizer::from_rule
//!         no match → sink.no_match → synthesizer::default_response
//!     → sink.response
//!     → Resolution (status, body)
//! ```
//!
//! The method is carried for observability only; it never influences which
//! rule is selected.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::ConfigStore;
use crate::observability::events::{EventSink, FlatParams};
use crate::routing::matcher::find_match;
use crate::routing::synthesizer::{default_response, from_rule, Resolution};

/// Query parameters as received: every value for every key, in source order.
pub type QueryParams = IndexMap<String, Vec<String>>;

/// What the transport hands to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundRequest {
    pub method: String,
    pub path: String,
    pub query: QueryParams,
}

impl InboundRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: QueryParams::new(),
        }
    }

    /// Append a query value, keeping earlier values for the same key.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.entry(key.into()).or_default().push(value.into());
        self
    }
}

/// Keep the first value of every key; later duplicates are dropped.
pub fn flatten_params(query: &QueryParams) -> FlatParams {
    query
        .iter()
        .filter_map(|(key, values)| values.first().map(|value| (key.clone(), value.clone())))
        .collect()
}

/// Resolves inbound requests against the current rule set.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<ConfigStore>,
    sink: Arc<dyn EventSink>,
}

impl Resolver {
    pub fn new(store: Arc<ConfigStore>, sink: Arc<dyn EventSink>) -> Self {
        Self { store, sink }
    }

    /// The store this resolver reads from.
    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Resolve a request to its response.
    pub fn resolve(&self, request: &InboundRequest) -> Resolution {
        let params = flatten_params(&request.query);
        self.sink.request(&request.method, &request.path, &params);

        let rules = self.store.get();
        let resolution = match find_match(&request.path, &rules) {
            Some(rule) => {
                self.sink.matched(rule.path(), rule.status());
                from_rule(rule)
            }
            None => {
                self.sink.no_match();
                default_response()
            }
        };

        self.sink.response(resolution.status, &resolution.body);
        resolution
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("rules", &self.store.get().len())
            .finish_non_exhaustive()
    }
}
