//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path, query)
//!     → resolver.rs (pipeline, event reporting)
//!     → matcher.rs (first rule with an equal path)
//!     → synthesizer.rs (status defaulting, default response)
//!     → Return: Resolution (status, body)
//! ```
//!
//! # Design Decisions
//! - Rules are loaded once and immutable at runtime
//! - No regex, no prefixes, no templates: exact path equality only
//! - Deterministic: same input always resolves to the same response
//! - First match wins (configuration order)

pub mod matcher;
pub mod resolver;
pub mod rule;
pub mod synthesizer;

pub use matcher::find_match;
pub use resolver::{flatten_params, InboundRequest, QueryParams, Resolver};
pub use rule::{Rule, RuleSet};
pub use synthesizer::{default_response, from_rule, Resolution, DEFAULT_STATUS};
