//! URL canonicalization subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → query.rs (decode query string into a map)
//!     → rules.rs (ordered rule list, first match wins)
//!         legacy pass:   .html suffix → ?page= parameter
//!         shortcut pass: /home|/index → /tour(s)/slug → /blogs|/articles/slug
//!     → Return: Decision::PassThrough or Decision::Redirect (301)
//!
//! Table Construction (at startup):
//!     built-in tables + [redirects] config
//!     → tables.rs (RedirectTables)
//!     → Freeze behind Arc, shared by every request
//! ```
//!
//! # Design Decisions
//! - Tables are immutable after construction (no locks on the hot path)
//! - The canonicalizer is a pure function of (path, query)
//! - Rule order is data, not control flow: each rule is testable on its own
//! - Every redirect is permanent (301)

pub mod query;
pub mod rules;
pub mod tables;

pub use query::parse_query;
pub use rules::{Canonicalizer, Decision, Pass, Redirect, RequestTarget, Rule, RuleOrderError};
pub use tables::{LegacyPathMap, QueryPageMap, RedirectTables};
