//! Rule Attribution
//!
//! Resolves matched rule ids to human-readable provenance: filter
//! pattern, source list, description.

pub mod resolver;
pub mod rules;
pub mod types;

pub use resolver::attribute;
pub use types::{RuleAttribution, RuleSource};
