//! Domain/Intent Classification
//!
//! Pure URL -> (intent, category) classification: ordered known-domain
//! tables with heuristic regex fallbacks.

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::classify;
pub use types::{Category, Classification, Intent};
