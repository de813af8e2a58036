//! Rule Attribution Types

use serde::{Deserialize, Serialize};

use crate::logic::intent::types::{Category, Intent};

// ============================================================================
// ATTRIBUTION SOURCE
// ============================================================================

/// Where the matched rule came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSource {
    /// Bundled static filter list
    Static,
    /// Persistent user domain-override rule
    Dynamic,
    /// Custom user network rule
    Custom,
    Unknown,
}

impl RuleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSource::Static => "static",
            RuleSource::Dynamic => "dynamic",
            RuleSource::Custom => "custom",
            RuleSource::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RuleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ATTRIBUTION
// ============================================================================

/// Human-readable provenance for why a request was blocked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleAttribution {
    /// Filter pattern text, e.g. `||doubleclick.net^`
    pub filter: String,
    /// Source list name shown in the UI
    pub list: String,
    /// Human description of what the rule targets
    pub description: String,
    pub source: RuleSource,
    pub intent: Intent,
    pub category: Category,
}

/// Static attribution table row
#[derive(Debug, Clone, Copy)]
pub struct StaticRule {
    pub rule_id: u32,
    pub filter: &'static str,
    pub list: &'static str,
    pub description: &'static str,
    pub intent: Intent,
}
