//! Session Types
//!
//! Data structures for the per-tab session state: events, derived log
//! entries, rolling stats, and the tracker graph. No logic here beyond
//! trivial constructors.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::constants::{
    SAVINGS_DEFAULT_MS, SAVINGS_IMAGE_MS, SAVINGS_SCRIPT_MS, SAVINGS_SUBFRAME_MS, SAVINGS_XHR_MS,
};
use crate::logic::attribution::types::RuleAttribution;
use crate::logic::intent::types::{Category, Intent};

/// Tab identifier. Negative values conventionally denote non-tab
/// contexts (service workers, background fetches) and never reach the
/// store - the ingress filters them.
pub type TabId = i64;

// ============================================================================
// RESOURCE TYPE
// ============================================================================

/// WebExtension resource types, serialized with their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Script,
    Image,
    SubFrame,
    #[serde(rename = "xmlhttprequest")]
    Xhr,
    Font,
    Media,
    Object,
    Stylesheet,
    Websocket,
    MainFrame,
    Other,
}

impl ResourceType {
    /// Estimated load-time saved by blocking a request of this type.
    pub fn savings_ms(&self) -> u64 {
        match self {
            ResourceType::Script => SAVINGS_SCRIPT_MS,
            ResourceType::SubFrame => SAVINGS_SUBFRAME_MS,
            ResourceType::Xhr => SAVINGS_XHR_MS,
            ResourceType::Image => SAVINGS_IMAGE_MS,
            _ => SAVINGS_DEFAULT_MS,
        }
    }
}

// ============================================================================
// REQUEST EVENT (input)
// ============================================================================

/// Request outcome as reported by the interceptor / passive observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Blocked,
    Allowed,
}

/// One observed network request, as delivered by a collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEvent {
    pub tab_id: TabId,
    pub url: String,
    #[serde(default)]
    pub frame_url: Option<String>,
    pub resource_type: ResourceType,
    /// Wall-clock epoch milliseconds
    pub timestamp: u64,
    pub outcome: Outcome,
    /// Present for blocked events only
    #[serde(default)]
    pub rule_id: Option<u32>,
    #[serde(default)]
    pub ruleset_id: Option<String>,
    /// Present for allowed events only
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub from_cache: bool,
}

// ============================================================================
// LOG ENTRY (derived)
// ============================================================================

/// Fully classified log entry, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub url: String,
    pub domain: String,
    #[serde(default)]
    pub frame_url: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub timestamp: u64,
    pub category: Category,
    pub intent: Intent,
    pub false_positive: bool,
    #[serde(default)]
    pub fp_reason: Option<String>,
    #[serde(default)]
    pub rule_id: Option<u32>,
    #[serde(default)]
    pub ruleset_id: Option<String>,
    /// Blocked entries only
    #[serde(default)]
    pub attribution: Option<RuleAttribution>,
    /// Allowed entries only
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub from_cache: bool,
}

// ============================================================================
// STATS
// ============================================================================

/// Rolling per-tab counters.
///
/// `blocked` and the category counters are monotonic within a
/// navigation epoch. `allowed` mirrors the allow-log occupancy and can
/// plateau at the log cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub blocked: u64,
    pub allowed: u64,
    pub ads: u64,
    pub trackers: u64,
    pub social: u64,
    pub other: u64,
    pub false_positives: u64,
    pub estimated_savings_ms: u64,
}

impl SessionStats {
    pub fn bump_category(&mut self, category: Category) {
        match category {
            Category::Ad => self.ads += 1,
            Category::Tracker => self.trackers += 1,
            Category::Social => self.social += 1,
            Category::Other => self.other += 1,
        }
    }
}

// ============================================================================
// TRACKER GRAPH
// ============================================================================

/// Directed edge from the page domain to a tracker domain, annotated
/// with the classification at first observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub intent: Intent,
    pub category: Category,
}

/// Per-page relationship graph of domains reached from the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerGraph {
    /// Fixed at first observation per navigation epoch
    pub page_domain: String,
    /// Ordered set - no duplicates
    pub nodes: Vec<String>,
    /// Deduplicated by (from, to); first classification is sticky
    pub edges: Vec<GraphEdge>,
}

// ============================================================================
// DOMAIN OVERRIDES (session-scoped)
// ============================================================================

/// Session-scoped allow/block decision for a domain. Cleared on
/// navigation reset; persistent overrides live with an external
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideMode {
    Allow,
    Block,
}

// ============================================================================
// SESSION STATE
// ============================================================================

/// All mutable state for one tab within one navigation epoch.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Newest-first, capped at BLOCK_LOG_CAP
    pub block_log: VecDeque<LogEntry>,
    /// Oldest-first, capped at ALLOW_LOG_CAP
    pub allow_log: VecDeque<LogEntry>,
    pub stats: SessionStats,
    pub graph: TrackerGraph,
    pub overrides: HashMap<String, OverrideMode>,
}
