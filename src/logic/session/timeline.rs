//! Timeline Merge
//!
//! Read-only view combining a tab's block log and allow log into one
//! time-ordered sequence. The block log is stored newest-first, so it
//! is reversed before the merge; blocked entries are concatenated
//! before allowed entries, then the whole sequence is stable-sorted by
//! timestamp. On equal timestamps blocked therefore precedes allowed.

use serde::{Deserialize, Serialize};

use super::types::{LogEntry, SessionState};

// ============================================================================
// TIMELINE ENTRY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimelineStatus {
    Blocked,
    Allowed,
}

/// A log entry tagged with its block/allow status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: TimelineStatus,
    #[serde(flatten)]
    pub entry: LogEntry,
}

// ============================================================================
// MERGE
// ============================================================================

/// Merge both logs into one ascending-by-timestamp sequence.
pub fn merge(state: &SessionState) -> Vec<TimelineEntry> {
    let mut timeline: Vec<TimelineEntry> = state
        .block_log
        .iter()
        .rev()
        .map(|e| TimelineEntry {
            status: TimelineStatus::Blocked,
            entry: e.clone(),
        })
        .chain(state.allow_log.iter().map(|e| TimelineEntry {
            status: TimelineStatus::Allowed,
            entry: e.clone(),
        }))
        .collect();

    timeline.sort_by_key(|t| t.entry.timestamp);
    timeline
}

// ============================================================================
// TESTS
// ============================================================================
