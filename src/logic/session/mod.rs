//! Per-Tab Session State
//!
//! Bounded block/allow logs, rolling stats, tracker graph, timeline
//! merge, and session-scoped domain overrides - all owned by the
//! SessionStore.

pub mod graph;
pub mod store;
pub mod timeline;
pub mod types;

pub use store::{BlockNotification, SessionStore};
pub use timeline::{TimelineEntry, TimelineStatus};
pub use types::{
    LogEntry, Outcome, OverrideMode, RequestEvent, ResourceType, SessionStats, TabId, TrackerGraph,
};
