//! Session Store
//!
//! Owns all mutable per-tab state behind one explicit table. Every
//! mutation and query goes through the methods here - there are no
//! ambient globals. A multi-threaded host gets single-writer semantics
//! per entry from the table lock.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

use super::graph;
use super::timeline::{self, TimelineEntry};
use super::types::{
    LogEntry, OverrideMode, RequestEvent, SessionState, SessionStats, TabId, TrackerGraph,
};
use crate::constants::{ALLOW_LOG_CAP, BLOCK_LOG_CAP};
use crate::logic::attribution::resolver::attribute;
use crate::logic::intent::classifier::{classify, hostname_of};
use crate::logic::risk::detector::detect_risk;

// ============================================================================
// OBSERVER
// ============================================================================

/// Payload delivered to the optional block observer.
#[derive(Debug, Clone, Serialize)]
pub struct BlockNotification {
    pub tab_id: TabId,
    pub entry: LogEntry,
    pub stats: SessionStats,
}

type Observer = Box<dyn Fn(&BlockNotification) + Send + Sync>;

// ============================================================================
// STORE
// ============================================================================

/// Per-tab session state table plus a best-effort block observer.
#[derive(Default)]
pub struct SessionStore {
    tabs: RwLock<HashMap<TabId, SessionState>>,
    observer: RwLock<Option<Observer>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Observer registration (best-effort, never affects store state)
    // ------------------------------------------------------------------

    /// Register a callback invoked after every recorded block. At most
    /// one observer is attached; a new registration replaces the old.
    pub fn set_observer<F>(&self, observer: F)
    where
        F: Fn(&BlockNotification) + Send + Sync + 'static,
    {
        *self.observer.write() = Some(Box::new(observer));
    }

    pub fn clear_observer(&self) {
        *self.observer.write() = None;
    }

    fn notify(&self, notification: &BlockNotification) {
        let guard = self.observer.read();
        match guard.as_ref() {
            Some(observer) => observer(notification),
            None => log::debug!(
                "no observer attached, block notification for tab {} dropped",
                notification.tab_id
            ),
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Record a blocked request: classify, check breakage risk, resolve
    /// attribution, update log/stats/graph.
    pub fn record_blocked(&self, event: &RequestEvent) {
        let class = classify(&event.url);
        let risk = detect_risk(&event.url);
        let attribution = attribute(
            event.rule_id.unwrap_or(0),
            event.ruleset_id.as_deref().unwrap_or(""),
        );

        let entry = LogEntry {
            id: Uuid::new_v4().to_string(),
            url: event.url.clone(),
            domain: hostname_of(&event.url),
            frame_url: event.frame_url.clone(),
            resource_type: event.resource_type,
            timestamp: event.timestamp,
            category: class.category,
            intent: class.intent,
            false_positive: risk.is_risk,
            fp_reason: risk.reason,
            rule_id: event.rule_id,
            ruleset_id: event.ruleset_id.clone(),
            attribution: Some(attribution),
            status_code: None,
            from_cache: false,
        };

        let notification = {
            let mut tabs = self.tabs.write();
            let state = tabs.entry(event.tab_id).or_default();

            state.block_log.push_front(entry.clone());
            while state.block_log.len() > BLOCK_LOG_CAP {
                state.block_log.pop_back();
            }

            state.stats.blocked += 1;
            state.stats.bump_category(class.category);
            if entry.false_positive {
                state.stats.false_positives += 1;
            }
            state.stats.estimated_savings_ms += event.resource_type.savings_ms();

            if let Some(frame_url) = &event.frame_url {
                graph::add_edge(&mut state.graph, frame_url, &event.url, class);
            }

            BlockNotification {
                tab_id: event.tab_id,
                entry,
                stats: state.stats.clone(),
            }
        };

        // Outside the table lock: a slow observer must not stall writers
        self.notify(&notification);
    }

    /// Record an allowed request. Classification only - allowed
    /// requests get no attribution and no breakage check.
    pub fn record_allowed(&self, event: &RequestEvent) {
        let class = classify(&event.url);

        let entry = LogEntry {
            id: Uuid::new_v4().to_string(),
            url: event.url.clone(),
            domain: hostname_of(&event.url),
            frame_url: event.frame_url.clone(),
            resource_type: event.resource_type,
            timestamp: event.timestamp,
            category: class.category,
            intent: class.intent,
            false_positive: false,
            fp_reason: None,
            rule_id: None,
            ruleset_id: None,
            attribution: None,
            status_code: event.status_code,
            from_cache: event.from_cache,
        };

        let mut tabs = self.tabs.write();
        let state = tabs.entry(event.tab_id).or_default();

        state.allow_log.push_back(entry);
        while state.allow_log.len() > ALLOW_LOG_CAP {
            state.allow_log.pop_front();
        }

        // Mirrors log occupancy rather than counting all-time allowed
        // requests
        state.stats.allowed = state.allow_log.len() as u64;
    }

    /// Reinitialize a tab's state for a new navigation epoch.
    pub fn reset_for_navigation(&self, tab_id: TabId) {
        let mut tabs = self.tabs.write();
        tabs.insert(tab_id, SessionState::default());
        log::debug!("session reset for tab {}", tab_id);
    }

    /// Remove all state for a closed tab.
    pub fn drop_tab(&self, tab_id: TabId) {
        let mut tabs = self.tabs.write();
        if tabs.remove(&tab_id).is_some() {
            log::debug!("session dropped for tab {}", tab_id);
        }
    }

    /// Set or clear a session-scoped domain override.
    pub fn set_domain_override(&self, tab_id: TabId, domain: &str, mode: Option<OverrideMode>) {
        let mut tabs = self.tabs.write();
        let state = tabs.entry(tab_id).or_default();
        match mode {
            Some(mode) => {
                state.overrides.insert(domain.to_string(), mode);
            }
            None => {
                state.overrides.remove(domain);
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries (defensive defaults for unknown tabs)
    // ------------------------------------------------------------------

    /// Block log (newest-first) plus current stats.
    pub fn get_log(&self, tab_id: TabId) -> (Vec<LogEntry>, SessionStats) {
        let tabs = self.tabs.read();
        match tabs.get(&tab_id) {
            Some(state) => (
                state.block_log.iter().cloned().collect(),
                state.stats.clone(),
            ),
            None => (Vec::new(), SessionStats::default()),
        }
    }

    pub fn get_stats(&self, tab_id: TabId) -> SessionStats {
        let tabs = self.tabs.read();
        tabs.get(&tab_id)
            .map(|s| s.stats.clone())
            .unwrap_or_default()
    }

    pub fn get_graph(&self, tab_id: TabId) -> TrackerGraph {
        let tabs = self.tabs.read();
        tabs.get(&tab_id)
            .map(|s| s.graph.clone())
            .unwrap_or_default()
    }

    pub fn get_timeline(&self, tab_id: TabId) -> Vec<TimelineEntry> {
        let tabs = self.tabs.read();
        tabs.get(&tab_id).map(timeline::merge).unwrap_or_default()
    }

    pub fn get_overrides(&self, tab_id: TabId) -> HashMap<String, OverrideMode> {
        let tabs = self.tabs.read();
        tabs.get(&tab_id)
            .map(|s| s.overrides.clone())
            .unwrap_or_default()
    }

    /// Blocked entries related to a query URL. Deliberately loose:
    /// exact url, domain == query hostname, or substring either way -
    /// used for on-page element highlighting.
    pub fn element_matches(&self, tab_id: TabId, url: &str) -> Vec<LogEntry> {
        let query_host = hostname_of(url);
        let tabs = self.tabs.read();
        let Some(state) = tabs.get(&tab_id) else {
            return Vec::new();
        };

        state
            .block_log
            .iter()
            .filter(|e| {
                e.url == url
                    || e.domain == query_host
                    || e.url.contains(url)
                    || url.contains(&e.url)
            })
            .cloned()
            .collect()
    }

    /// Is there any state for this tab at all?
    pub fn has_tab(&self, tab_id: TabId) -> bool {
        self.tabs.read().contains_key(&tab_id)
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        let mut ids: Vec<TabId> = self.tabs.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

// ============================================================================
// TESTS
// ============================================================================
