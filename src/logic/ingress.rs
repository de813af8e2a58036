//! Event Ingress
//!
//! Translates the four external signals (rule match, request
//! completed, navigation committed, tab closed) into session-store
//! calls. Structural validation happens here: negative tab ids denote
//! non-tab contexts and are dropped before they reach the store.

use super::session::store::SessionStore;
use super::session::types::{Outcome, RequestEvent, ResourceType, TabId};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct IngressError(pub String);

impl std::fmt::Display for IngressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IngressError: {}", self.0)
    }
}

impl std::error::Error for IngressError {}

// ============================================================================
// INBOUND SIGNALS
// ============================================================================

/// A blocking rule fired in the interceptor.
#[allow(clippy::too_many_arguments)]
pub fn on_match(
    store: &SessionStore,
    tab_id: TabId,
    url: &str,
    frame_url: Option<&str>,
    resource_type: ResourceType,
    rule_id: u32,
    ruleset_id: &str,
    timestamp: u64,
) -> Result<(), IngressError> {
    if tab_id < 0 {
        log::debug!("dropping match event from non-tab context (tab {})", tab_id);
        return Err(IngressError(format!("non-tab context id {}", tab_id)));
    }

    store.record_blocked(&RequestEvent {
        tab_id,
        url: url.to_string(),
        frame_url: frame_url.map(str::to_string),
        resource_type,
        timestamp,
        outcome: Outcome::Blocked,
        rule_id: Some(rule_id),
        ruleset_id: Some(ruleset_id.to_string()),
        status_code: None,
        from_cache: false,
    });
    Ok(())
}

/// A request completed without being blocked (passive observer).
pub fn on_completed(
    store: &SessionStore,
    tab_id: TabId,
    url: &str,
    resource_type: ResourceType,
    timestamp: u64,
    status_code: Option<u16>,
    from_cache: bool,
) -> Result<(), IngressError> {
    if tab_id < 0 {
        log::debug!(
            "dropping completed event from non-tab context (tab {})",
            tab_id
        );
        return Err(IngressError(format!("non-tab context id {}", tab_id)));
    }

    store.record_allowed(&RequestEvent {
        tab_id,
        url: url.to_string(),
        frame_url: None,
        resource_type,
        timestamp,
        outcome: Outcome::Allowed,
        rule_id: None,
        ruleset_id: None,
        status_code,
        from_cache,
    });
    Ok(())
}

/// A navigation committed; only top-frame commits start a new epoch.
pub fn on_navigation_committed(store: &SessionStore, tab_id: TabId, is_top_frame: bool) {
    if tab_id < 0 || !is_top_frame {
        return;
    }
    store.reset_for_navigation(tab_id);
}

/// The tab is gone; tear down its state.
pub fn on_tab_closed(store: &SessionStore, tab_id: TabId) {
    store.drop_tab(tab_id);
}

/// Route an already-assembled event by its outcome. Used by replay
/// tooling; applies the same non-tab filter as the listeners above.
pub fn ingest(store: &SessionStore, event: &RequestEvent) -> Result<(), IngressError> {
    if event.tab_id < 0 {
        return Err(IngressError(format!("non-tab context id {}", event.tab_id)));
    }
    match event.outcome {
        Outcome::Blocked => store.record_blocked(event),
        Outcome::Allowed => store.record_allowed(event),
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_tab_id_dropped() {
        let store = SessionStore::new();
        let result = on_match(
            &store,
            -1,
            "https://www.doubleclick.net/ads",
            None,
            ResourceType::Script,
            1,
            "adtrace_rules",
            100,
        );
        assert!(result.is_err());
        assert!(store.tab_ids().is_empty());
    }

    #[test]
    fn test_match_recorded() {
        let store = SessionStore::new();
        on_match(
            &store,
            1,
            "https://www.doubleclick.net/ads",
            Some("https://site.com/"),
            ResourceType::Script,
            1,
            "adtrace_rules",
            100,
        )
        .unwrap();

        let (log, stats) = store.get_log(1);
        assert_eq!(log.len(), 1);
        assert_eq!(stats.blocked, 1);
        assert!(log[0].attribution.is_some());
    }

    #[test]
    fn test_completed_recorded() {
        let store = SessionStore::new();
        on_completed(
            &store,
            1,
            "https://cdn.example.com/app.js",
            ResourceType::Script,
            100,
            Some(200),
            true,
        )
        .unwrap();

        let timeline = store.get_timeline(1);
        assert_eq!(timeline.len(), 1);
        assert!(timeline[0].entry.from_cache);
        assert!(timeline[0].entry.attribution.is_none());
    }

    #[test]
    fn test_subframe_navigation_does_not_reset() {
        let store = SessionStore::new();
        on_match(
            &store,
            2,
            "https://www.doubleclick.net/ads",
            None,
            ResourceType::Script,
            1,
            "adtrace_rules",
            100,
        )
        .unwrap();

        on_navigation_committed(&store, 2, false);
        assert_eq!(store.get_stats(2).blocked, 1);

        on_navigation_committed(&store, 2, true);
        assert_eq!(store.get_stats(2).blocked, 0);
    }

    #[test]
    fn test_tab_closed_drops_state() {
        let store = SessionStore::new();
        on_match(
            &store,
            3,
            "https://www.doubleclick.net/ads",
            None,
            ResourceType::Script,
            1,
            "adtrace_rules",
            100,
        )
        .unwrap();

        on_tab_closed(&store, 3);
        assert!(!store.has_tab(3));
    }
}
