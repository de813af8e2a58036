//! Command Surface
//!
//! Closed, tagged command/query types for the inspection surfaces
//! (popup, devtools panel, options page). Each message kind has a
//! fixed, typed payload and response - no string-tag duck typing. The
//! wire tags match the extension message vocabulary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::logic::intent::classifier::{classify, hostname_of};
use crate::logic::intent::types::{Category, Intent};
use crate::logic::report::{self, Report};
use crate::logic::risk::detector::detect_risk;
use crate::logic::risk::types::RiskVerdict;
use crate::logic::session::store::SessionStore;
use crate::logic::session::timeline::TimelineEntry;
use crate::logic::session::types::{
    LogEntry, OverrideMode, SessionStats, TabId, TrackerGraph,
};

// ============================================================================
// COMMANDS
// ============================================================================

/// Session-scoped override request, including explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideRequest {
    Allow,
    Block,
    Reset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineCommand {
    GetLog { tab_id: TabId },
    GetTimeline { tab_id: TabId },
    GetTrackerGraph { tab_id: TabId },
    GetElementMatches { tab_id: TabId, url: String },
    ClassifyBatch { urls: Vec<String> },
    ExportReport { tab_id: TabId },
    SetDomainOverride { tab_id: TabId, domain: String, mode: OverrideRequest },
    GetOverrides { tab_id: TabId },
}

// ============================================================================
// RESPONSES
// ============================================================================

/// Stateless bulk-classification result row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchClassification {
    pub url: String,
    pub domain: String,
    pub intent: Intent,
    pub category: Category,
    pub risk: RiskVerdict,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineResponse {
    Log {
        log: Vec<LogEntry>,
        stats: SessionStats,
    },
    Timeline {
        timeline: Vec<TimelineEntry>,
    },
    TrackerGraph {
        graph: TrackerGraph,
    },
    ElementMatches {
        matches: Vec<LogEntry>,
    },
    Classified {
        results: Vec<BatchClassification>,
    },
    Report {
        report: Report,
    },
    Overrides {
        overrides: HashMap<String, OverrideMode>,
    },
    Ok,
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Execute a command against the store. Every command succeeds; reads
/// of unknown tabs return defensive defaults.
pub fn dispatch(store: &SessionStore, command: EngineCommand) -> EngineResponse {
    match command {
        EngineCommand::GetLog { tab_id } => {
            let (log, stats) = store.get_log(tab_id);
            EngineResponse::Log { log, stats }
        }
        EngineCommand::GetTimeline { tab_id } => EngineResponse::Timeline {
            timeline: store.get_timeline(tab_id),
        },
        EngineCommand::GetTrackerGraph { tab_id } => EngineResponse::TrackerGraph {
            graph: store.get_graph(tab_id),
        },
        EngineCommand::GetElementMatches { tab_id, url } => EngineResponse::ElementMatches {
            matches: store.element_matches(tab_id, &url),
        },
        EngineCommand::ClassifyBatch { urls } => EngineResponse::Classified {
            results: urls.into_iter().map(classify_one).collect(),
        },
        EngineCommand::ExportReport { tab_id } => EngineResponse::Report {
            report: report::export_report(store, tab_id),
        },
        EngineCommand::SetDomainOverride { tab_id, domain, mode } => {
            let mode = match mode {
                OverrideRequest::Allow => Some(OverrideMode::Allow),
                OverrideRequest::Block => Some(OverrideMode::Block),
                OverrideRequest::Reset => None,
            };
            store.set_domain_override(tab_id, &domain, mode);
            EngineResponse::Ok
        }
        EngineCommand::GetOverrides { tab_id } => EngineResponse::Overrides {
            overrides: store.get_overrides(tab_id),
        },
    }
}

fn classify_one(url: String) -> BatchClassification {
    let class = classify(&url);
    let risk = detect_risk(&url);
    BatchClassification {
        domain: hostname_of(&url),
        intent: class.intent,
        category: class.category,
        risk,
        url,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ingress;
    use crate::logic::session::types::ResourceType;

    fn seeded_store() -> SessionStore {
        let store = SessionStore::new();
        ingress::on_match(
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
        store
    }

    #[test]
    fn test_command_wire_tags() {
        let cmd: EngineCommand =
            serde_json::from_str(r#"{"type":"GET_LOG","tab_id":1}"#).unwrap();
        assert!(matches!(cmd, EngineCommand::GetLog { tab_id: 1 }));

        let cmd: EngineCommand = serde_json::from_str(
            r#"{"type":"SET_DOMAIN_OVERRIDE","tab_id":1,"domain":"x.com","mode":"allow"}"#,
        )
        .unwrap();
        assert!(matches!(
            cmd,
            EngineCommand::SetDomainOverride {
                mode: OverrideRequest::Allow,
                ..
            }
        ));
    }

    #[test]
    fn test_get_log_dispatch() {
        let store = seeded_store();
        match dispatch(&store, EngineCommand::GetLog { tab_id: 1 }) {
            EngineResponse::Log { log, stats } => {
                assert_eq!(log.len(), 1);
                assert_eq!(stats.blocked, 1);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_classify_batch_is_stateless() {
        let store = SessionStore::new();
        let response = dispatch(
            &store,
            EngineCommand::ClassifyBatch {
                urls: vec![
                    "https://www.doubleclick.net/ads".to_string(),
                    "https://js.stripe.com/v3/".to_string(),
                ],
            },
        );

        match response {
            EngineResponse::Classified { results } => {
                assert_eq!(results[0].category, Category::Ad);
                assert_eq!(results[1].intent, Intent::PaymentSdk);
                assert!(results[1].risk.is_risk);
            }
            other => panic!("unexpected response: {:?}", other),
        }
        // No session was created as a side effect
        assert!(store.tab_ids().is_empty());
    }

    #[test]
    fn test_override_roundtrip() {
        let store = SessionStore::new();
        dispatch(
            &store,
            EngineCommand::SetDomainOverride {
                tab_id: 1,
                domain: "doubleclick.net".to_string(),
                mode: OverrideRequest::Allow,
            },
        );

        match dispatch(&store, EngineCommand::GetOverrides { tab_id: 1 }) {
            EngineResponse::Overrides { overrides } => {
                assert_eq!(overrides.get("doubleclick.net"), Some(&OverrideMode::Allow));
            }
            other => panic!("unexpected response: {:?}", other),
        }

        dispatch(
            &store,
            EngineCommand::SetDomainOverride {
                tab_id: 1,
                domain: "doubleclick.net".to_string(),
                mode: OverrideRequest::Reset,
            },
        );
        match dispatch(&store, EngineCommand::GetOverrides { tab_id: 1 }) {
            EngineResponse::Overrides { overrides } => assert!(overrides.is_empty()),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tab_queries_succeed() {
        let store = SessionStore::new();
        match dispatch(&store, EngineCommand::GetTrackerGraph { tab_id: 404 }) {
            EngineResponse::TrackerGraph { graph } => assert!(graph.nodes.is_empty()),
            other => panic!("unexpected response: {:?}", other),
        }
        match dispatch(&store, EngineCommand::GetTimeline { tab_id: 404 }) {
            EngineResponse::Timeline { timeline } => assert!(timeline.is_empty()),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_element_matches_dispatch() {
        let store = seeded_store();
        match dispatch(
            &store,
            EngineCommand::GetElementMatches {
                tab_id: 1,
                url: "https://www.doubleclick.net/ads".to_string(),
            },
        ) {
            EngineResponse::ElementMatches { matches } => assert_eq!(matches.len(), 1),
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
