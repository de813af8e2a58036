//! Report Export
//!
//! Full per-tab snapshot for external serialization. The engine hands
//! out structured data; JSON/CSV strings are provided for the export
//! buttons in the inspection surfaces.

use serde::Serialize;

use super::session::store::SessionStore;
use super::session::types::{LogEntry, SessionStats, TabId, TrackerGraph};

// ============================================================================
// SNAPSHOT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub tab_id: TabId,
    pub total_blocked: u64,
    pub log: Vec<LogEntry>,
    pub stats: SessionStats,
    pub graph: TrackerGraph,
}

/// Snapshot a tab. Unknown tabs produce an empty report, not an error.
pub fn export_report(store: &SessionStore, tab_id: TabId) -> Report {
    let (log, stats) = store.get_log(tab_id);
    Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        tab_id,
        total_blocked: stats.blocked,
        log,
        stats,
        graph: store.get_graph(tab_id),
    }
}

// ============================================================================
// RENDERING
// ============================================================================

pub fn to_json(report: &Report) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        log::error!("report serialization failed: {}", e);
        String::from("{}")
    })
}

/// CSV of the block log, one row per entry.
pub fn to_csv(report: &Report) -> String {
    let mut csv =
        String::from("timestamp,domain,url,type,category,intent,rule_id,list,false_positive\n");
    for entry in &report.log {
        csv.push_str(&format!(
            "{},{},{},{:?},{},{},{},{},{}\n",
            entry.timestamp,
            entry.domain,
            entry.url,
            entry.resource_type,
            entry.category,
            entry.intent,
            entry.rule_id.map(|id| id.to_string()).unwrap_or_default(),
            entry
                .attribution
                .as_ref()
                .map(|a| a.list.clone())
                .unwrap_or_default(),
            entry.false_positive,
        ));
    }
    csv
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ingress;
    use crate::logic::session::types::ResourceType;

    #[test]
    fn test_export_unknown_tab_is_empty() {
        let store = SessionStore::new();
        let report = export_report(&store, 42);
        assert_eq!(report.tab_id, 42);
        assert_eq!(report.total_blocked, 0);
        assert!(report.log.is_empty());
    }

    #[test]
    fn test_csv_has_header_and_rows() {
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

        let report = export_report(&store, 1);
        let csv = to_csv(&report);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("timestamp,"));
        assert!(lines[1].contains("doubleclick.net"));
        assert!(lines[1].contains("EasyList"));
    }

    #[test]
    fn test_json_round_trips() {
        let store = SessionStore::new();
        ingress::on_match(
            &store,
            1,
            "https://www.doubleclick.net/ads",
            None,
            ResourceType::Script,
            1,
            "adtrace_rules",
            100,
        )
        .unwrap();

        let json = to_json(&export_report(&store, 1));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["blocked"], 1);
        assert_eq!(value["log"][0]["intent"], "ad-network");
        assert_eq!(value["log"][0]["category"], "ad");
    }
}
