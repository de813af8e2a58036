//! Tracker Relationship Graph Builder
//!
//! Maintains the per-page directed graph of domains reached from the
//! page. Edge identity is the ordered (from, to) pair; the intent and
//! category recorded on an edge are whatever the tracker classified as
//! when the edge was first observed, and later requests between the
//! same two domains never alter it.

use super::types::{GraphEdge, TrackerGraph};
use crate::logic::intent::classifier::hostname_of;
use crate::logic::intent::types::Classification;

/// Record a page -> tracker observation on the graph.
///
/// Fixes `page_domain` on the first call after a reset.
pub fn add_edge(graph: &mut TrackerGraph, page_url: &str, tracker_url: &str, class: Classification) {
    if graph.page_domain.is_empty() {
        graph.page_domain = hostname_of(page_url);
    }

    let page_domain = graph.page_domain.clone();
    let tracker_domain = hostname_of(tracker_url);

    add_node(graph, &page_domain);
    add_node(graph, &tracker_domain);

    let exists = graph
        .edges
        .iter()
        .any(|e| e.from == page_domain && e.to == tracker_domain);
    if !exists {
        graph.edges.push(GraphEdge {
            from: page_domain,
            to: tracker_domain,
            intent: class.intent,
            category: class.category,
        });
    }
}

fn add_node(graph: &mut TrackerGraph, domain: &str) {
    if !graph.nodes.iter().any(|n| n == domain) {
        graph.nodes.push(domain.to_string());
    }
}

// ============================================================================
// TESTS
// ============================================================================
