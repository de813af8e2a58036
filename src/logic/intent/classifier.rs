//! Domain/Intent Classifier
//!
//! ONLY contains classify logic - tables live in rules.rs, types in types.rs.
//! Input: URL string. Output: Classification.
//!
//! Total and deterministic: every input, including malformed URLs, returns
//! `other`/`unknown` rather than erroring.

use super::rules::{INTENT_DOMAINS, INTENT_PATTERNS};
use super::types::{Classification, Intent};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify a URL into an intent and its derived category.
pub fn classify(url: &str) -> Classification {
    let lower = url.to_lowercase();
    let host = hostname_of(url);

    // Tier 1: ordered known-domain table, first match wins
    for (intent, domains) in INTENT_DOMAINS {
        for domain in *domains {
            if domain_matches(&host, &lower, domain) {
                return Classification::from_intent(*intent);
            }
        }
    }

    // Tier 2: ordered heuristic regex fallbacks over the full lowercased URL
    for (intent, pattern) in INTENT_PATTERNS.iter() {
        if pattern.is_match(&lower) {
            return Classification::from_intent(*intent);
        }
    }

    Classification::from_intent(Intent::Unknown)
}

// ============================================================================
// MATCHING HELPERS
// ============================================================================

/// Extract the lowercased hostname; fall back to the raw lowercased URL
/// so substring tests still apply to malformed inputs.
pub fn hostname_of(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|h| h.to_lowercase())
            .unwrap_or_else(|| url.to_lowercase()),
        Err(_) => url.to_lowercase(),
    }
}

/// Equality, dot-suffix, or full-URL substring match against a known domain.
pub fn domain_matches(host: &str, url_lower: &str, domain: &str) -> bool {
    host == domain
        || host.ends_with(&format!(".{}", domain))
        || url_lower.contains(domain)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::intent::types::Category;

    #[test]
    fn test_known_ad_network() {
        let c = classify("https://www.doubleclick.net/ads");
        assert_eq!(c.intent, Intent::AdNetwork);
        assert_eq!(c.category, Category::Ad);
    }

    #[test]
    fn test_payment_sdk_is_other_category() {
        let c = classify("https://js.stripe.com/v3/");
        assert_eq!(c.intent, Intent::PaymentSdk);
        assert_eq!(c.category, Category::Other);
    }

    #[test]
    fn test_subdomain_suffix_match() {
        let c = classify("https://ssl.google-analytics.com/ga.js");
        assert_eq!(c.intent, Intent::Analytics);
        assert_eq!(c.category, Category::Tracker);
    }

    #[test]
    fn test_session_replay_is_tracker() {
        let c = classify("https://static.hotjar.com/c/hotjar.js");
        assert_eq!(c.intent, Intent::SessionReplay);
        assert_eq!(c.category, Category::Tracker);
    }

    #[test]
    fn test_social() {
        let c = classify("https://connect.facebook.net/en_US/fbevents.js");
        assert_eq!(c.intent, Intent::Social);
        assert_eq!(c.category, Category::Social);
    }

    #[test]
    fn test_heuristic_ad_fallback() {
        // Unknown domain, but the path screams ad
        let c = classify("https://cdn.example.com/ads/banner.js");
        assert_eq!(c.intent, Intent::AdNetwork);
        assert_eq!(c.category, Category::Ad);
    }

    #[test]
    fn test_heuristic_analytics_fallback() {
        let c = classify("https://metrics.example.org/telemetry/v2");
        assert_eq!(c.intent, Intent::Analytics);
    }

    #[test]
    fn test_table_wins_over_heuristic() {
        // doubleclick is in the ad-network table even though "analytics"
        // never appears; order of tiers matters, not pattern priority
        let c = classify("https://stats.g.doubleclick.net/collect");
        assert_eq!(c.intent, Intent::AdNetwork);
    }

    #[test]
    fn test_unknown_falls_through() {
        let c = classify("https://www.example.com/index.html");
        assert_eq!(c.intent, Intent::Unknown);
        assert_eq!(c.category, Category::Other);
    }

    #[test]
    fn test_malformed_url_is_total() {
        let c = classify("not a url at all");
        assert_eq!(c.intent, Intent::Unknown);
        assert_eq!(c.category, Category::Other);
    }

    #[test]
    fn test_malformed_url_still_substring_matches() {
        // No scheme, unparseable - raw string still carries the domain
        let c = classify("doubleclick.net/pixel");
        assert_eq!(c.intent, Intent::AdNetwork);
    }

    #[test]
    fn test_empty_url() {
        let c = classify("");
        assert_eq!(c.intent, Intent::Unknown);
    }
}
