//! False-Positive Risk Detector
//!
//! ONLY contains detection logic - tables live in rules.rs.
//! Input: URL string. Output: RiskVerdict. Total and deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::RISK_DOMAINS;
use super::types::RiskVerdict;
use crate::logic::intent::classifier::{domain_matches, hostname_of};

// ============================================================================
// COMPILED WILDCARD PATTERNS
// ============================================================================

enum RiskPattern {
    /// Plain entry: equality/suffix/substring rule
    Plain(&'static str),
    /// Entry containing `*`: anchored hostname regex
    Wildcard(&'static str, Regex),
}

/// The risk table with wildcard entries pre-translated to regexes.
/// Preserves table order, which is the tie-break.
static COMPILED: Lazy<Vec<(&'static str, Vec<RiskPattern>)>> = Lazy::new(|| {
    RISK_DOMAINS
        .iter()
        .map(|(reason, domains)| {
            let patterns = domains
                .iter()
                .map(|domain| {
                    if domain.contains('*') {
                        let escaped = regex::escape(domain).replace(r"\*", ".*");
                        let re = Regex::new(&format!("^{}$", escaped))
                            .expect("builtin risk pattern");
                        RiskPattern::Wildcard(domain, re)
                    } else {
                        RiskPattern::Plain(domain)
                    }
                })
                .collect();
            (*reason, patterns)
        })
        .collect()
});

// ============================================================================
// DETECTION
// ============================================================================

/// Flag URLs whose blocking is likely to break page functionality.
pub fn detect_risk(url: &str) -> RiskVerdict {
    let lower = url.to_lowercase();
    let host = hostname_of(url);

    for (reason, patterns) in COMPILED.iter() {
        for pattern in patterns {
            match pattern {
                RiskPattern::Plain(domain) => {
                    if domain_matches(&host, &lower, domain) {
                        return RiskVerdict::hit(reason, domain);
                    }
                }
                RiskPattern::Wildcard(domain, re) => {
                    if re.is_match(&host) {
                        return RiskVerdict::hit(reason, domain);
                    }
                }
            }
        }
    }

    RiskVerdict::none()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripe_is_payment_risk() {
        let v = detect_risk("https://js.stripe.com/v3/");
        assert!(v.is_risk);
        assert_eq!(v.reason.as_deref(), Some("payment"));
        assert_eq!(v.matched_domain.as_deref(), Some("js.stripe.com"));
    }

    #[test]
    fn test_wildcard_subdomain() {
        let v = detect_risk("https://www.paypal.com/sdk/js");
        assert!(v.is_risk);
        assert_eq!(v.reason.as_deref(), Some("payment"));
    }

    #[test]
    fn test_wildcard_requires_subdomain() {
        // `*.paypal.com` needs something before the dot; the bare apex
        // is not covered by this entry
        let v = detect_risk("https://paypal.com/");
        assert!(!v.is_risk);
    }

    #[test]
    fn test_auth_domain() {
        let v = detect_risk("https://accounts.google.com/gsi/client");
        assert!(v.is_risk);
        assert_eq!(v.reason.as_deref(), Some("auth"));
    }

    #[test]
    fn test_fonts() {
        let v = detect_risk("https://fonts.gstatic.com/s/roboto/v30/x.woff2");
        assert!(v.is_risk);
        assert_eq!(v.reason.as_deref(), Some("fonts"));
    }

    #[test]
    fn test_app_analytics_wildcard() {
        let v = detect_risk("https://o123456.ingest.sentry.io/api/envelope/");
        assert!(v.is_risk);
        assert_eq!(v.reason.as_deref(), Some("app-analytics"));
    }

    #[test]
    fn test_tracker_is_not_risky() {
        let v = detect_risk("https://www.doubleclick.net/ads");
        assert!(!v.is_risk);
        assert!(v.reason.is_none());
    }

    #[test]
    fn test_malformed_url_is_total() {
        let v = detect_risk("%%%not-a-url%%%");
        assert!(!v.is_risk);
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // cdnjs.cloudflare.com is both an intent-table cdn and an
        // essential-cdn risk entry; here only the risk table is consulted
        let v = detect_risk("https://cdnjs.cloudflare.com/ajax/libs/react/18.2.0/react.js");
        assert!(v.is_risk);
        assert_eq!(v.reason.as_deref(), Some("essential-cdn"));
    }
}
