//! Intent Classification Tables
//!
//! No classify logic here, only the ordered domain tables and the
//! heuristic regex fallbacks. Table order is the tie-break when a URL
//! could textually match entries under multiple intents.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Intent;

// ============================================================================
// KNOWN-DOMAIN TABLE (ordered, first match wins)
// ============================================================================

/// Intent -> known serving domains. Walked in declaration order.
pub const INTENT_DOMAINS: &[(Intent, &[&str])] = &[
    (
        Intent::AdNetwork,
        &[
            "doubleclick.net",
            "googlesyndication.com",
            "adservice.google.com",
            "amazon-adsystem.com",
            "adnxs.com",
            "criteo.com",
            "taboola.com",
            "outbrain.com",
            "pubmatic.com",
            "rubiconproject.com",
            "moatads.com",
            "adsafeprotected.com",
        ],
    ),
    (
        Intent::Fingerprinting,
        &[
            "fingerprintjs.com",
            "fpjs.io",
            "iovation.com",
            "threatmetrix.com",
            "perimeterx.net",
        ],
    ),
    (
        Intent::SessionReplay,
        &[
            "hotjar.com",
            "fullstory.com",
            "logrocket.com",
            "mouseflow.com",
            "smartlook.com",
            "inspectlet.com",
        ],
    ),
    (
        Intent::Analytics,
        &[
            "google-analytics.com",
            "googletagmanager.com",
            "mixpanel.com",
            "segment.com",
            "segment.io",
            "amplitude.com",
            "heapanalytics.com",
            "scorecardresearch.com",
            "quantserve.com",
            "statcounter.com",
            "matomo.cloud",
        ],
    ),
    (
        Intent::CryptoMiner,
        &[
            "coinhive.com",
            "coin-hive.com",
            "cryptoloot.pro",
            "webminepool.com",
            "minero.cc",
        ],
    ),
    (
        Intent::PaymentSdk,
        &[
            "js.stripe.com",
            "checkout.stripe.com",
            "paypal.com",
            "paypalobjects.com",
            "braintreegateway.com",
            "adyen.com",
            "squareup.com",
        ],
    ),
    (
        Intent::Cdn,
        &[
            "cdnjs.cloudflare.com",
            "jsdelivr.net",
            "unpkg.com",
            "cloudfront.net",
            "fastly.net",
            "akamaized.net",
        ],
    ),
    (
        Intent::Social,
        &[
            "facebook.com",
            "facebook.net",
            "twitter.com",
            "linkedin.com",
            "pinterest.com",
            "tiktok.com",
            "snapchat.com",
            "instagram.com",
        ],
    ),
];

// ============================================================================
// HEURISTIC FALLBACKS (ordered, applied to the lowercased full URL)
// ============================================================================

/// Regex fallbacks tried when no known domain matched. Priority:
/// ad -> analytics/tracking -> fingerprint -> crypto-miner -> session-replay.
pub static INTENT_PATTERNS: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    [
        (
            Intent::AdNetwork,
            r"(^|[/._-])(ads?|advert\w*|banners?|sponsor\w*|popunder)([/._-]|$)|adserv|syndication",
        ),
        (
            Intent::Analytics,
            r"analytics|telemetry|tracking|/pixel|/beacon|/collect\b|stats?\.js",
        ),
        (
            Intent::Fingerprinting,
            r"fingerprint|canvas[-_]?fp|device[-_]?id|browser[-_]?id",
        ),
        (
            Intent::CryptoMiner,
            r"coin[-_]?hive|crypto[-_]?(miner|night)|miner\.js|webmine",
        ),
        (
            Intent::SessionReplay,
            r"session[-_]?(replay|record)|replay\.js|heatmap|record\.js",
        ),
    ]
    .iter()
    .map(|(intent, pattern)| (*intent, Regex::new(pattern).expect("builtin intent pattern")))
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(INTENT_PATTERNS.len(), 5);
        assert_eq!(INTENT_PATTERNS[0].0, Intent::AdNetwork);
        assert_eq!(INTENT_PATTERNS[4].0, Intent::SessionReplay);
    }

    #[test]
    fn test_table_starts_with_ad_network() {
        // Declaration order is the tie-break contract
        assert_eq!(INTENT_DOMAINS[0].0, Intent::AdNetwork);
        assert_eq!(INTENT_DOMAINS.last().unwrap().0, Intent::Social);
    }
}
