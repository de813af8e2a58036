//! Static Attribution Table
//!
//! Metadata for the bundled filter list, keyed by rule id. Rule ids in
//! this table must stay inside the static band (0..=4999); the other
//! bands are synthesized by the resolver.

use super::types::StaticRule;
use crate::logic::intent::types::Intent;

pub const STATIC_RULES: &[StaticRule] = &[
    StaticRule {
        rule_id: 1,
        filter: "||doubleclick.net^",
        list: "EasyList",
        description: "Google DoubleClick ad serving",
        intent: Intent::AdNetwork,
    },
    StaticRule {
        rule_id: 2,
        filter: "||googlesyndication.com^",
        list: "EasyList",
        description: "Google AdSense syndication",
        intent: Intent::AdNetwork,
    },
    StaticRule {
        rule_id: 3,
        filter: "||amazon-adsystem.com^",
        list: "EasyList",
        description: "Amazon advertising system",
        intent: Intent::AdNetwork,
    },
    StaticRule {
        rule_id: 4,
        filter: "||adnxs.com^",
        list: "EasyList",
        description: "AppNexus/Xandr ad exchange",
        intent: Intent::AdNetwork,
    },
    StaticRule {
        rule_id: 5,
        filter: "||criteo.com^",
        list: "EasyList",
        description: "Criteo retargeting ads",
        intent: Intent::AdNetwork,
    },
    StaticRule {
        rule_id: 6,
        filter: "||taboola.com^",
        list: "EasyList",
        description: "Taboola sponsored content widgets",
        intent: Intent::AdNetwork,
    },
    StaticRule {
        rule_id: 7,
        filter: "||outbrain.com^",
        list: "EasyList",
        description: "Outbrain sponsored content widgets",
        intent: Intent::AdNetwork,
    },
    StaticRule {
        rule_id: 8,
        filter: "||google-analytics.com^",
        list: "EasyPrivacy",
        description: "Google Analytics page tracking",
        intent: Intent::Analytics,
    },
    StaticRule {
        rule_id: 9,
        filter: "||googletagmanager.com^",
        list: "EasyPrivacy",
        description: "Google Tag Manager container",
        intent: Intent::Analytics,
    },
    StaticRule {
        rule_id: 10,
        filter: "||hotjar.com^",
        list: "EasyPrivacy",
        description: "Hotjar session recording and heatmaps",
        intent: Intent::SessionReplay,
    },
    StaticRule {
        rule_id: 11,
        filter: "||mixpanel.com^",
        list: "EasyPrivacy",
        description: "Mixpanel product analytics",
        intent: Intent::Analytics,
    },
    StaticRule {
        rule_id: 12,
        filter: "||fullstory.com^",
        list: "EasyPrivacy",
        description: "FullStory session replay",
        intent: Intent::SessionReplay,
    },
    StaticRule {
        rule_id: 13,
        filter: "||connect.facebook.net^",
        list: "Fanboy's Social",
        description: "Facebook pixel and social widgets",
        intent: Intent::Social,
    },
    StaticRule {
        rule_id: 14,
        filter: "||platform.twitter.com^",
        list: "Fanboy's Social",
        description: "Twitter embedded widgets",
        intent: Intent::Social,
    },
    StaticRule {
        rule_id: 15,
        filter: "||coinhive.com^",
        list: "NoCoin",
        description: "Coinhive in-browser crypto miner",
        intent: Intent::CryptoMiner,
    },
    StaticRule {
        rule_id: 16,
        filter: "||fingerprintjs.com^",
        list: "EasyPrivacy",
        description: "FingerprintJS browser fingerprinting",
        intent: Intent::Fingerprinting,
    },
];
