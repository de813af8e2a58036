//! Rule Attribution Resolver
//!
//! Maps a (rule id, ruleset id) pair from the interceptor to
//! human-readable provenance. Total: unknown ids degrade to an
//! "Unknown" attribution instead of erroring.
//!
//! Band layout (wire contract, see constants.rs):
//!   0..=4999    static list rules (looked up in the table)
//!   5000..=9999 custom user network rules
//!   10000..=19999 persistent domain-override rules
//!   20000+      transient session allow rules

use super::rules::STATIC_RULES;
use super::types::{RuleAttribution, RuleSource};
use crate::constants::{CUSTOM_RULE_MIN, DYNAMIC_OVERRIDE_MIN, SESSION_RULE_MIN};
use crate::logic::intent::types::Intent;

// ============================================================================
// RESOLUTION
// ============================================================================

/// Resolve attribution for a matched rule.
pub fn attribute(rule_id: u32, ruleset_id: &str) -> RuleAttribution {
    if let Some(rule) = STATIC_RULES.iter().find(|r| r.rule_id == rule_id) {
        return RuleAttribution {
            filter: rule.filter.to_string(),
            list: rule.list.to_string(),
            description: rule.description.to_string(),
            source: RuleSource::Static,
            intent: rule.intent,
            category: rule.intent.category(),
        };
    }

    if (DYNAMIC_OVERRIDE_MIN..SESSION_RULE_MIN).contains(&rule_id) {
        return RuleAttribution {
            filter: format!("dynamic-rule-{}", rule_id),
            list: "User overrides".to_string(),
            description: "Dynamic override rule created from a user domain allow/block decision"
                .to_string(),
            source: RuleSource::Dynamic,
            intent: Intent::Unknown,
            category: Intent::Unknown.category(),
        };
    }

    if (CUSTOM_RULE_MIN..DYNAMIC_OVERRIDE_MIN).contains(&rule_id) {
        return RuleAttribution {
            filter: format!("custom-rule-{}", rule_id),
            list: "Custom rules".to_string(),
            description: "Custom network rule added by the user".to_string(),
            source: RuleSource::Custom,
            intent: Intent::Unknown,
            category: Intent::Unknown.category(),
        };
    }

    RuleAttribution {
        filter: String::new(),
        list: ruleset_id.to_string(),
        description: "Unknown rule".to_string(),
        source: RuleSource::Unknown,
        intent: Intent::Unknown,
        category: Intent::Unknown.category(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::intent::types::Category;

    #[test]
    fn test_static_lookup() {
        let a = attribute(1, "adtrace_rules");
        assert_eq!(a.source, RuleSource::Static);
        assert_eq!(a.filter, "||doubleclick.net^");
        assert_eq!(a.list, "EasyList");
        assert_eq!(a.intent, Intent::AdNetwork);
        assert_eq!(a.category, Category::Ad);
    }

    #[test]
    fn test_dynamic_band() {
        let a = attribute(10005, "adtrace_rules");
        assert_eq!(a.source, RuleSource::Dynamic);
        assert!(a.description.contains("override"));
    }

    #[test]
    fn test_custom_band() {
        let a = attribute(5000, "adtrace_rules");
        assert_eq!(a.source, RuleSource::Custom);
        assert!(a.description.contains("Custom network rule"));

        let upper = attribute(9999, "adtrace_rules");
        assert_eq!(upper.source, RuleSource::Custom);
    }

    #[test]
    fn test_band_boundaries() {
        // 19999 is the last override id, 20000 starts the session band
        assert_eq!(attribute(19999, "x").source, RuleSource::Dynamic);
        assert_eq!(attribute(20000, "x").source, RuleSource::Unknown);
    }

    #[test]
    fn test_unknown_carries_ruleset_id() {
        let a = attribute(4242, "adtrace_rules");
        assert_eq!(a.source, RuleSource::Unknown);
        assert_eq!(a.list, "adtrace_rules");
    }
}
