//! False-Positive Risk Types

use serde::{Deserialize, Serialize};

/// Verdict on whether blocking a request is likely to break the page.
///
/// This is a statement about breakage risk, not about classification
/// accuracy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub is_risk: bool,
    /// Reason tag (payment, auth, fonts, app-analytics, essential-cdn)
    pub reason: Option<String>,
    /// Table entry that matched
    pub matched_domain: Option<String>,
}

impl Default for RiskVerdict {
    fn default() -> Self {
        Self {
            is_risk: false,
            reason: None,
            matched_domain: None,
        }
    }
}

impl RiskVerdict {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn hit(reason: &str, matched_domain: &str) -> Self {
        Self {
            is_risk: true,
            reason: Some(reason.to_string()),
            matched_domain: Some(matched_domain.to_string()),
        }
    }
}
