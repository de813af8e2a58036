//! Intent & Category Types
//!
//! Core types for request classification. No logic here, only data
//! structures shared across the engine.

use serde::{Deserialize, Serialize};

// ============================================================================
// INTENT
// ============================================================================

/// Presumed purpose of a third-party domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    AdNetwork,
    Fingerprinting,
    SessionReplay,
    Analytics,
    CryptoMiner,
    PaymentSdk,
    Cdn,
    Social,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::AdNetwork => "ad-network",
            Intent::Fingerprinting => "fingerprinting",
            Intent::SessionReplay => "session-replay",
            Intent::Analytics => "analytics",
            Intent::CryptoMiner => "crypto-miner",
            Intent::PaymentSdk => "payment-sdk",
            Intent::Cdn => "cdn",
            Intent::Social => "social",
            Intent::Unknown => "unknown",
        }
    }

    /// Coarse bucket used for UI grouping and stats counters
    pub fn category(&self) -> Category {
        match self {
            Intent::AdNetwork => Category::Ad,
            Intent::Analytics | Intent::SessionReplay | Intent::Fingerprinting => {
                Category::Tracker
            }
            Intent::Social => Category::Social,
            _ => Category::Other,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CATEGORY
// ============================================================================

/// Coarse classification bucket derived from intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ad,
    Tracker,
    Social,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ad => "ad",
            Category::Tracker => "tracker",
            Category::Social => "social",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Result of classifying a single URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub intent: Intent,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            category: Category::Other,
            intent: Intent::Unknown,
        }
    }
}

impl Classification {
    pub fn from_intent(intent: Intent) -> Self {
        Self {
            category: intent.category(),
            intent,
        }
    }
}
