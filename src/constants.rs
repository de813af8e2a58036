//! Central Configuration Constants
//!
//! Single source of truth for engine limits and wire contracts.
//! The rule-id bands are shared with the interceptor; changing them
//! here without changing the rule allocator breaks attribution.

/// App name
pub const APP_NAME: &str = "AdTrace";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum retained entries per tab in the block log
pub const BLOCK_LOG_CAP: usize = 500;

/// Maximum retained entries per tab in the allow log
pub const ALLOW_LOG_CAP: usize = 500;

// ============================================================================
// RULE-ID BANDS (wire contract with the interceptor)
// ============================================================================

/// Static list rules: 0..=4999
pub const STATIC_RULE_MAX: u32 = 4999;

/// Custom user network rules: 5000..=9999
pub const CUSTOM_RULE_MIN: u32 = 5000;

/// Persistent domain-override rules: 10000..=19999
pub const DYNAMIC_OVERRIDE_MIN: u32 = 10000;

/// Transient/session allow rules: 20000+
pub const SESSION_RULE_MIN: u32 = 20000;

// ============================================================================
// ESTIMATED LOAD-TIME SAVINGS (milliseconds per blocked request)
// ============================================================================

/// Blocked script
pub const SAVINGS_SCRIPT_MS: u64 = 80;

/// Blocked sub-frame
pub const SAVINGS_SUBFRAME_MS: u64 = 100;

/// Blocked XHR/fetch
pub const SAVINGS_XHR_MS: u64 = 30;

/// Blocked image
pub const SAVINGS_IMAGE_MS: u64 = 20;

/// Everything else
pub const SAVINGS_DEFAULT_MS: u64 = 5;
