//! False-Positive Risk Detection
//!
//! Flags requests whose blocking is likely to break page functionality
//! (payment, auth, fonts, error reporting, essential CDNs).

pub mod detector;
pub mod rules;
pub mod types;

pub use detector::detect_risk;
pub use types::RiskVerdict;
