//! Engine Logic
//!
//! The pure classification components (intent, risk, attribution), the
//! stateful session store, the event ingress, and report export.

pub mod attribution;
pub mod ingress;
pub mod intent;
pub mod report;
pub mod risk;
pub mod session;
