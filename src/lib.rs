//! AdTrace Core
//!
//! Classification, attribution and session-aggregation engine for
//! per-request network events. Maps each observed request to a
//! category/intent/breakage verdict, attributes blocked requests to
//! their filter rules, and aggregates everything into bounded per-tab
//! logs, rolling stats, a page-to-endpoint tracker graph, and a merged
//! request timeline.
//!
//! The engine never decides whether to block - the interceptor does
//! that and reports outcomes here.

pub mod api;
pub mod constants;
pub mod logic;

pub use api::{dispatch, EngineCommand, EngineResponse};
pub use logic::ingress;
pub use logic::intent::{classify, Category, Classification, Intent};
pub use logic::risk::{detect_risk, RiskVerdict};
pub use logic::session::{RequestEvent, SessionStore};
