//! Outbound API
//!
//! Typed command/query interface consumed by the inspection surfaces.

pub mod commands;

pub use commands::{dispatch, EngineCommand, EngineResponse};
