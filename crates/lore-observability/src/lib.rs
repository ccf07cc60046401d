//! # lore-observability
//!
//! Structured logging for the engine: subscriber setup driven by
//! `[observability]` config and one span per top-level operation.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, spans::names, LOG_ENV};
