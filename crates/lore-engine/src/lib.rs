//! # lore-engine
//!
//! `QualityEngine` ties the store to every quality pass: contradiction
//! detection and resolution, supersession history, pre-write conflict
//! checks, clustering, pattern analysis, insights, anti-patterns, tag
//! suggestions and collection statistics.
//!
//! Every operation reads a fresh snapshot through the store. Resolution
//! writes go back through `update_metadata` only.

pub mod engine;

pub use engine::QualityEngine;
