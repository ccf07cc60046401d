//! Insight generation from clusters, frequency analysis and the raw records.

pub mod generator;

pub use generator::generate_insights;
