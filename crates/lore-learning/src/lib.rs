//! # lore-learning
//!
//! Learns from the collection as a whole: recurring content, growth,
//! confidence by kind, structural anti-patterns, and tags worth adding.
//! Everything here is a pure function of a record snapshot.

pub mod analysis;
pub mod anti_patterns;
pub mod insights;
pub mod miner;
pub mod stats;
pub mod tags;

pub use analysis::{analyze_frequency, analyze_frequency_at};
pub use anti_patterns::detect_anti_patterns;
pub use insights::generate_insights;
pub use miner::PatternMiner;
pub use stats::collection_stats;
pub use tags::suggest_tags;
