//! # lore-consolidation
//!
//! Groups semantically close records around a seed record.
//!
//! Clustering is greedy and centroid-only: the most accessed unassigned
//! record opens a cluster and absorbs every unassigned record whose
//! similarity to it clears the threshold. Members are never compared with
//! each other, so membership is not transitive.

pub mod clustering;

pub use clustering::{cluster_records, summarize, summarize_all};
