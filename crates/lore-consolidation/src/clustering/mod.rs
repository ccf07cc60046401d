//! Greedy clustering and cluster aggregation.

pub mod aggregate;
pub mod greedy;

pub use aggregate::{summarize, summarize_all};
pub use greedy::cluster_records;
