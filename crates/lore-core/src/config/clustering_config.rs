use serde::{Deserialize, Serialize};

use super::{check_positive, check_threshold, defaults};
use crate::errors::LoreResult;

/// Options for greedy clustering. Doubles as the `[clustering]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    /// Minimum similarity to the centroid for a record to join a cluster.
    pub similarity_threshold: f64,
    /// Clusters smaller than this are discarded.
    pub min_cluster_size: usize,
    /// No more clusters than this are emitted.
    pub max_clusters: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_CLUSTER_SIMILARITY,
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            max_clusters: defaults::DEFAULT_MAX_CLUSTERS,
        }
    }
}

impl ClusterOptions {
    pub fn validate(&self) -> LoreResult<()> {
        check_threshold("similarity_threshold", self.similarity_threshold)?;
        check_positive("min_cluster_size", self.min_cluster_size)?;
        check_positive("max_clusters", self.max_clusters)
    }
}
