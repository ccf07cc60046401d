use serde::{Deserialize, Serialize};

/// A tag proposed for every member of a cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSuggestion {
    pub suggested_tag: String,
    pub alternative_tags: Vec<String>,
    pub cluster_size: usize,
    /// Average confidence of the cluster, used as confidence in the suggestion.
    pub confidence: f64,
    pub reason: String,
    pub affected_ids: Vec<String>,
}
