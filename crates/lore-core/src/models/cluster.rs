use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::{KnowledgeKind, KnowledgeRecord};

/// A group of records close to a seed record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// The seed record every member was compared against.
    pub centroid: KnowledgeRecord,
    /// All members, centroid first.
    pub members: Vec<KnowledgeRecord>,
    pub size: usize,
    pub avg_confidence: f64,
    pub avg_access_count: f64,
    pub kinds: BTreeSet<KnowledgeKind>,
    pub tags: BTreeSet<String>,
}

impl Cluster {
    pub fn member_ids(&self) -> Vec<String> {
        self.members.iter().map(|m| m.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentroidSummary {
    pub id: String,
    /// First 100 characters of the centroid's content.
    pub content: String,
}

/// Compact view of a cluster for reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub size: usize,
    pub kinds: BTreeSet<KnowledgeKind>,
    pub tags: BTreeSet<String>,
    pub avg_confidence: f64,
    pub centroid: CentroidSummary,
}
