use std::collections::BTreeSet;

use lore_core::models::{CentroidSummary, Cluster, ClusterSummary};
use lore_core::record::{KnowledgeKind, KnowledgeRecord};

const CENTROID_PREVIEW_CHARS: usize = 100;

/// Build a cluster from its members. The first member is the centroid.
pub(crate) fn build_cluster(members: &[&KnowledgeRecord]) -> Cluster {
    let size = members.len();
    let n = size.max(1) as f64;
    let avg_confidence = members.iter().map(|m| m.confidence.value()).sum::<f64>() / n;
    let avg_access_count = members.iter().map(|m| m.access_count as f64).sum::<f64>() / n;
    let kinds: BTreeSet<KnowledgeKind> = members.iter().map(|m| m.kind).collect();
    let tags: BTreeSet<String> = members.iter().flat_map(|m| m.tags.iter().cloned()).collect();

    Cluster {
        centroid: members[0].clone(),
        members: members.iter().map(|m| (*m).clone()).collect(),
        size,
        avg_confidence,
        avg_access_count,
        kinds,
        tags,
    }
}

/// Compact view of a cluster for reports. The centroid content is cut to
/// its first 100 characters.
pub fn summarize(cluster: &Cluster) -> ClusterSummary {
    ClusterSummary {
        size: cluster.size,
        kinds: cluster.kinds.clone(),
        tags: cluster.tags.clone(),
        avg_confidence: cluster.avg_confidence,
        centroid: CentroidSummary {
            id: cluster.centroid.id.clone(),
            content: cluster
                .centroid
                .content
                .chars()
                .take(CENTROID_PREVIEW_CHARS)
                .collect(),
        },
    }
}

pub fn summarize_all(clusters: &[Cluster]) -> Vec<ClusterSummary> {
    clusters.iter().map(summarize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_members() {
        let a = KnowledgeRecord::new(KnowledgeKind::Error, "a".repeat(150))
            .with_confidence(0.9)
            .with_access_count(4)
            .with_tags(["db"]);
        let b = KnowledgeRecord::new(KnowledgeKind::Solution, "b")
            .with_confidence(0.5)
            .with_access_count(2)
            .with_tags(["db", "ops"]);
        let cluster = build_cluster(&[&a, &b]);

        assert_eq!(cluster.size, 2);
        assert_eq!(cluster.centroid.id, a.id);
        assert!((cluster.avg_confidence - 0.7).abs() < 1e-9);
        assert!((cluster.avg_access_count - 3.0).abs() < 1e-9);
        assert_eq!(cluster.kinds.len(), 2);
        assert_eq!(cluster.tags.iter().collect::<Vec<_>>(), vec!["db", "ops"]);

        let summary = summarize(&cluster);
        assert_eq!(summary.centroid.content.chars().count(), 100);
        assert_eq!(summary.size, 2);
    }
}
