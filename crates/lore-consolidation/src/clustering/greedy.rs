use std::cmp::Reverse;

use lore_core::config::ClusterOptions;
use lore_core::models::Cluster;
use lore_core::record::KnowledgeRecord;
use lore_core::similarity::record_similarity;
use tracing::{debug, instrument};

use super::aggregate::build_cluster;

/// Cluster live, embedded records around their most accessed members.
///
/// Seeds are taken in access order (most accessed first, then older, then
/// smaller id). Records absorbed by a discarded, undersized cluster stay
/// assigned. Iteration stops once `max_clusters` clusters are kept. The
/// result is ordered largest first; equal sizes keep discovery order.
#[instrument(skip_all, fields(records = records.len()))]
pub fn cluster_records(records: &[KnowledgeRecord], options: &ClusterOptions) -> Vec<Cluster> {
    let mut candidates: Vec<&KnowledgeRecord> =
        records.iter().filter(|r| r.is_comparable()).collect();
    candidates.sort_by(|a, b| {
        Reverse(a.access_count)
            .cmp(&Reverse(b.access_count))
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut assigned = vec![false; candidates.len()];
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut discarded = 0usize;

    for seed in 0..candidates.len() {
        if clusters.len() >= options.max_clusters {
            break;
        }
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;

        let centroid = candidates[seed];
        let mut members = vec![centroid];
        for other in seed + 1..candidates.len() {
            if assigned[other] {
                continue;
            }
            let joins = record_similarity(centroid, candidates[other])
                .is_some_and(|s| s >= options.similarity_threshold);
            if joins {
                assigned[other] = true;
                members.push(candidates[other]);
            }
        }

        if members.len() >= options.min_cluster_size {
            clusters.push(build_cluster(&members));
        } else {
            discarded += 1;
        }
    }

    clusters.sort_by_key(|c| Reverse(c.size));
    debug!(
        candidates = candidates.len(),
        clusters = clusters.len(),
        discarded,
        "clustering complete"
    );
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::record::KnowledgeKind;

    fn rec(id: &str, access: u64, embedding: Vec<f32>) -> KnowledgeRecord {
        KnowledgeRecord::new(KnowledgeKind::Pattern, format!("pattern {id}"))
            .with_id(id)
            .with_access_count(access)
            .with_embedding(embedding)
    }

    #[test]
    fn most_accessed_record_seeds_the_cluster() {
        let records = vec![
            rec("quiet", 1, vec![1.0, 0.1]),
            rec("busy", 10, vec![1.0, 0.0]),
        ];
        let clusters = cluster_records(&records, &ClusterOptions::default());
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].centroid.id, "busy");
        assert_eq!(clusters[0].member_ids(), vec!["busy", "quiet"]);
    }

    #[test]
    fn membership_is_not_transitive() {
        // b is close to both a and c, but a and c are far apart.
        let records = vec![
            rec("a", 3, vec![1.0, 0.0]),
            rec("b", 2, vec![1.0, 1.0]),
            rec("c", 1, vec![0.0, 1.0]),
        ];
        let opts = ClusterOptions {
            similarity_threshold: 0.7,
            min_cluster_size: 1,
            max_clusters: 10,
        };
        let clusters = cluster_records(&records, &opts);
        let ids: Vec<Vec<String>> = clusters.iter().map(|c| c.member_ids()).collect();
        assert_eq!(ids, vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]]);
    }

    #[test]
    fn unembedded_records_are_ignored() {
        let records = vec![
            rec("a", 3, vec![1.0, 0.0]),
            KnowledgeRecord::new(KnowledgeKind::Pattern, "bare").with_id("bare"),
        ];
        let opts = ClusterOptions {
            min_cluster_size: 1,
            ..ClusterOptions::default()
        };
        let clusters = cluster_records(&records, &opts);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].size, 1);
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        assert!(cluster_records(&[], &ClusterOptions::default()).is_empty());
    }
}
