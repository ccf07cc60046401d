//! Contradiction detection over a record snapshot.

pub mod pairing;
pub mod reason;

use lore_core::config::DetectionOptions;
use lore_core::models::ContradictionCandidate;
use lore_core::record::KnowledgeRecord;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Scans every unordered pair of comparable records.
///
/// The outer loop is sharded across the rayon pool. Output order is the
/// sequential pair order `(i, j)` with `i < j` over the input.
pub struct ContradictionDetector;

impl ContradictionDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect contradictions among `records`.
    ///
    /// Superseded and unembedded records are skipped. Cost is quadratic in
    /// the number of comparable records.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn detect(
        &self,
        records: &[KnowledgeRecord],
        options: &DetectionOptions,
    ) -> Vec<ContradictionCandidate> {
        let comparable: Vec<&KnowledgeRecord> =
            records.iter().filter(|r| r.is_comparable()).collect();
        let comparable = comparable.as_slice();

        let candidates: Vec<ContradictionCandidate> = (0..comparable.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                let a = comparable[i];
                let rest: &[&KnowledgeRecord] = &comparable[i + 1..];
                rest.iter()
                    .filter_map(move |b| pairing::evaluate_pair(a, b, options))
            })
            .collect();

        debug!(
            comparable = comparable.len(),
            contradictions = candidates.len(),
            "contradiction scan complete"
        );
        candidates
    }
}

impl Default for ContradictionDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::record::KnowledgeKind;

    fn rec(id: &str, confidence: f64, embedding: Vec<f32>) -> KnowledgeRecord {
        KnowledgeRecord::new(KnowledgeKind::Decision, format!("record {id}"))
            .with_id(id)
            .with_confidence(confidence)
            .with_embedding(embedding)
    }

    #[test]
    fn empty_input_yields_nothing() {
        let found = ContradictionDetector::new().detect(&[], &DetectionOptions::default());
        assert!(found.is_empty());
    }

    #[test]
    fn output_follows_pair_order() {
        let e = vec![1.0, 0.0, 0.0];
        let records = vec![
            rec("r0", 0.9, e.clone()),
            rec("r1", 0.5, e.clone()),
            rec("r2", 0.2, e.clone()),
        ];
        let found = ContradictionDetector::new().detect(&records, &DetectionOptions::default());
        let pairs: Vec<(&str, &str)> = found.iter().map(|c| (c.a.as_str(), c.b.as_str())).collect();
        assert_eq!(pairs, vec![("r0", "r1"), ("r0", "r2"), ("r1", "r2")]);
    }

    #[test]
    fn superseded_and_unembedded_records_are_skipped() {
        let e = vec![1.0, 0.0];
        let mut gone = rec("gone", 0.2, e.clone());
        gone.supersession = Some(lore_core::record::Supersession {
            superseded_by: "a".into(),
            superseded_at: chrono::Utc::now(),
            reason: "test".into(),
            original_confidence: 0.5.into(),
        });
        let bare = KnowledgeRecord::new(KnowledgeKind::Decision, "bare")
            .with_id("bare")
            .with_confidence(0.1);
        let records = vec![rec("a", 0.9, e), gone, bare];
        let found = ContradictionDetector::new().detect(&records, &DetectionOptions::default());
        assert!(found.is_empty());
    }
}
