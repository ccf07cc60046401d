//! Headline counts over the whole collection.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use lore_core::models::{CollectionStats, ConfidenceBands};
use lore_core::record::{KnowledgeKind, KnowledgeRecord};

pub fn collection_stats(records: &[KnowledgeRecord]) -> CollectionStats {
    let mut by_kind: BTreeMap<KnowledgeKind, usize> = BTreeMap::new();
    let mut bands = ConfidenceBands::default();
    for r in records {
        *by_kind.entry(r.kind).or_default() += 1;
        if r.confidence.is_high() {
            bands.high += 1;
        } else if r.confidence.is_low() {
            bands.low += 1;
        } else {
            bands.medium += 1;
        }
    }

    // Highest access count; ties go to the smaller id.
    let most_accessed_id = records
        .iter()
        .min_by_key(|r| (Reverse(r.access_count), r.id.as_str()))
        .map(|r| r.id.clone());

    CollectionStats {
        total: records.len(),
        by_kind,
        by_confidence: bands,
        verified: records.iter().filter(|r| r.verified).count(),
        superseded: records.iter().filter(|r| r.is_superseded()).count(),
        most_accessed_id,
    }
}
