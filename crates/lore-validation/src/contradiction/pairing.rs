//! Single-pair evaluation and winner selection.

use std::cmp::Ordering;

use lore_core::config::DetectionOptions;
use lore_core::models::ContradictionCandidate;
use lore_core::record::{are_related, KnowledgeRecord};
use lore_core::similarity::record_similarity;

use super::reason;

/// Evaluate one pair against the detection options.
///
/// Returns `None` when the pair is the same record, crosses kinds under
/// `same_kind_only`, is explicitly linked, lacks comparable embeddings, or
/// falls below either threshold.
pub fn evaluate_pair(
    a: &KnowledgeRecord,
    b: &KnowledgeRecord,
    options: &DetectionOptions,
) -> Option<ContradictionCandidate> {
    if a.id == b.id {
        return None;
    }
    if options.same_kind_only && a.kind != b.kind {
        return None;
    }
    if are_related(a, b) {
        return None;
    }

    let similarity = record_similarity(a, b)?;
    if similarity < options.similarity_threshold {
        return None;
    }

    let confidence_delta = a.confidence.delta(b.confidence);
    if confidence_delta < options.min_confidence_delta {
        return None;
    }

    let (winner, loser) = rank(a, b);
    Some(ContradictionCandidate {
        a: a.id.clone(),
        b: b.id.clone(),
        similarity,
        confidence_delta,
        winner: winner.id.clone(),
        loser: loser.id.clone(),
        reason: reason::describe(a, b, similarity, confidence_delta),
    })
}

/// Order a pair as `(winner, loser)`.
///
/// Higher confidence wins. On an exact tie a verified record beats an
/// unverified one, then the lexicographically smaller id wins.
pub fn rank<'r>(
    a: &'r KnowledgeRecord,
    b: &'r KnowledgeRecord,
) -> (&'r KnowledgeRecord, &'r KnowledgeRecord) {
    let ordering = a
        .confidence
        .value()
        .total_cmp(&b.confidence.value())
        .then_with(|| a.verified.cmp(&b.verified))
        .then_with(|| b.id.cmp(&a.id));
    match ordering {
        Ordering::Less => (b, a),
        _ => (a, b),
    }
}
