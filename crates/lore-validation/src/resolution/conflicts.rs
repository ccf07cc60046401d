use lore_core::constants::NEARLY_IDENTICAL_SIMILARITY;
use lore_core::models::{ConflictRecommendation, PotentialConflict};
use lore_core::record::KnowledgeRecord;
use lore_core::similarity::cosine_similarity;

/// Existing live records that a not-yet-stored embedding closely matches.
///
/// Results are sorted by similarity, highest first. Records whose embedding
/// length differs from `embedding` never match.
pub fn find_conflicts(
    records: &[KnowledgeRecord],
    embedding: &[f32],
    threshold: f64,
) -> Vec<PotentialConflict> {
    if embedding.is_empty() {
        return Vec::new();
    }

    let mut conflicts: Vec<PotentialConflict> = records
        .iter()
        .filter(|r| r.is_comparable())
        .filter_map(|r| {
            let existing = r.embedding()?;
            if existing.len() != embedding.len() {
                return None;
            }
            let similarity = cosine_similarity(embedding, existing);
            (similarity >= threshold).then(|| PotentialConflict {
                record: r.clone(),
                similarity,
                recommendation: recommend(similarity),
            })
        })
        .collect();

    conflicts.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    conflicts
}

fn recommend(similarity: f64) -> ConflictRecommendation {
    if similarity > NEARLY_IDENTICAL_SIMILARITY {
        ConflictRecommendation::UpdateExisting
    } else {
        ConflictRecommendation::Review
    }
}
