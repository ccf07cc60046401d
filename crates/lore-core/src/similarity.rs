//! Cosine similarity and vector normalization over fixed-length embeddings.

use crate::record::KnowledgeRecord;

/// Cosine similarity between two vectors.
/// Returns 0.0 for zero-length, mismatched, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Scale a vector to unit length. A zero vector is returned unchanged.
pub fn normalize(v: &[f32]) -> Vec<f32> {
    let norm = v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
    if norm < f64::EPSILON {
        return v.to_vec();
    }
    v.iter().map(|x| (*x as f64 / norm) as f32).collect()
}

/// Similarity between two records' embeddings.
///
/// `None` when either record is unembedded or the dimensions disagree,
/// so malformed records drop out of every similarity-based operation.
pub fn record_similarity(a: &KnowledgeRecord, b: &KnowledgeRecord) -> Option<f64> {
    let (ea, eb) = (a.embedding()?, b.embedding()?);
    if ea.len() != eb.len() {
        return None;
    }
    Some(cosine_similarity(ea, eb))
}
