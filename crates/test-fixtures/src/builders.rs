//! Terse constructors for records used across test suites.

use chrono::{Duration, Utc};

use lore_core::record::{KnowledgeKind, KnowledgeRecord};

/// Record with a fixed id, content, and confidence. Unembedded.
pub fn record(id: &str, kind: KnowledgeKind, content: &str, confidence: f64) -> KnowledgeRecord {
    KnowledgeRecord::new(kind, content)
        .with_id(id)
        .with_confidence(confidence)
}

pub fn error(id: &str, content: &str) -> KnowledgeRecord {
    record(id, KnowledgeKind::Error, content, 0.8)
}

pub fn solution(id: &str, content: &str) -> KnowledgeRecord {
    record(id, KnowledgeKind::Solution, content, 0.8)
}

/// Unit vector along `index` in `dims` dimensions.
pub fn axis(index: usize, dims: usize) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[index] = 1.0;
    v
}

/// A vector close to `axis(index, dims)`: cosine similarity above 0.99.
pub fn near(index: usize, dims: usize, jitter_index: usize) -> Vec<f32> {
    let mut v = axis(index, dims);
    v[jitter_index] += 0.1;
    v
}

/// Backdate a record's creation and last access.
pub fn at_days_ago(record: KnowledgeRecord, days: i64) -> KnowledgeRecord {
    record.with_created_at(Utc::now() - Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::similarity::cosine_similarity;

    #[test]
    fn near_vectors_stay_above_contradiction_threshold() {
        let s = cosine_similarity(&axis(0, 4), &near(0, 4, 1));
        assert!(s > 0.99, "similarity was {s}");
    }

    #[test]
    fn axes_are_orthogonal() {
        assert!(cosine_similarity(&axis(0, 4), &axis(1, 4)).abs() < 1e-9);
    }
}
