use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::kind::KnowledgeKind;
use super::supersession::{Supersession, SupersedesEntry};

/// One unit of stored knowledge. Every record in the collection is a KnowledgeRecord.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    /// UUID v4 identifier.
    pub id: String,
    /// The kind of this record.
    pub kind: KnowledgeKind,
    /// Primary text, non-empty.
    pub content: String,
    /// Optional secondary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub confidence: Confidence,
    #[serde(default)]
    pub verified: bool,
    /// Free-form tags.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Produced externally. Absent until the record has been embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    pub created_at: DateTime<Utc>,
    /// Last time this record was read.
    pub last_accessed_at: DateTime<Utc>,
    /// Number of times read. Never decreases.
    #[serde(default)]
    pub access_count: u64,
    /// Manually curated links. Linked records never contradict each other.
    #[serde(default)]
    pub related_ids: BTreeSet<String>,
    /// Set once this record has lost a contradiction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supersession: Option<Supersession>,
    /// Records this one has superseded, oldest first.
    #[serde(default)]
    pub supersedes: Vec<SupersedesEntry>,
}

impl KnowledgeRecord {
    /// Create a fresh, unembedded record with a new id and full confidence.
    pub fn new(kind: KnowledgeKind, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            content: content.into(),
            context: None,
            confidence: Confidence::default(),
            verified: false,
            tags: BTreeSet::new(),
            embedding: None,
            created_at: now,
            last_accessed_at: now,
            access_count: 0,
            related_ids: BTreeSet::new(),
            supersession: None,
            supersedes: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Confidence::new(confidence);
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.last_accessed_at = created_at;
        self
    }

    pub fn with_access_count(mut self, access_count: u64) -> Self {
        self.access_count = access_count;
        self
    }

    pub fn with_related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn is_superseded(&self) -> bool {
        self.supersession.is_some()
    }

    /// Borrow the embedding if present and non-empty.
    pub fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref().filter(|e| !e.is_empty())
    }

    /// Eligible for similarity-based operations: embedded and not superseded.
    pub fn is_comparable(&self) -> bool {
        !self.is_superseded() && self.embedding().is_some()
    }

    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Whether either record explicitly links to the other.
pub fn are_related(a: &KnowledgeRecord, b: &KnowledgeRecord) -> bool {
    a.related_ids.contains(&b.id) || b.related_ids.contains(&a.id)
}

/// Identity equality: two records are equal if they have the same ID.
impl PartialEq for KnowledgeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_active_and_unaccessed() {
        let r = KnowledgeRecord::new(KnowledgeKind::Decision, "Use sqlx");
        assert!(!r.is_superseded());
        assert_eq!(r.access_count, 0);
        assert!(r.embedding().is_none());
        assert!(!r.is_comparable());
    }

    #[test]
    fn empty_embedding_counts_as_absent() {
        let r = KnowledgeRecord::new(KnowledgeKind::Error, "boom").with_embedding(vec![]);
        assert!(r.embedding().is_none());
    }

    #[test]
    fn relation_is_checked_in_both_directions() {
        let a = KnowledgeRecord::new(KnowledgeKind::Error, "a").with_id("a");
        let b = KnowledgeRecord::new(KnowledgeKind::Solution, "b")
            .with_id("b")
            .with_related(["a"]);
        assert!(are_related(&a, &b));
        assert!(are_related(&b, &a));
    }
}
