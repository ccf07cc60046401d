use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::base::KnowledgeRecord;
use super::confidence::Confidence;
use super::supersession::{Supersession, SupersedesEntry};

/// A partial metadata update. Only present fields are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_ids: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supersession: Option<Supersession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supersedes: Option<Vec<SupersedesEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_count: Option<u64>,
}

impl RecordPatch {
    /// Patch that marks a record as the loser of a contradiction.
    pub fn supersede(supersession: Supersession, confidence: Confidence) -> Self {
        Self {
            supersession: Some(supersession),
            confidence: Some(confidence),
            ..Self::default()
        }
    }

    /// Patch that replaces a winner's audit trail.
    pub fn supersedes(entries: Vec<SupersedesEntry>) -> Self {
        Self {
            supersedes: Some(entries),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `record`. The access counter never moves backwards.
    pub fn apply(self, record: &mut KnowledgeRecord) {
        if let Some(confidence) = self.confidence {
            record.confidence = confidence;
        }
        if let Some(verified) = self.verified {
            record.verified = verified;
        }
        if let Some(tags) = self.tags {
            record.tags = tags;
        }
        if let Some(related_ids) = self.related_ids {
            record.related_ids = related_ids;
        }
        if let Some(supersession) = self.supersession {
            record.supersession = Some(supersession);
        }
        if let Some(supersedes) = self.supersedes {
            record.supersedes = supersedes;
        }
        if let Some(at) = self.last_accessed_at {
            record.last_accessed_at = at;
        }
        if let Some(count) = self.access_count {
            record.access_count = record.access_count.max(count);
        }
    }
}
