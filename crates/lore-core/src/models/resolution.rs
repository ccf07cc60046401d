use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contradiction::ContradictionCandidate;
use crate::record::KnowledgeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionAction {
    Superseded,
}

/// What was written when a contradiction was resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionDetail {
    pub resolved_at: DateTime<Utc>,
    pub superseded_by: String,
    pub reason: String,
    /// Loser's confidence before the penalty.
    pub original_confidence: f64,
    /// Loser's confidence after the penalty.
    pub new_confidence: f64,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub winner: String,
    pub loser: String,
    pub action: ResolutionAction,
    pub detail: ResolutionDetail,
}

/// A candidate that could not be resolved, with the error that stopped it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionFailure {
    pub contradiction: ContradictionCandidate,
    pub error: String,
}

/// Outcome of a batch resolution run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoResolveSummary {
    pub detected: usize,
    pub resolved: usize,
    pub failed: usize,
    pub resolutions: Vec<Resolution>,
    pub errors: Vec<ResolutionFailure>,
}

/// Short view of a record for display next to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: String,
    pub content: String,
    pub kind: KnowledgeKind,
    pub confidence: f64,
}

/// A superseded record and, when it still exists, the record that replaced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupersededRecord {
    pub id: String,
    pub content: String,
    pub kind: KnowledgeKind,
    pub original_confidence: f64,
    pub current_confidence: f64,
    pub superseded_by: String,
    pub superseded_at: DateTime<Utc>,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superseded_by_record: Option<RecordSummary>,
}
