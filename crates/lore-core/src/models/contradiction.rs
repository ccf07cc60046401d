use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::KnowledgeRecord;

/// A pair of near-duplicate records that disagree in confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionCandidate {
    /// First record of the pair, in input order.
    pub a: String,
    /// Second record of the pair, in input order.
    pub b: String,
    pub similarity: f64,
    pub confidence_delta: f64,
    /// The record that survives resolution.
    pub winner: String,
    /// The record that gets superseded.
    pub loser: String,
    /// Human-readable composition of the signals that flagged the pair.
    pub reason: String,
}

impl ContradictionCandidate {
    /// Whether this candidate involves both ids, in either order.
    pub fn involves(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContradictionReport {
    pub contradictions: Vec<ContradictionCandidate>,
}

/// What a caller should do about an existing record that a new one would duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictRecommendation {
    UpdateExisting,
    Review,
}

impl fmt::Display for ConflictRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateExisting => {
                f.write_str("Consider updating existing record instead of creating a new one")
            }
            Self::Review => f.write_str("Review for potential contradiction"),
        }
    }
}

/// An existing record that a not-yet-stored one closely matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialConflict {
    pub record: KnowledgeRecord,
    pub similarity: f64,
    pub recommendation: ConflictRecommendation,
}
